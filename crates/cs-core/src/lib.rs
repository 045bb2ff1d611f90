//! `cs-core` — foundational types for the `rust_cellsim` agent framework.
//!
//! This crate is a dependency of every other `cs-*` crate.  It intentionally
//! has no `cs-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`vec3`]        | `Vec3`, the 3-component position / delta type         |
//! | [`kind`]        | `AgentKind`, `Capability`, `CapabilitySet`            |
//! | [`bounds`]      | `BoundaryPolicy` (per-axis hard clamp)                |
//! | [`time`]        | `Step`, `SimClock`                                    |
//! | [`config`]      | `SimConfig`, `BoundaryConfig`                         |
//! | [`rng`]         | `RandomSource`, `AgentRng` (per-agent), `SimRng`      |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod bounds;
pub mod config;
pub mod error;
pub mod ids;
pub mod kind;
pub mod rng;
pub mod time;
pub mod vec3;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bounds::BoundaryPolicy;
pub use config::{BoundaryConfig, SimConfig};
pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use kind::{AgentKind, Capability, CapabilitySet};
pub use rng::{AgentRng, RandomSource, SimRng};
pub use time::{SimClock, Step};
pub use vec3::Vec3;
