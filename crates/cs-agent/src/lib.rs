//! `cs-agent` — agent state and storage for the `rust_cellsim` framework.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`agent`]       | `AgentState` (id, kind, position, diameter), `Agent<B>`   |
//! | [`container`]   | `AgentContainer<B>` (ordered storage + per-agent RNGs)    |
//! | [`builder`]     | `PopulationBuilder`, `PopulationConfig`, `PlacementRange` |
//!
//! `Agent<B>` is generic over the behavior type so this crate does not depend
//! on `cs-behavior`; the simulation instantiates it with
//! `Box<dyn BehaviorModule>`.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the config types.     |

pub mod agent;
pub mod builder;
pub mod container;


pub use agent::{Agent, AgentState};
pub use builder::{PlacementRange, PopulationBuilder, PopulationConfig};
pub use container::AgentContainer;
