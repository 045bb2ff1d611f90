//! `cs-behavior` — pluggable per-step agent logic.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                    |
//! |------------------|-------------------------------------------------------------|
//! | [`event`]        | `EventKind` lifecycle events, `EventMask`                   |
//! | [`context`]      | `StepContext` — read-only step snapshot shared by modules   |
//! | [`module`]       | `BehaviorModule` trait, `SimAgent` / `Population` aliases   |
//! | [`move_module`]  | `MoveModule` — uniform random displacement                  |
//! | [`noop`]         | `NoopModule` — placeholder that never acts                  |
//! | [`error`]        | `BehaviorError`, `BehaviorResult<T>`                        |
//!
//! # Design notes
//!
//! A module is invoked with the agent's [`AgentState`][cs_agent::AgentState]
//! and that agent's own RNG.  It never sees the container, so it cannot
//! reach other agents or append to the population mid-step.
//!
//! Before invoking a module the simulation compares the agent's capability
//! set with [`BehaviorModule::required_capabilities`]; modules are never run
//! on agents that cannot honour them.

pub mod context;
pub mod error;
pub mod event;
pub mod module;
pub mod move_module;
pub mod noop;


pub use context::StepContext;
pub use error::{BehaviorError, BehaviorResult};
pub use event::{EventKind, EventMask};
pub use module::{BehaviorModule, Population, SimAgent, derive_all};
pub use move_module::{DEFAULT_MOVE_RANGE, MoveModule};
pub use noop::NoopModule;
