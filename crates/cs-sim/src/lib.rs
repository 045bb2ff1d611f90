//! `cs-sim` — step loop scheduler for the rust_cellsim framework.
//!
//! # Two-phase step loop
//!
//! ```text
//! for step in 0..n:
//!   ① Behaviors — for each agent present at step start, in insertion order,
//!                 run each attached module in attachment order (after the
//!                 capability check).
//!   ② Bounds    — clamp every agent's position into the boundary region.
//!   ③ Observe   — step summary; snapshot on export-interval steps.
//! ```
//!
//! Step N's boundary phase always completes before step N+1's behaviors
//! start.  Cancellation is only honoured between steps.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cs_agent::{PopulationBuilder, PopulationConfig};
//! use cs_behavior::{BehaviorModule, MoveModule};
//! use cs_core::SimConfig;
//! use cs_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::default();
//! let population = PopulationBuilder::new(PopulationConfig::default(), config.seed)
//!     .build_with(|_| vec![Box::new(MoveModule::new()) as Box<dyn BehaviorModule>])?;
//! let mut sim = SimBuilder::new(config, population).build()?;
//! sim.simulate(500, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, StepSummary};
pub use sim::{CancelHandle, MismatchPolicy, SchedulerState, Sim};
