//! Top-level run configuration.
//!
//! Typically loaded from a TOML file by the application crate (with the
//! `serde` feature enabled) and handed to `cs_sim::SimBuilder`.  Validation
//! happens there, before any step runs.

use crate::{BoundaryPolicy, CoreError, CoreResult, SimClock, Step};

/// Spatial boundary settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoundaryConfig {
    /// When `false` agents may move anywhere and the bounds are ignored.
    pub bound_space: bool,
    pub min_bound: f64,
    pub max_bound: f64,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self { bound_space: true, min_bound: 0.0, max_bound: 1000.0 }
    }
}

/// Simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Steps performed by `Sim::run`.  `Sim::simulate` ignores this.
    pub total_steps: u64,

    /// Simulated time per step.
    pub time_step: f64,

    /// Export a snapshot every N steps.  0 disables snapshots.
    pub export_interval_steps: u64,

    pub boundary: BoundaryConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                  4357,
            total_steps:           500,
            time_step:             0.01,
            export_interval_steps: 2,
            boundary:              BoundaryConfig::default(),
        }
    }
}

impl SimConfig {
    /// The step at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_step(&self) -> Step {
        Step(self.total_steps)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.time_step)
    }

    /// Check the whole configuration and resolve its boundary policy.
    pub fn validate(&self) -> CoreResult<BoundaryPolicy> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(CoreError::Config(format!(
                "time_step must be positive, got {}",
                self.time_step
            )));
        }
        BoundaryPolicy::from_config(&self.boundary)
    }
}
