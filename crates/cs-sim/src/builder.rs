//! Fluent builder for constructing a [`Sim`].

use cs_behavior::Population;
use cs_core::SimConfig;

use crate::{CancelHandle, MismatchPolicy, SchedulerState, Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: seed, step counts, boundary settings
/// - [`Population`]: from [`cs_agent::PopulationBuilder`] or filled by hand
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                     |
/// |--------------------------|-----------------------------|
/// | `.mismatch_policy(p)`    | `MismatchPolicy::Skip`      |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, population)
///     .mismatch_policy(MismatchPolicy::Error)
///     .build()?;
/// sim.simulate(500, &mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:     SimConfig,
    population: Population,
    mismatch:   MismatchPolicy,
}

impl SimBuilder {
    pub fn new(config: SimConfig, population: Population) -> Self {
        Self { config, population, mismatch: MismatchPolicy::default() }
    }

    pub fn mismatch_policy(mut self, policy: MismatchPolicy) -> Self {
        self.mismatch = policy;
        self
    }

    /// Validate the configuration, resolve the boundary policy, and return
    /// an idle [`Sim`].
    ///
    /// Configuration errors (bad boundary range, non-positive time step) are
    /// reported here, before any step can run.
    pub fn build(self) -> SimResult<Sim> {
        let boundary = self.config.validate()?;

        if self.population.seed() != self.config.seed {
            return Err(SimError::Config(format!(
                "population seeded with {} but config seed is {}",
                self.population.seed(),
                self.config.seed
            )));
        }

        log::debug!(
            "built sim: {} agents, boundary {:?}, mismatch policy {:?}",
            self.population.len(),
            boundary,
            self.mismatch
        );

        Ok(Sim {
            clock:      self.config.make_clock(),
            config:     self.config,
            population: self.population,
            boundary,
            mismatch:   self.mismatch,
            state:      SchedulerState::Idle,
            cancel:     CancelHandle::default(),
        })
    }
}
