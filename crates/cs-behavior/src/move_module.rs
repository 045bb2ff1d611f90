//! Random-walk movement.

use cs_agent::AgentState;
use cs_core::{AgentRng, Capability, CapabilitySet, RandomSource, Vec3};

use crate::{BehaviorModule, BehaviorResult, EventKind, StepContext};

/// Default displacement interval per axis, per step.
pub const DEFAULT_MOVE_RANGE: (f64, f64) = (-2.0, 2.0);

/// Moves its agent by a random displacement every step.
///
/// Each step draws three independent samples uniformly from `[lo, hi]` and
/// adds them to the position.  On an agent whose kind lacks
/// [`Capability::Move`] it does nothing, even when called directly.  The result is not clamped here; the
/// simulation's boundary policy does that once all modules have run.
///
/// Stateless apart from its configured range, so it is copied unchanged on
/// every lifecycle event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MoveModule {
    lo: f64,
    hi: f64,
}

impl MoveModule {
    /// Displacement in `[-2, 2]` per axis.
    pub fn new() -> Self {
        let (lo, hi) = DEFAULT_MOVE_RANGE;
        Self { lo, hi }
    }

    /// Displacement in `[lo, hi]` per axis.
    ///
    /// The range is checked when sampling: an inverted range makes `run`
    /// fail with [`BehaviorError::Random`][crate::BehaviorError::Random].
    pub fn with_range(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn range(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }
}

impl Default for MoveModule {
    fn default() -> Self {
        Self::new()
    }
}

impl BehaviorModule for MoveModule {
    fn name(&self) -> &'static str {
        "move"
    }

    fn required_capabilities(&self) -> CapabilitySet {
        CapabilitySet::of(&[Capability::Move])
    }

    fn run(
        &mut self,
        agent: &mut AgentState,
        _ctx:  &StepContext,
        rng:   &mut AgentRng,
    ) -> BehaviorResult<()> {
        // Agents that cannot move are left untouched, and their stream is not
        // advanced.
        if !agent.capabilities().satisfies(self.required_capabilities()) {
            return Ok(());
        }
        let delta: [f64; 3] = rng.uniform_array(self.lo, self.hi)?;
        agent.update_position(Vec3::from(delta));
        Ok(())
    }

    fn derive_for(&self, _event: EventKind) -> Option<Box<dyn BehaviorModule>> {
        Some(Box::new(*self))
    }
}
