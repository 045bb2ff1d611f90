//! Read-only simulation state passed to every behavior module.

use cs_core::Step;

/// A read-only snapshot of the step in progress, passed to every
/// [`BehaviorModule`][crate::BehaviorModule] invocation.
///
/// Built once per step by cs-sim and shared by reference across all agents.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepContext {
    /// Step being processed.
    pub step: Step,

    /// Simulated time represented by one step.
    pub time_step: f64,

    /// Number of agents taking part in this step (membership at step start).
    pub agent_count: usize,
}

impl StepContext {
    #[inline]
    pub fn new(step: Step, time_step: f64, agent_count: usize) -> Self {
        Self { step, time_step, agent_count }
    }
}
