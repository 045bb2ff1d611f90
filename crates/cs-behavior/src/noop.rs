//! A no-op behavior module that never touches its agent.

use cs_agent::AgentState;
use cs_core::AgentRng;

use crate::{BehaviorModule, BehaviorResult, EventKind, EventMask, StepContext};

/// A [`BehaviorModule`] that does nothing.
///
/// Useful as a placeholder in tests or for passive agents that simply occupy
/// space.  Not carried over on lifecycle events.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopModule;

impl BehaviorModule for NoopModule {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn run(
        &mut self,
        _agent: &mut AgentState,
        _ctx:   &StepContext,
        _rng:   &mut AgentRng,
    ) -> BehaviorResult<()> {
        Ok(())
    }

    fn event_mask(&self) -> EventMask {
        EventMask::NONE
    }

    fn derive_for(&self, _event: EventKind) -> Option<Box<dyn BehaviorModule>> {
        None
    }
}
