//! Plain data row types written by output backends.

use cs_agent::AgentState;
use cs_core::Step;
use cs_sim::StepSummary;

/// One agent's kind, position and size at a given step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub step:     u64,
    pub agent_id: u32,
    pub kind:     &'static str,
    pub x:        f64,
    pub y:        f64,
    pub z:        f64,
    pub diameter: f64,
}

impl AgentSnapshotRow {
    pub fn from_state(step: Step, state: &AgentState) -> Self {
        let p = state.position();
        Self {
            step:     step.0,
            agent_id: state.id().0,
            kind:     state.kind().as_str(),
            x:        p.x,
            y:        p.y,
            z:        p.z,
            diameter: state.diameter(),
        }
    }
}

/// Counters for one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSummaryRow {
    pub step:            u64,
    pub agents:          u64,
    pub modules_run:     u64,
    pub modules_skipped: u64,
}

impl StepSummaryRow {
    pub fn new(step: Step, summary: &StepSummary) -> Self {
        Self {
            step:            step.0,
            agents:          summary.agents as u64,
            modules_run:     summary.modules_run as u64,
            modules_skipped: summary.modules_skipped as u64,
        }
    }
}
