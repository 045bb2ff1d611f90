use cs_core::{AgentId, AgentKind, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    /// A sampling request the random source refused.
    #[error("random source: {0}")]
    Random(#[from] CoreError),

    #[error("module `{module}` cannot run on {agent} of kind {kind}")]
    CapabilityMismatch {
        module: &'static str,
        agent:  AgentId,
        kind:   AgentKind,
    },
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
