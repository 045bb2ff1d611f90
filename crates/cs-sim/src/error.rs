use cs_behavior::BehaviorError;
use cs_core::{AgentId, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("behavior `{module}` failed on {agent}: {source}")]
    Behavior {
        agent:  AgentId,
        module: &'static str,
        #[source]
        source: BehaviorError,
    },
}

pub type SimResult<T> = Result<T, SimError>;
