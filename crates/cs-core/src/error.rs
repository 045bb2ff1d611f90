//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so `?` works across crate boundaries.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `cs-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A sampling request whose range is empty or not finite.
    ///
    /// Returned instead of clamping so that a bad caller never silently
    /// changes the random stream.
    #[error("invalid sampling range [{lo}, {hi}]")]
    InvalidRange { lo: f64, hi: f64 },

    /// An agent was appended under an id the container already holds.
    #[error("duplicate agent id {0}")]
    DuplicateAgentId(AgentId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `cs-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
