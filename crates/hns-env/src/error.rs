//! Engine error type.
//!
//! Only two situations are errors: a configuration the engine cannot run
//! (including spawn exhaustion at reset) and lookups with unknown agent ids.
//! Everything else irregular — dead agents acted upon, invalid placements,
//! out-of-range movement — is a policy decision represented in data, never
//! an error.

use hns_core::{AgentId, HnsError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("environment configuration error: {0}")]
    Config(String),

    /// The arena is too dense to place this agent.  Fatal: episode setup
    /// must abort, not silently skip the agent.
    #[error("failed to place agent {agent} after {attempts} attempts; arena too dense")]
    SpawnExhausted { agent: AgentId, attempts: u32 },

    #[error(transparent)]
    Core(#[from] HnsError),
}

pub type EnvResult<T> = Result<T, EnvError>;
