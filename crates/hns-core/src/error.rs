//! Base error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `HnsError` via `From` impls, or keep them separate and wrap `HnsError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `hns-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum HnsError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `hns-*` crates.
pub type HnsResult<T> = Result<T, HnsError>;
