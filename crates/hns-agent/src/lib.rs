//! `hns-agent` — agent model types for the `rust_hns` engine.
//!
//! | Module     | Contents                                      |
//! |------------|-----------------------------------------------|
//! | [`action`] | the discrete [`Action`] set                   |
//! | [`state`]  | [`AgentType`], [`AgentTraits`], [`AgentState`] |
//!
//! These are plain data types: all mutation happens inside the engine
//! (`hns-env`), which hands out clones to observers and renderers.

pub mod action;
pub mod state;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::Action;
pub use state::{AgentState, AgentTraits, AgentType};
