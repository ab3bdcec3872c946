//! `hns-core` — foundational types for the `rust_hns` pursuit-evasion engine.
//!
//! This crate is a dependency of every other `hns-*` crate.  It intentionally
//! has no `hns-*` dependencies and minimal external ones (only `rand`,
//! `rustc-hash`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `AgentId`, `ObstacleId`                               |
//! | [`geo`]    | `Vec2`, `Pose`, angle normalization, arena clamping   |
//! | [`time`]   | `Tick`                                                |
//! | [`rng`]    | `EpisodeRng` (per-episode deterministic generator)    |
//! | [`error`]  | `HnsError`, `HnsResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by external replay recorders.                     |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{HnsError, HnsResult};
pub use geo::{Pose, Vec2};
pub use ids::{AgentId, ObstacleId};
pub use rng::EpisodeRng;
pub use time::Tick;
