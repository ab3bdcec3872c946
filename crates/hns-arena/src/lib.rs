//! `hns-arena` — the static world model for the `rust_hns` engine.
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`obstacle`] | `Obstacle` (axis-aligned box), `ObstacleSpec`           |
//! | [`raycast`]  | `RayHit`, `cast_ray`, `point_in_obstacle`, `collides`   |
//! | [`arena`]    | `Arena` — static + placed obstacle collections,         |
//! |              | procedural generation, placement footprints             |
//!
//! The two obstacle collections are owned sequences passed by reference into
//! the geometry queries; they are never aliased into agent-owned state.

pub mod arena;
pub mod obstacle;
pub mod raycast;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use arena::Arena;
pub use obstacle::{Obstacle, ObstacleSpec};
pub use raycast::{RayHit, cast_ray, collides, point_in_obstacle};
