//! Snapshot data for external recorders.
//!
//! The engine produces these value types; persisting them (JSON, whatever
//! the replay viewer wants) is entirely the recorder's business.  With the
//! `serde` feature every field serializes.

use hns_agent::AgentType;
use hns_arena::Obstacle;
use hns_core::{AgentId, Tick, Vec2};

/// One agent's pose line in a replay frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameAgent {
    pub id: AgentId,
    /// Spawn-order label: hiders `H0..`, seekers `S0..`.
    pub call_sign: String,
    pub kind: AgentType,
    pub position: Vec2,
    pub heading: f32,
    pub alive: bool,
}

/// Everything a replay viewer needs to draw one tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplayFrame {
    pub tick: Tick,
    pub agents: Vec<FrameAgent>,
    /// Hiders captured during the step that produced this frame.
    pub captured: Vec<AgentId>,
    /// Obstacles placed during that step.
    pub placed: Vec<Obstacle>,
}

/// Static world description handed out once per episode.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaSnapshot {
    pub width: f32,
    pub height: f32,
    pub static_obstacles: Vec<Obstacle>,
}
