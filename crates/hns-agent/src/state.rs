//! Agent roles, immutable traits, and mutable per-episode state.

use std::fmt;

use hns_core::{AgentId, Pose, Vec2};

use crate::Action;

/// The two opposing roles.  Seekers hunt; hiders evade and may drop walls.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentType {
    Hider,
    Seeker,
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AgentType::Hider => "hider",
            AgentType::Seeker => "seeker",
        })
    }
}

// ── Traits ────────────────────────────────────────────────────────────────────

/// Per-role capabilities, immutable for the whole episode.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentTraits {
    /// Movement speed in arena units per second.
    pub speed: f32,
    /// How far the agent can see, in arena units.
    pub vision_range: f32,
    /// Full width of the vision cone, in degrees (config-friendly unit).
    pub fov_degrees: f32,
    /// Turn speed in radians per second.
    pub turn_rate: f32,
}

impl AgentTraits {
    /// Full field of view in radians.
    #[inline]
    pub fn fov_radians(&self) -> f32 {
        self.fov_degrees.to_radians()
    }

    /// Half-angle of the vision cone — the bearing limit for visibility.
    #[inline]
    pub fn half_fov(&self) -> f32 {
        self.fov_radians() * 0.5
    }
}

// ── State ─────────────────────────────────────────────────────────────────────

/// One agent's full mutable state.
///
/// Owned and exclusively mutated by the engine during `step`; everything a
/// caller gets back is a clone.  A dead agent keeps its last pose but never
/// moves, is never visible, and neither triggers nor receives captures.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    pub id: AgentId,
    pub kind: AgentType,
    pub pose: Pose,
    /// Realized displacement over the last tick, per second.  Zeroed when a
    /// move is blocked.
    pub velocity: Vec2,
    pub traits: AgentTraits,
    pub alive: bool,
    /// Obstacle placements left this episode.  Monotonically non-increasing.
    pub placements_remaining: u32,
    /// Seconds until the next placement is allowed; 0 when ready.
    pub placement_cooldown: f32,
    pub last_action: Action,
}

impl AgentState {
    /// A freshly spawned, living agent at `pose`.
    pub fn spawn(
        id: AgentId,
        kind: AgentType,
        traits: AgentTraits,
        pose: Pose,
        placements: u32,
    ) -> Self {
        Self {
            id,
            kind,
            pose,
            velocity: Vec2::ZERO,
            traits,
            alive: true,
            placements_remaining: placements,
            placement_cooldown: 0.0,
            last_action: Action::Idle,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pose.position
    }

    #[inline]
    pub fn is_hider(&self) -> bool {
        self.kind == AgentType::Hider
    }

    #[inline]
    pub fn is_seeker(&self) -> bool {
        self.kind == AgentType::Seeker
    }

    /// `true` if a placement action would currently be honored.
    #[inline]
    pub fn can_place(&self) -> bool {
        self.is_hider() && self.alive && self.placements_remaining > 0 && self.placement_cooldown <= 0.0
    }
}
