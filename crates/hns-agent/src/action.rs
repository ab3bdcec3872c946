//! The discrete per-tick action set.
//!
//! An external policy emits one action per living agent per tick.  The
//! engine applies turning for the turn actions, a heading-relative movement
//! vector for the four directional actions, and the obstacle-placement
//! special for `PlaceObstacle`.  `Idle` is the documented default when a
//! caller omits an agent's action — an explicit no-op, not an accidental
//! fallback.

use std::fmt;

/// One agent's requested action for a tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Do nothing this tick.
    #[default]
    Idle,
    /// Rotate counter-clockwise by `turn_rate · dt`.
    TurnLeft,
    /// Rotate clockwise by `turn_rate · dt`.
    TurnRight,
    /// Move along the heading.
    Forward,
    /// Move against the heading.
    Backward,
    /// Move 90° counter-clockwise of the heading.
    StrafeLeft,
    /// Move 90° clockwise of the heading.
    StrafeRight,
    /// Hider only: drop a wall in front of the agent (budget + cooldown
    /// permitting).  Consumes the whole tick; no movement is applied.
    PlaceObstacle,
}

impl Action {
    /// Every action, in the index order the policy head uses.
    pub const ALL: [Action; 8] = [
        Action::Idle,
        Action::TurnLeft,
        Action::TurnRight,
        Action::Forward,
        Action::Backward,
        Action::StrafeLeft,
        Action::StrafeRight,
        Action::PlaceObstacle,
    ];

    /// Position in [`Action::ALL`] — the output-head index for this action.
    #[inline]
    pub fn index(self) -> usize {
        Action::ALL.iter().position(|&a| a == self).unwrap_or(0)
    }

    /// Inverse of [`Action::index`]; out-of-range indices resolve to `Idle`.
    #[inline]
    pub fn from_index(i: usize) -> Action {
        Action::ALL.get(i).copied().unwrap_or(Action::Idle)
    }

    /// Bearing of this action's movement direction relative to the agent's
    /// heading, or `None` for non-movement actions.
    #[inline]
    pub fn movement_bearing(self) -> Option<f32> {
        use std::f32::consts::{FRAC_PI_2, PI};
        match self {
            Action::Forward => Some(0.0),
            Action::Backward => Some(PI),
            Action::StrafeLeft => Some(FRAC_PI_2),
            Action::StrafeRight => Some(-FRAC_PI_2),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Idle => "idle",
            Action::TurnLeft => "turn-left",
            Action::TurnRight => "turn-right",
            Action::Forward => "forward",
            Action::Backward => "backward",
            Action::StrafeLeft => "strafe-left",
            Action::StrafeRight => "strafe-right",
            Action::PlaceObstacle => "place-obstacle",
        };
        f.write_str(name)
    }
}
