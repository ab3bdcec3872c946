//! Planar vector math and angle utilities.
//!
//! The arena is a flat `[0, width] × [0, height]` rectangle; `Vec2` uses
//! `f32` throughout.  Headings are radians with 0 pointing along +x, stored
//! normalized to `[0, 2π)`.  Bearings *relative* to a heading live in
//! `(−π, π]` so their sign encodes left/right of the observer.

use std::f32::consts::{PI, TAU};

/// A 2-D point or displacement.  Pure value type; no identity.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `heading` (radians, 0 = +x).
    #[inline]
    pub fn from_heading(heading: f32) -> Self {
        Self { x: heading.cos(), y: heading.sin() }
    }

    #[inline]
    pub fn add(self, other: Vec2) -> Vec2 {
        Vec2 { x: self.x + other.x, y: self.y + other.y }
    }

    #[inline]
    pub fn sub(self, other: Vec2) -> Vec2 {
        Vec2 { x: self.x - other.x, y: self.y - other.y }
    }

    #[inline]
    pub fn scale(self, s: f32) -> Vec2 {
        Vec2 { x: self.x * s, y: self.y * s }
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        self.sub(other).length()
    }

    /// Heading (radians in `[0, 2π)`) of the vector from `self` to `other`.
    #[inline]
    pub fn heading_to(self, other: Vec2) -> f32 {
        normalize_angle((other.y - self.y).atan2(other.x - self.x))
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ── Pose ──────────────────────────────────────────────────────────────────────

/// Position plus facing direction.  Owned exclusively by its agent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub position: Vec2,
    /// Radians in `[0, 2π)`; 0 points along +x.
    pub heading: f32,
}

impl Pose {
    #[inline]
    pub fn new(position: Vec2, heading: f32) -> Self {
        Self { position, heading: normalize_angle(heading) }
    }

    /// Unit vector the pose is facing.
    #[inline]
    pub fn facing(&self) -> Vec2 {
        Vec2::from_heading(self.heading)
    }
}

// ── Angle helpers ─────────────────────────────────────────────────────────────

/// Wrap an angle into `[0, 2π)`.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle % TAU;
    if a < 0.0 {
        a += TAU;
    }
    a
}

/// Signed difference `angle − reference`, wrapped into `(−π, π]`.
///
/// Positive means `angle` lies counter-clockwise (left) of `reference`.
#[inline]
pub fn relative_bearing(angle: f32, reference: f32) -> f32 {
    let mut d = normalize_angle(angle) - normalize_angle(reference);
    if d > PI {
        d -= TAU;
    } else if d <= -PI {
        d += TAU;
    }
    d
}

// ── Clamping ──────────────────────────────────────────────────────────────────

#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Clamp a point into the closed arena rectangle `[0, width] × [0, height]`.
#[inline]
pub fn clamp_to_arena(p: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2 { x: clamp(p.x, 0.0, width), y: clamp(p.y, 0.0, height) }
}
