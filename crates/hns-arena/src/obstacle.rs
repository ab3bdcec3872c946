//! Axis-aligned box obstacles.

use hns_core::{ObstacleId, Vec2};

/// An axis-aligned box with inclusive bounds.
///
/// Obstacles block both movement and line of sight.  Two disjoint
/// collections exist per episode — *static* (fixed at reset) and *placed*
/// (inserted by hider actions, never removed); see [`crate::Arena`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub id: ObstacleId,
    /// Inclusive lower-left corner.
    pub min: Vec2,
    /// Inclusive upper-right corner.
    pub max: Vec2,
}

impl Obstacle {
    /// The four corners in counter-clockwise order from `min`.
    #[inline]
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.min.x, self.min.y),
            Vec2::new(self.max.x, self.min.y),
            Vec2::new(self.max.x, self.max.y),
            Vec2::new(self.min.x, self.max.y),
        ]
    }

    /// The four boundary edges as corner pairs.
    #[inline]
    pub fn edges(&self) -> [(Vec2, Vec2); 4] {
        let c = self.corners();
        [(c[0], c[1]), (c[1], c[2]), (c[2], c[3]), (c[3], c[0])]
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// An obstacle footprint without an id — the form configuration files use
/// for explicit static layouts.  The [`Arena`](crate::Arena) assigns ids
/// when the layout is instantiated, keeping the uniqueness invariant out of
/// config authors' hands.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleSpec {
    pub min: Vec2,
    pub max: Vec2,
}

impl ObstacleSpec {
    #[inline]
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// `true` if `p` lies within the closed bounds of this footprint.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
