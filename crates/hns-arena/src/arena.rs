//! The arena: bounds plus the two obstacle collections.
//!
//! Static obstacles are fixed at episode start — either generated
//! procedurally from the episode RNG or taken verbatim from an explicit
//! layout.  Placed obstacles are appended during the episode by hider
//! placement actions and never removed.  The union of both collections is
//! the authoritative collision/occlusion set at any instant.

use hns_core::geo::clamp_to_arena;
use hns_core::{EpisodeRng, ObstacleId, Pose, Vec2};

use crate::raycast::{self, RayHit};
use crate::{Obstacle, ObstacleSpec};

/// Procedural generation: obstacles per unit of density.
const OBSTACLES_PER_DENSITY: f32 = 10.0;
/// Procedural obstacle extents are drawn from `[MIN_EXTENT, MAX_EXTENT)`.
const MIN_EXTENT: f32 = 1.0;
const MAX_EXTENT: f32 = 4.0;

/// Placed-wall footprint: long side, short side, and how far ahead of the
/// placing agent the footprint is centered.
const PLACED_LENGTH: f32 = 1.5;
const PLACED_WIDTH: f32 = 0.5;
const PLACEMENT_OFFSET: f32 = 1.0;

/// The episode's world: bounds and obstacles.
///
/// Built fresh inside `reset` and owned exclusively by the engine.  Geometry
/// queries receive the obstacle sequences by reference; nothing here is ever
/// aliased into agent state.
#[derive(Debug)]
pub struct Arena {
    width: f32,
    height: f32,
    static_obstacles: Vec<Obstacle>,
    placed_obstacles: Vec<Obstacle>,
    /// Single id counter covering both collections, so ids stay unique even
    /// across static/placed.
    next_id: u32,
}

impl Arena {
    // ── Construction ──────────────────────────────────────────────────────

    /// Procedurally generate the static layout from the episode RNG.
    ///
    /// Count is `floor(density * 10)`.  Per obstacle the draw order is
    /// fixed — width, height, x, y — so generation consumes the RNG
    /// reproducibly.  Each box fits entirely inside the arena.
    pub fn generate(width: f32, height: f32, density: f32, rng: &mut EpisodeRng) -> Self {
        let mut arena = Self::empty(width, height);
        let count = (density * OBSTACLES_PER_DENSITY).floor() as usize;

        for _ in 0..count {
            let w = rng.gen_range(MIN_EXTENT..MAX_EXTENT).min(width);
            let h = rng.gen_range(MIN_EXTENT..MAX_EXTENT).min(height);
            let x = rng.gen_range(0.0..=(width - w));
            let y = rng.gen_range(0.0..=(height - h));
            let min = Vec2::new(x, y);
            let max = Vec2::new(x + w, y + h);
            let id = arena.alloc_id();
            arena.static_obstacles.push(Obstacle { id, min, max });
        }

        arena
    }

    /// Build the static layout verbatim from configuration, assigning ids.
    pub fn from_layout(width: f32, height: f32, layout: &[ObstacleSpec]) -> Self {
        let mut arena = Self::empty(width, height);
        for spec in layout {
            let id = arena.alloc_id();
            arena.static_obstacles.push(Obstacle { id, min: spec.min, max: spec.max });
        }
        arena
    }

    /// An arena with no obstacles at all.
    pub fn empty(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            static_obstacles: Vec::new(),
            placed_obstacles: Vec::new(),
            next_id: 0,
        }
    }

    fn alloc_id(&mut self) -> ObstacleId {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        id
    }

    // ── Placement ─────────────────────────────────────────────────────────

    /// The 1.5 × 0.5 wall footprint a placement action would create in front
    /// of `pose`.
    ///
    /// The wall is axis-aligned: its long side runs perpendicular to the
    /// dominant axis of the heading, so a roughly-horizontal mover drops a
    /// vertical wall across its line of travel.  The footprint is clamped
    /// into the arena rectangle.
    pub fn placement_footprint(&self, pose: &Pose) -> ObstacleSpec {
        let dir = pose.facing();
        let center = pose.position.add(dir.scale(PLACEMENT_OFFSET));

        let (half_x, half_y) = if dir.x.abs() >= dir.y.abs() {
            (PLACED_WIDTH * 0.5, PLACED_LENGTH * 0.5)
        } else {
            (PLACED_LENGTH * 0.5, PLACED_WIDTH * 0.5)
        };

        let min = clamp_to_arena(
            Vec2::new(center.x - half_x, center.y - half_y),
            self.width,
            self.height,
        );
        let max = clamp_to_arena(
            Vec2::new(center.x + half_x, center.y + half_y),
            self.width,
            self.height,
        );
        ObstacleSpec::new(min, max)
    }

    /// Append a placed obstacle.  Takes effect immediately: it blocks
    /// movement and sight from this call onward, including for agents acting
    /// later in the same tick.
    pub fn place(&mut self, spec: ObstacleSpec) -> Obstacle {
        let id = self.alloc_id();
        let obstacle = Obstacle { id, min: spec.min, max: spec.max };
        self.placed_obstacles.push(obstacle);
        obstacle
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// All obstacles — static first, then placed in insertion order.
    #[inline]
    pub fn occluders(&self) -> impl Iterator<Item = &Obstacle> {
        self.static_obstacles.iter().chain(self.placed_obstacles.iter())
    }

    /// Nearest obstacle crossing along a ray, over both collections.
    pub fn cast(&self, origin: Vec2, heading: f32, max_range: f32) -> RayHit {
        raycast::cast_ray(origin, heading, max_range, self.occluders())
    }

    /// `true` if `p` lies inside any obstacle (closed bounds).
    pub fn blocked(&self, p: Vec2) -> bool {
        raycast::collides(p, self.occluders())
    }

    /// Clamp a point into this arena's rectangle.
    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        clamp_to_arena(p, self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn static_obstacles(&self) -> &[Obstacle] {
        &self.static_obstacles
    }

    #[inline]
    pub fn placed_obstacles(&self) -> &[Obstacle] {
        &self.placed_obstacles
    }

    #[inline]
    pub fn occluder_count(&self) -> usize {
        self.static_obstacles.len() + self.placed_obstacles.len()
    }
}
