//! Ray casting and point-collision queries against axis-aligned obstacles.
//!
//! The ray test is a parametric line/segment intersection run against each
//! obstacle's four boundary edges: ray parameter `t ≥ 0`, segment parameter
//! `u ∈ [0, 1]`.  Ray/edge pairs whose cross product magnitude falls below
//! `PARALLEL_EPS` are treated as no intersection.

use hns_core::{ObstacleId, Vec2};

use crate::Obstacle;

/// Cross products below this magnitude mean ray and edge are parallel.
const PARALLEL_EPS: f32 = 1e-6;

/// Result of a [`cast_ray`] query.
///
/// An unobstructed ray reports `{ hit: false, distance: max_range }` — the
/// maximum range rather than infinity, so downstream normalization of ray
/// distances into `[0, 1]` is well-defined.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RayHit {
    pub hit: bool,
    pub distance: f32,
    pub obstacle: Option<ObstacleId>,
    pub point: Option<Vec2>,
}

impl RayHit {
    /// The miss result for a ray of length `max_range`.
    #[inline]
    pub fn miss(max_range: f32) -> Self {
        Self { hit: false, distance: max_range, obstacle: None, point: None }
    }
}

/// Ray/segment intersection: returns the ray parameter `t` of the crossing,
/// or `None` when parallel or out of either parameter range.
fn ray_segment_intersection(origin: Vec2, dir: Vec2, seg_a: Vec2, seg_b: Vec2) -> Option<f32> {
    let v1 = origin.sub(seg_a);
    let v2 = seg_b.sub(seg_a);
    let cross = dir.x * v2.y - dir.y * v2.x;
    if cross.abs() < PARALLEL_EPS {
        return None;
    }
    let t = (v2.x * v1.y - v2.y * v1.x) / cross;
    let u = (dir.x * v1.y - dir.y * v1.x) / cross;
    if t >= 0.0 && (0.0..=1.0).contains(&u) { Some(t) } else { None }
}

/// Cast a ray from `origin` along `heading`, at most `max_range` units, and
/// report the nearest obstacle-edge crossing.
pub fn cast_ray<'a, I>(origin: Vec2, heading: f32, max_range: f32, obstacles: I) -> RayHit
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    let dir = Vec2::from_heading(heading);
    let mut best = RayHit::miss(max_range);

    for obs in obstacles {
        for (a, b) in obs.edges() {
            if let Some(t) = ray_segment_intersection(origin, dir, a, b) {
                if t <= max_range && t < best.distance {
                    best = RayHit {
                        hit: true,
                        distance: t,
                        obstacle: Some(obs.id),
                        point: Some(origin.add(dir.scale(t))),
                    };
                }
            }
        }
    }

    best
}

/// `true` if `p` lies within the closed bounds of `obstacle`.
#[inline]
pub fn point_in_obstacle(p: Vec2, obstacle: &Obstacle) -> bool {
    p.x >= obstacle.min.x && p.x <= obstacle.max.x && p.y >= obstacle.min.y && p.y <= obstacle.max.y
}

/// `true` if `p` lies within any obstacle.  Used for spawn validity and
/// movement blocking.
pub fn collides<'a, I>(p: Vec2, obstacles: I) -> bool
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    obstacles.into_iter().any(|o| point_in_obstacle(p, o))
}
