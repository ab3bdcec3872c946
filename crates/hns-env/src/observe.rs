//! Observation construction — the numeric interface to the external policy.
//!
//! An observation is everything one agent can legitimately know this tick:
//! its vision rays, the agents it can see, its own state, and the arena
//! dimensions.  The structured form is for Rust-side consumers (tests,
//! recorders); [`Observation::flatten`] produces the fixed-layout vector a
//! policy network consumes:
//!
//! ```text
//! [ ray 0 .. ray R-1 |
//!   V visible-agent blocks of (bearing, distance, hold_fraction) |
//!   heading/2π, speed, placements, cooldown, vision_range, fov,
//!   arena_w, arena_h ]
//! ```
//!
//! with `R = ray_count` and `V = max_visible` fixed by the configuration.
//! Absent visible-agent blocks are zero-padded, so the layout is stable for
//! a given configuration.

use std::f32::consts::TAU;

use hns_agent::{AgentState, AgentType};
use hns_arena::Arena;
use hns_core::AgentId;
use hns_core::geo::relative_bearing;

use crate::CaptureTable;
use crate::visibility::is_visible;

/// Floats per visible-agent feature block in the flattened layout.
pub const VISIBLE_BLOCK_LEN: usize = 3;
/// Floats in the trailing self/arena feature block.
pub const SELF_BLOCK_LEN: usize = 8;

/// One agent the observer can currently see.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleAgent {
    pub id: AgentId,
    pub kind: AgentType,
    /// Signed bearing relative to the observer's heading, in `(−π, π]`.
    pub bearing: f32,
    /// Euclidean distance, unnormalized.
    pub distance: f32,
    /// Seeker observing a hider: fraction of the capture hold already
    /// accumulated against this target.  0 for every other pairing.
    pub hold_fraction: f32,
}

/// Everything one agent perceives in one tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    /// Ray distances across the FOV, each normalized to `[0, 1]` as
    /// `min(1, hit/vision_range)`; an unobstructed ray reads 1.
    pub rays: Vec<f32>,
    /// Visible living agents, nearest first (ties broken by id).
    pub visible: Vec<VisibleAgent>,
    /// Own heading normalized to `[0, 1)` as `heading / 2π`.
    pub heading: f32,
    pub speed: f32,
    pub placements_remaining: f32,
    pub placement_cooldown: f32,
    pub vision_range: f32,
    /// Full FOV in radians.
    pub fov: f32,
    pub arena_width: f32,
    pub arena_height: f32,
}

impl Observation {
    /// Fixed-layout policy input; see the module docs for the layout.
    pub fn flatten(&self, max_visible: usize) -> Vec<f32> {
        let mut out =
            Vec::with_capacity(self.rays.len() + VISIBLE_BLOCK_LEN * max_visible + SELF_BLOCK_LEN);
        out.extend_from_slice(&self.rays);

        for slot in 0..max_visible {
            match self.visible.get(slot) {
                Some(v) => out.extend_from_slice(&[v.bearing, v.distance, v.hold_fraction]),
                None => out.extend_from_slice(&[0.0; VISIBLE_BLOCK_LEN]),
            }
        }

        out.extend_from_slice(&[
            self.heading,
            self.speed,
            self.placements_remaining,
            self.placement_cooldown,
            self.vision_range,
            self.fov,
            self.arena_width,
            self.arena_height,
        ]);
        out
    }
}

/// Build the observation for `observer` against the current world state.
///
/// `hold_ticks` converts capture-timer counts into hold fractions for
/// seeker-observing-hider blocks.
pub fn build_observation(
    observer: &AgentState,
    roster: &[AgentState],
    arena: &Arena,
    captures: &CaptureTable,
    hold_ticks: u32,
    ray_count: u32,
) -> Observation {
    let traits = &observer.traits;
    let origin = observer.position();
    let heading = observer.pose.heading;

    // ── Vision rays ───────────────────────────────────────────────────────
    //
    // Evenly spaced across the FOV; a single ray aims straight ahead.
    let n = ray_count.max(1);
    let mut rays = Vec::with_capacity(n as usize);
    for i in 0..n {
        let angle = if n == 1 {
            heading
        } else {
            heading - traits.half_fov() + traits.fov_radians() * i as f32 / (n - 1) as f32
        };
        let hit = arena.cast(origin, angle, traits.vision_range);
        let norm = if traits.vision_range > 0.0 {
            (hit.distance / traits.vision_range).min(1.0)
        } else {
            1.0
        };
        rays.push(norm);
    }

    // ── Visible agents ────────────────────────────────────────────────────
    let mut visible: Vec<VisibleAgent> = roster
        .iter()
        .filter(|other| other.alive && other.id != observer.id)
        .filter(|other| is_visible(observer, other, arena))
        .map(|other| {
            let distance = origin.distance(other.position());
            let bearing = relative_bearing(origin.heading_to(other.position()), heading);
            let hold_fraction = if observer.is_seeker() && other.is_hider() {
                captures.hold_fraction(observer.id, other.id, hold_ticks)
            } else {
                0.0
            };
            VisibleAgent { id: other.id, kind: other.kind, bearing, distance, hold_fraction }
        })
        .collect();
    visible.sort_by(|a, b| {
        a.distance.total_cmp(&b.distance).then_with(|| a.id.cmp(&b.id))
    });

    Observation {
        rays,
        visible,
        heading: heading / TAU,
        speed: traits.speed,
        placements_remaining: observer.placements_remaining as f32,
        placement_cooldown: observer.placement_cooldown,
        vision_range: traits.vision_range,
        fov: traits.fov_radians(),
        arena_width: arena.width(),
        arena_height: arena.height(),
    }
}
