//! Line-of-sight between agents.
//!
//! Visibility is directional and asymmetric: seeker-sees-hider and
//! hider-sees-seeker are evaluated independently, and the capture timer uses
//! only the former.

use hns_agent::AgentState;
use hns_arena::Arena;
use hns_core::geo::relative_bearing;

/// A ray hit must be at least this much nearer than the target before it
/// counts as occlusion — floating-point ties at the target's own position
/// must not read as blocked.
pub const OCCLUSION_EPS: f32 = 1e-3;

/// `true` iff `observer` currently sees `target`.
///
/// Three gates, in order of cost:
/// 1. range — Euclidean distance ≤ the observer's vision range;
/// 2. cone  — |bearing relative to the observer's heading| ≤ half-FOV;
/// 3. sight — the ray toward the target is not blocked by any obstacle
///    more than [`OCCLUSION_EPS`] short of the target.
///
/// Dead agents neither see nor are seen.
pub fn is_visible(observer: &AgentState, target: &AgentState, arena: &Arena) -> bool {
    if !observer.alive || !target.alive || observer.id == target.id {
        return false;
    }

    let distance = observer.position().distance(target.position());
    if distance > observer.traits.vision_range {
        return false;
    }

    let absolute = observer.position().heading_to(target.position());
    let bearing = relative_bearing(absolute, observer.pose.heading);
    if bearing.abs() > observer.traits.half_fov() {
        return false;
    }

    let hit = arena.cast(observer.position(), absolute, observer.traits.vision_range);
    !(hit.hit && hit.distance < distance - OCCLUSION_EPS)
}
