//! Reward policy: the sparse capture/termination signals and the continuous
//! shaping terms layered on top of them.
//!
//! Shaping reads each agent's *own* observation — it never peeks at hidden
//! state — and is strictly additive: capture and termination rewards are
//! fixed first, shaping is summed in afterwards.

use hns_agent::AgentType;

use crate::Observation;

/// Seeker's reward for finalizing a capture.
pub const CAPTURE_REWARD: f32 = 5.0;
/// Captured hider's reward the same tick.  Exactly the negation — the
/// capture exchange is zero-sum before shaping.
pub const CAPTURE_PENALTY: f32 = -5.0;

/// Flat bonus for each hider still alive when the episode ends.  Seekers
/// get no termination bonus.
pub const SURVIVAL_BONUS: f32 = 1.0;

/// Per-visible-hider shaping gain for seekers, scaled by closeness.
pub const SEEKER_CONTACT_GAIN: f32 = 0.1;
/// Seeker shaping when nothing is visible — a small pressure to search.
pub const SEEKER_SEARCHING_PENALTY: f32 = -0.05;

/// Hider shaping when no seeker is visible.
pub const HIDER_CONCEALED_BONUS: f32 = 0.05;
/// Base of the escalating per-visible-seeker penalty: the k-th visible
/// seeker costs `k` times this, so totals run −0.1, −0.3, −0.6, …
pub const HIDER_EXPOSURE_PENALTY: f32 = -0.1;

/// Continuous shaping term for one agent this tick.
pub fn shaping(kind: AgentType, obs: &Observation) -> f32 {
    match kind {
        AgentType::Seeker => {
            let mut total = 0.0;
            let mut any = false;
            for v in obs.visible.iter().filter(|v| v.kind == AgentType::Hider) {
                any = true;
                let closeness = 1.0 - (v.distance / obs.vision_range.max(f32::EPSILON)).min(1.0);
                total += SEEKER_CONTACT_GAIN * closeness;
            }
            if any { total } else { SEEKER_SEARCHING_PENALTY }
        }
        AgentType::Hider => {
            let seekers = obs.visible.iter().filter(|v| v.kind == AgentType::Seeker).count();
            if seekers == 0 {
                HIDER_CONCEALED_BONUS
            } else {
                (1..=seekers).map(|k| HIDER_EXPOSURE_PENALTY * k as f32).sum()
            }
        }
    }
}
