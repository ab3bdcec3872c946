//! Capture hysteresis state.
//!
//! A capture requires *sustained* seeker-to-hider visibility, so each
//! (seeker, hider) pair carries a count of consecutive visible ticks.  The
//! table only holds pairs that are actually accumulating: entries appear on
//! the first visible tick, vanish the moment visibility breaks, and are
//! dropped wholesale when a hider dies or the episode resets.

use hns_core::AgentId;
use rustc_hash::FxHashMap;

/// Consecutive-visibility counters keyed by (seeker, hider).
#[derive(Debug, Default)]
pub struct CaptureTable {
    timers: FxHashMap<(AgentId, AgentId), u32>,
}

impl CaptureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything.  Called on episode reset.
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Record one more visible tick for the pair and return the new count.
    pub fn advance(&mut self, seeker: AgentId, hider: AgentId) -> u32 {
        let count = self.timers.entry((seeker, hider)).or_insert(0);
        *count += 1;
        *count
    }

    /// Visibility broke this tick: the pair starts over from zero.
    pub fn break_contact(&mut self, seeker: AgentId, hider: AgentId) {
        self.timers.remove(&(seeker, hider));
    }

    /// Drop every pair involving `hider` — a captured hider accumulates
    /// nothing further.
    pub fn forget_hider(&mut self, hider: AgentId) {
        self.timers.retain(|&(_, h), _| h != hider);
    }

    /// Current count for the pair (0 when no active timer).
    #[inline]
    pub fn ticks(&self, seeker: AgentId, hider: AgentId) -> u32 {
        self.timers.get(&(seeker, hider)).copied().unwrap_or(0)
    }

    /// Fraction of the hold already accumulated, in `[0, 1]`.
    pub fn hold_fraction(&self, seeker: AgentId, hider: AgentId, hold_ticks: u32) -> f32 {
        let ticks = self.ticks(seeker, hider) as f32;
        (ticks / hold_ticks.max(1) as f32).min(1.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
