//! Episode time model.
//!
//! Time is a monotonically increasing `Tick` counter local to one episode.
//! The mapping to simulated seconds is the engine's `tick_duration` — the
//! counter itself stays integer so step arithmetic is exact and comparisons
//! are O(1).  Nothing here touches wall-clock time.

use std::fmt;

/// An episode-local tick counter.
///
/// `u32` is ample: episodes run a few hundred ticks and the counter is
/// cleared on every reset.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u32);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u32) -> Tick {
        Tick(self.0 + n)
    }

    /// Advance by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.0 += 1;
    }
}

impl std::ops::Add<u32> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u32) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: Tick) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
