//! Deterministic per-episode RNG.
//!
//! # Determinism strategy
//!
//! One `SmallRng` per episode, seeded from the episode seed *string* via a
//! stable FxHash fold.  All randomness in an episode is drawn from this one
//! generator in a fixed order (static-obstacle generation first, then agent
//! spawn placements in spawn order), so an episode is exactly reproducible
//! from `(seed, configuration, action sequence)`.
//!
//! `FxHasher` has no per-process random state, unlike the std `SipHasher`,
//! which makes the string → u64 derivation stable across runs and builds.

use std::hash::Hasher;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHasher;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-episode deterministic RNG.
///
/// Owned by the engine and reseeded on every `reset`.  The type is `!Sync`
/// by construction — episode randomness must never be shared across threads.
pub struct EpisodeRng(SmallRng);

impl EpisodeRng {
    /// Seed deterministically from an episode seed string.
    pub fn from_seed_str(seed: &str) -> Self {
        let mut hasher = FxHasher::default();
        hasher.write(seed.as_bytes());
        Self::from_seed_u64(hasher.finish())
    }

    /// Seed from a raw 64-bit value (tests, derived generators).
    pub fn from_seed_u64(seed: u64) -> Self {
        EpisodeRng(SmallRng::seed_from_u64(seed ^ MIXING_CONSTANT))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
