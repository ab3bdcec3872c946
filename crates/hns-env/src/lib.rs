//! `hns-env` — the hide-and-seek engine for the `rust_hns` workspace.
//!
//! # Per-tick pipeline
//!
//! ```text
//! step(actions):
//!   ① Actions     — per living agent: turn, cooldown decay, then either
//!                   obstacle placement or movement (clamped + blocked).
//!   ② Captures    — per (seeker, hider) pair: advance or clear the
//!                   visibility hold timer; threshold → hider dies, ±5.
//!   ③ Termination — tick limit reached or no hiders left; survivors of
//!                   the hider side collect the survival bonus.
//!   ④ Separation  — overlapping living agents are pushed apart.
//!   ⑤ Observe     — fresh observation per living agent.
//!   ⑥ Shaping     — continuous visibility-derived reward terms.
//! ```
//!
//! # Determinism
//!
//! One `EpisodeRng` per episode, seeded from the seed string and consumed in
//! a fixed order (static obstacles, then spawns).  `step` draws no
//! randomness at all, so an episode replays exactly from
//! `(seed, configuration, action sequence)`.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hns_env::{Env, EnvConfig};
//!
//! let mut env = Env::new(EnvConfig::default())?;
//! env.reset("episode-0")?;
//! loop {
//!     let actions = policy.act(&env); // external
//!     let result = env.step(&actions);
//!     if result.done { break; }
//! }
//! ```

pub mod capture;
pub mod config;
pub mod env;
pub mod error;
pub mod observe;
pub mod reward;
pub mod snapshot;
pub mod visibility;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use capture::CaptureTable;
pub use config::EnvConfig;
pub use env::{Env, StepResult};
pub use error::{EnvError, EnvResult};
pub use observe::{Observation, VisibleAgent};
pub use snapshot::{ArenaSnapshot, FrameAgent, ReplayFrame};
pub use visibility::is_visible;
