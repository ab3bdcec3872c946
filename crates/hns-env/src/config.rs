//! Engine configuration.
//!
//! Typically loaded from a TOML/JSON file (or CLI flags) by the application
//! crate and passed to [`Env::new`](crate::Env::new); the engine itself
//! never parses files.  Defaults describe a 25×25 free-movement arena with
//! three hiders and two seekers.

use hns_agent::AgentTraits;
use hns_arena::ObstacleSpec;

use crate::{EnvError, EnvResult};

/// Everything that parameterizes one environment instance.
///
/// Immutable once handed to the engine; episodes vary only by seed.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvConfig {
    /// Arena extent along x, in arena units.
    pub arena_width: f32,
    /// Arena extent along y.
    pub arena_height: f32,
    /// Procedural static obstacles: count = `floor(density * 10)`.
    /// Ignored when `static_layout` is set.
    pub obstacle_density: f32,

    pub hider_count: u32,
    pub seeker_count: u32,
    pub hider_traits: AgentTraits,
    pub seeker_traits: AgentTraits,

    /// Ticks per episode before forced termination.
    pub max_steps: u32,
    /// Simulated seconds per tick.
    pub tick_duration: f32,
    /// Seconds of unbroken seeker-sees-hider contact required to capture.
    pub capture_hold_seconds: f32,

    /// Obstacle placements each hider starts the episode with.
    pub placement_count: u32,
    /// Seconds between placements by the same hider.
    pub placement_cooldown_seconds: f32,

    /// Evenly spaced vision rays per observation.
    pub ray_count: u32,

    /// Explicit static obstacles; overrides procedural generation entirely.
    pub static_layout: Option<Vec<ObstacleSpec>>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            arena_width: 25.0,
            arena_height: 25.0,
            obstacle_density: 0.1,
            hider_count: 3,
            seeker_count: 2,
            hider_traits: AgentTraits {
                speed: 2.5,
                vision_range: 8.0,
                fov_degrees: 100.0,
                turn_rate: std::f32::consts::PI * 1.5,
            },
            seeker_traits: AgentTraits {
                speed: 3.0,
                vision_range: 10.0,
                fov_degrees: 90.0,
                turn_rate: std::f32::consts::PI * 1.5,
            },
            max_steps: 150,
            tick_duration: 0.1,
            capture_hold_seconds: 2.0,
            placement_count: 2,
            placement_cooldown_seconds: 3.0,
            ray_count: 15,
            static_layout: None,
        }
    }
}

impl EnvConfig {
    /// Reject configurations the engine cannot run.
    ///
    /// Gameplay oddities (zero vision, zero speed) are legal — they make an
    /// episode boring, not broken.
    pub fn validate(&self) -> EnvResult<()> {
        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            return Err(EnvError::Config(format!(
                "arena must have positive extent, got {}×{}",
                self.arena_width, self.arena_height
            )));
        }
        if self.tick_duration <= 0.0 {
            return Err(EnvError::Config(format!(
                "tick duration must be positive, got {}",
                self.tick_duration
            )));
        }
        if self.hider_count == 0 {
            return Err(EnvError::Config("at least one hider is required".into()));
        }
        if self.max_steps == 0 {
            return Err(EnvError::Config("max_steps must be at least 1".into()));
        }
        if self.ray_count == 0 {
            return Err(EnvError::Config("ray_count must be at least 1".into()));
        }
        Ok(())
    }

    /// Total roster size.
    #[inline]
    pub fn agent_count(&self) -> usize {
        (self.hider_count + self.seeker_count) as usize
    }

    /// Consecutive visible ticks required for a capture:
    /// `ceil(capture_hold_seconds / tick_duration)`, minimum 1.
    pub fn hold_ticks(&self) -> u32 {
        let ticks = (self.capture_hold_seconds / self.tick_duration).ceil();
        (ticks as u32).max(1)
    }

    /// Most opponents-and-teammates one agent can ever see.
    ///
    /// Bounds the visible-agent feature blocks in the flattened observation,
    /// keeping its layout stable for a given configuration.
    #[inline]
    pub fn max_visible(&self) -> usize {
        self.agent_count().saturating_sub(1)
    }

    /// Length of the flattened observation vector this configuration
    /// produces — what an external policy sizes its input layer to.
    pub fn observation_len(&self) -> usize {
        self.ray_count as usize
            + crate::observe::VISIBLE_BLOCK_LEN * self.max_visible()
            + crate::observe::SELF_BLOCK_LEN
    }
}
