//! The `Env` struct and its tick pipeline.

use std::f32::consts::TAU;

use hns_agent::{Action, AgentState, AgentTraits, AgentType};
use hns_arena::{Arena, Obstacle};
use hns_core::geo::normalize_angle;
use hns_core::{AgentId, EpisodeRng, HnsError, Pose, Tick, Vec2};
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::observe::build_observation;
use crate::reward::{self, shaping};
use crate::snapshot::{ArenaSnapshot, FrameAgent, ReplayFrame};
use crate::visibility::is_visible;
use crate::{CaptureTable, EnvConfig, EnvError, EnvResult, Observation};

/// Bounded attempts to find a collision-free spawn pose before reset fails.
const SPAWN_ATTEMPTS: u32 = 100;

/// Living agents closer than this overlap and get pushed apart.
const SEPARATION_DISTANCE: f32 = 0.2;
/// Fraction of the separation vector each side of an overlapping pair moves.
const SEPARATION_FACTOR: f32 = 0.05;
/// Below this distance a pair counts as coincident; the separation vector is
/// degenerate, so the pair separates along +x instead.
const COINCIDENT_EPS: f32 = 1e-6;

// ── StepResult ────────────────────────────────────────────────────────────────

/// Everything one `step` call hands back to the driver.
#[derive(Clone, Debug)]
pub struct StepResult {
    /// Reward per agent — every roster agent appears, dead ones included.
    pub rewards: FxHashMap<AgentId, f32>,
    /// The episode ended this tick.
    pub done: bool,
    /// Fresh observations, living agents only.
    pub observations: FxHashMap<AgentId, Observation>,
    /// Hiders captured this tick.
    pub captured: Vec<AgentId>,
    /// Obstacles placed this tick, in insertion order.
    pub placed_obstacles: Vec<Obstacle>,
}

// ── Env ───────────────────────────────────────────────────────────────────────

/// The hide-and-seek environment.
///
/// Owns every agent, obstacle, and timer exclusively; callers only ever
/// receive clones.  Single-threaded and synchronous — one `step` call fully
/// resolves one tick before returning, and draws no randomness, so episodes
/// replay exactly from `(seed, configuration, action sequence)`.
///
/// Call [`Env::reset`] before the first `step`; until then the roster is
/// empty and any episode is trivially over.
pub struct Env {
    config: EnvConfig,
    pub(crate) arena: Arena,
    /// Roster in spawn order: hiders `0..hider_count`, then seekers.
    /// `AgentId` doubles as the index.
    pub(crate) agents: Vec<AgentState>,
    /// Episode RNG — reseeded on every reset, consumed only there.
    rng: EpisodeRng,
    pub(crate) captures: CaptureTable,
    tick: Tick,
    /// Consecutive visible ticks required to finalize a capture.
    hold_ticks: u32,
    /// Total captures this episode.
    capture_count: u32,
}

impl Env {
    // ── Construction & reset ──────────────────────────────────────────────

    /// Validate `config` and build an engine with an empty roster.
    pub fn new(config: EnvConfig) -> EnvResult<Self> {
        config.validate()?;
        let arena = Arena::empty(config.arena_width, config.arena_height);
        let hold_ticks = config.hold_ticks();
        Ok(Self {
            config,
            arena,
            agents: Vec::new(),
            rng: EpisodeRng::from_seed_u64(0),
            captures: CaptureTable::new(),
            tick: Tick::ZERO,
            hold_ticks,
            capture_count: 0,
        })
    }

    /// Start a fresh episode, deterministically from `seed`.
    ///
    /// Rebuilds the arena (explicit layout or procedural generation), clears
    /// every timer and counter, and spawns all hiders then all seekers.  Two
    /// resets with the same seed and configuration produce bit-identical
    /// starting states.
    pub fn reset(&mut self, seed: &str) -> EnvResult<()> {
        self.rng = EpisodeRng::from_seed_str(seed);
        self.arena = match &self.config.static_layout {
            Some(layout) => {
                Arena::from_layout(self.config.arena_width, self.config.arena_height, layout)
            }
            None => Arena::generate(
                self.config.arena_width,
                self.config.arena_height,
                self.config.obstacle_density,
                &mut self.rng,
            ),
        };
        self.agents.clear();
        self.captures.clear();
        self.tick = Tick::ZERO;
        self.capture_count = 0;

        for i in 0..self.config.hider_count {
            self.spawn_agent(AgentId(i), AgentType::Hider, self.config.hider_traits)?;
        }
        for i in 0..self.config.seeker_count {
            self.spawn_agent(
                AgentId(self.config.hider_count + i),
                AgentType::Seeker,
                self.config.seeker_traits,
            )?;
        }

        info!(
            seed,
            hiders = self.config.hider_count,
            seekers = self.config.seeker_count,
            obstacles = self.arena.static_obstacles().len(),
            hold_ticks = self.hold_ticks,
            "episode reset"
        );
        Ok(())
    }

    /// Sample uniform poses until one lands outside every obstacle.
    ///
    /// Draw order per attempt is fixed — x, y, heading — so spawn placement
    /// consumes the episode RNG reproducibly.
    fn spawn_agent(&mut self, id: AgentId, kind: AgentType, traits: AgentTraits) -> EnvResult<()> {
        for _ in 0..SPAWN_ATTEMPTS {
            let x = self.rng.gen_range(0.0..self.config.arena_width);
            let y = self.rng.gen_range(0.0..self.config.arena_height);
            let heading = self.rng.gen_range(0.0..TAU);
            let position = Vec2::new(x, y);
            if self.arena.blocked(position) {
                continue;
            }
            self.agents.push(AgentState::spawn(
                id,
                kind,
                traits,
                Pose::new(position, heading),
                self.config.placement_count,
            ));
            return Ok(());
        }
        Err(EnvError::SpawnExhausted { agent: id, attempts: SPAWN_ATTEMPTS })
    }

    // ── Step pipeline ─────────────────────────────────────────────────────

    /// Advance one tick.  Agents missing from `actions` idle.
    pub fn step(&mut self, actions: &FxHashMap<AgentId, Action>) -> StepResult {
        let dt = self.config.tick_duration;

        let mut rewards: FxHashMap<AgentId, f32> =
            self.agents.iter().map(|a| (a.id, 0.0)).collect();
        let mut placed_obstacles = Vec::new();

        // ── Phase 1: action application ───────────────────────────────────
        for idx in 0..self.agents.len() {
            if !self.agents[idx].alive {
                continue;
            }
            let id = self.agents[idx].id;
            let action = actions.get(&id).copied().unwrap_or_default();
            self.apply_action(idx, action, dt, &mut placed_obstacles);
        }

        // ── Phase 2: capture resolution ───────────────────────────────────
        let captured = self.resolve_captures(&mut rewards);

        // ── Phase 3: termination check ────────────────────────────────────
        self.tick.advance();
        let done = self.tick.0 >= self.config.max_steps || self.remaining_hiders() == 0;
        if done {
            for agent in &self.agents {
                if agent.alive && agent.is_hider() {
                    *rewards.entry(agent.id).or_insert(0.0) += reward::SURVIVAL_BONUS;
                }
            }
            debug!(tick = %self.tick, captures = self.capture_count, "episode complete");
        }

        // ── Phase 4: overlap separation ───────────────────────────────────
        self.separate_overlaps();

        // ── Phase 5: observation construction ─────────────────────────────
        let observations: FxHashMap<AgentId, Observation> = self
            .agents
            .iter()
            .filter(|a| a.alive)
            .map(|a| (a.id, self.observe(a)))
            .collect();

        // ── Phase 6: reward shaping ───────────────────────────────────────
        for (id, obs) in &observations {
            let kind = self.agents[id.index()].kind;
            *rewards.entry(*id).or_insert(0.0) += shaping(kind, obs);
        }

        StepResult { rewards, done, observations, captured, placed_obstacles }
    }

    /// Turn, tick the cooldown down, then move or place.
    fn apply_action(&mut self, idx: usize, action: Action, dt: f32, placed: &mut Vec<Obstacle>) {
        {
            let agent = &mut self.agents[idx];
            match action {
                Action::TurnLeft => {
                    agent.pose.heading =
                        normalize_angle(agent.pose.heading + agent.traits.turn_rate * dt);
                }
                Action::TurnRight => {
                    agent.pose.heading =
                        normalize_angle(agent.pose.heading - agent.traits.turn_rate * dt);
                }
                _ => {}
            }
            agent.placement_cooldown = (agent.placement_cooldown - dt).max(0.0);
            agent.last_action = action;
        }

        if action == Action::PlaceObstacle {
            self.try_place(idx, placed);
            self.agents[idx].velocity = Vec2::ZERO;
            return;
        }

        let Some(bearing) = action.movement_bearing() else {
            self.agents[idx].velocity = Vec2::ZERO;
            return;
        };

        let (current, candidate) = {
            let agent = &self.agents[idx];
            let dir = Vec2::from_heading(agent.pose.heading + bearing);
            let current = agent.position();
            let target = current.add(dir.scale(agent.traits.speed * dt));
            (current, self.arena.clamp(target))
        };

        // A blocked move is dropped whole; there is no sliding along walls.
        if self.arena.blocked(candidate) {
            self.agents[idx].velocity = Vec2::ZERO;
        } else {
            let agent = &mut self.agents[idx];
            agent.pose.position = candidate;
            agent.velocity = candidate.sub(current).scale(1.0 / dt);
        }
    }

    /// Obstacle placement, or a silent no-op when the action is invalid
    /// (wrong role, exhausted budget, pending cooldown, occupied footprint).
    /// The tick is consumed either way.
    fn try_place(&mut self, idx: usize, placed: &mut Vec<Obstacle>) {
        if !self.agents[idx].can_place() {
            return;
        }
        let spec = self.arena.placement_footprint(&self.agents[idx].pose);
        // A wall must not land on top of a living agent.
        if self.agents.iter().any(|a| a.alive && spec.contains(a.position())) {
            return;
        }
        let obstacle = self.arena.place(spec);
        placed.push(obstacle);

        let agent = &mut self.agents[idx];
        agent.placements_remaining -= 1;
        agent.placement_cooldown = self.config.placement_cooldown_seconds;
        debug!(agent = %agent.id, obstacle = %obstacle.id, tick = %self.tick, "wall placed");
    }

    /// Advance or clear every live (seeker, hider) hold timer; finalize
    /// captures whose timer reached the threshold while still visible.
    ///
    /// Pairs are visited in roster order (seekers outer, hiders inner), so
    /// when two seekers complete the hold on the same hider in the same
    /// tick, the lower-id seeker takes the capture.
    fn resolve_captures(&mut self, rewards: &mut FxHashMap<AgentId, f32>) -> Vec<AgentId> {
        let mut captured = Vec::new();
        let n = self.agents.len();

        for si in 0..n {
            if !self.agents[si].is_seeker() || !self.agents[si].alive {
                continue;
            }
            for hi in 0..n {
                if !self.agents[hi].is_hider() || !self.agents[hi].alive {
                    continue;
                }
                let seeker_id = self.agents[si].id;
                let hider_id = self.agents[hi].id;

                if is_visible(&self.agents[si], &self.agents[hi], &self.arena) {
                    let held = self.captures.advance(seeker_id, hider_id);
                    if held >= self.hold_ticks {
                        self.agents[hi].alive = false;
                        self.captures.forget_hider(hider_id);
                        captured.push(hider_id);
                        *rewards.entry(seeker_id).or_insert(0.0) += reward::CAPTURE_REWARD;
                        *rewards.entry(hider_id).or_insert(0.0) += reward::CAPTURE_PENALTY;
                        debug!(seeker = %seeker_id, hider = %hider_id, tick = %self.tick, "capture");
                    }
                } else {
                    self.captures.break_contact(seeker_id, hider_id);
                }
            }
        }

        self.capture_count += captured.len() as u32;
        captured
    }

    /// Push apart living agents that ended the tick overlapping.
    ///
    /// Corpses neither repel nor are repelled.  A push that would land an
    /// agent inside an obstacle is dropped for that agent.
    fn separate_overlaps(&mut self) {
        let n = self.agents.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if !self.agents[i].alive || !self.agents[j].alive {
                    continue;
                }
                let delta = self.agents[j].position().sub(self.agents[i].position());
                let dist = delta.length();
                if dist >= SEPARATION_DISTANCE {
                    continue;
                }
                let push = if dist < COINCIDENT_EPS {
                    Vec2::new(SEPARATION_DISTANCE * SEPARATION_FACTOR, 0.0)
                } else {
                    delta.scale(SEPARATION_FACTOR)
                };
                self.nudge(i, push.scale(-1.0));
                self.nudge(j, push);
            }
        }
    }

    fn nudge(&mut self, idx: usize, offset: Vec2) {
        let candidate = self.arena.clamp(self.agents[idx].position().add(offset));
        if !self.arena.blocked(candidate) {
            self.agents[idx].pose.position = candidate;
        }
    }

    fn observe(&self, agent: &AgentState) -> Observation {
        build_observation(
            agent,
            &self.agents,
            &self.arena,
            &self.captures,
            self.hold_ticks,
            self.config.ray_count,
        )
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Observation for one agent, on demand.
    ///
    /// Errors with `AgentNotFound` for ids outside the roster — an unknown
    /// id is a caller bug, never a default observation.
    pub fn compute_observation(&self, id: AgentId) -> EnvResult<Observation> {
        match self.agents.get(id.index()) {
            Some(agent) => Ok(self.observe(agent)),
            None => Err(HnsError::AgentNotFound(id).into()),
        }
    }

    /// Snapshot clones of every agent's state.
    pub fn agent_states(&self) -> Vec<AgentState> {
        self.agents.to_vec()
    }

    /// The static world description for renderers and recorders.
    pub fn arena_snapshot(&self) -> ArenaSnapshot {
        ArenaSnapshot {
            width: self.arena.width(),
            height: self.arena.height(),
            static_obstacles: self.arena.static_obstacles().to_vec(),
        }
    }

    /// Replay-frame datum for an external recorder: current roster poses,
    /// plus the capture/placement events of the step that produced them
    /// when `step` is given.
    pub fn frame(&self, step: Option<&StepResult>) -> ReplayFrame {
        let agents = self
            .agents
            .iter()
            .map(|a| FrameAgent {
                id: a.id,
                call_sign: self.call_sign(a.id),
                kind: a.kind,
                position: a.position(),
                heading: a.pose.heading,
                alive: a.alive,
            })
            .collect();
        ReplayFrame {
            tick: self.tick,
            agents,
            captured: step.map(|s| s.captured.clone()).unwrap_or_default(),
            placed: step.map(|s| s.placed_obstacles.clone()).unwrap_or_default(),
        }
    }

    /// Spawn-order label: hiders `H0..`, seekers `S0..`.
    fn call_sign(&self, id: AgentId) -> String {
        if id.0 < self.config.hider_count {
            format!("H{}", id.0)
        } else {
            format!("S{}", id.0 - self.config.hider_count)
        }
    }

    /// Hiders still alive.
    pub fn remaining_hiders(&self) -> usize {
        self.agents.iter().filter(|a| a.is_hider() && a.alive).count()
    }

    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Total captures this episode.
    #[inline]
    pub fn capture_count(&self) -> u32 {
        self.capture_count
    }

    #[inline]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }
}
