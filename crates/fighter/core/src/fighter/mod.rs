//! The per-fighter combat core.
//!
//! [`FighterCore`] owns one fighter's state, kinematics, health, meter and
//! mercy bookkeeping. [`FighterCore::tick`] is the only per-step mutator; the
//! round director drives everything else through the hit, throw, mercy and
//! override entry points.
mod attack;
mod hit;
mod mercy;
mod movement;
mod tick;

pub use mercy::MercyError;

use arrayvec::ArrayVec;
use glam::Vec2;

use crate::config::FighterConfig;
use crate::env::{FighterEnv, MoveFrameData, MoveOracle, ReactionOracle, ThrowData, ThrowOracle};
use crate::error::{FighterError, GameError};
use crate::meter::RunMeter;
use crate::state::{FighterState, MovePhase};
use crate::timer::Countdown;

pub type Diagnostics = ArrayVec<FighterError, { FighterConfig::MAX_DIAGNOSTICS }>;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Timers {
    hit_stun: Countdown,
    block_stun: Countdown,
    knockdown: Countdown,
    jump_startup: Countdown,
    land_lock: Countdown,
    /// Tech window of a throw holding this fighter.
    escape: Countdown,
    /// Time until a holding throw slams this fighter.
    thrown: Countdown,
    mercy_window: Countdown,
    /// Remaining time in the current move phase.
    phase: Countdown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct MercyFlags {
    eligible_this_round: bool,
    available_this_match: bool,
    taps: u32,
}

/// Horizontal intent latched when a jump starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum JumpArc {
    #[default]
    Neutral,
    Forward,
    Back,
}

/// A throw currently holding this fighter.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Hold {
    throw: ThrowData,
    /// Facing sign of the thrower at the grab.
    toss_sign: f32,
}

/// One fighter's deterministic combat simulation.
pub struct FighterCore<'a> {
    moves: &'a dyn MoveOracle,
    reactions: &'a dyn ReactionOracle,
    throws: &'a dyn ThrowOracle,
    config: FighterConfig,
    dt: f32,

    state: FighterState,
    phase: MovePhase,
    current_move: Option<MoveFrameData>,
    current_throw: Option<ThrowData>,
    hold: Option<Hold>,

    health: u32,
    position: Vec2,
    velocity: Vec2,
    facing_right: bool,
    spawn_position: Vec2,
    spawn_facing_right: bool,
    jump_arc: JumpArc,

    meter: RunMeter,
    timers: Timers,
    mercy: MercyFlags,
    ko_friendly: bool,
    paused: bool,
    diagnostics: Diagnostics,
}

impl<'a> FighterCore<'a> {
    /// Builds a fighter at full health, idle at the origin, facing right.
    ///
    /// # Errors
    ///
    /// Returns `FighterError::Oracle` when any of the three tables is missing
    /// and `FighterError::Config` when the config fails validation.
    pub fn new(env: FighterEnv<'a>, config: FighterConfig) -> Result<Self, FighterError> {
        config.validate()?;
        let moves = env.moves()?;
        let reactions = env.reactions()?;
        let throws = env.throws()?;

        Ok(Self {
            moves,
            reactions,
            throws,
            dt: config.step_seconds(),
            state: FighterState::Idle,
            phase: MovePhase::Startup,
            current_move: None,
            current_throw: None,
            hold: None,
            health: config.max_health,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            facing_right: true,
            spawn_position: Vec2::ZERO,
            spawn_facing_right: true,
            jump_arc: JumpArc::Neutral,
            meter: RunMeter::full(&config.meter),
            timers: Timers::default(),
            mercy: MercyFlags {
                eligible_this_round: true,
                available_this_match: true,
                taps: 0,
            },
            ko_friendly: true,
            paused: false,
            diagnostics: Diagnostics::new(),
            config,
        })
    }

    // ===== lifecycle =====

    /// Restores match-scoped flags, then performs a round reset.
    pub fn full_match_reset(&mut self) {
        self.mercy.available_this_match = true;
        self.full_round_reset();
    }

    /// Restores health, meter, position and state for a new round.
    ///
    /// Match-scoped mercy availability and the pause flag are left untouched.
    pub fn full_round_reset(&mut self) {
        self.state = FighterState::Idle;
        self.phase = MovePhase::Startup;
        self.current_move = None;
        self.current_throw = None;
        self.hold = None;
        self.health = self.config.max_health;
        self.position = self.spawn_position;
        self.velocity = Vec2::ZERO;
        self.facing_right = self.spawn_facing_right;
        self.jump_arc = JumpArc::Neutral;
        self.meter = RunMeter::full(&self.config.meter);
        self.timers = Timers::default();
        self.mercy.eligible_this_round = true;
        self.mercy.taps = 0;
        self.ko_friendly = true;
        self.diagnostics.clear();
    }

    /// Places the fighter and records the spot for later round resets.
    pub fn spawn_at(&mut self, position: Vec2, facing_right: bool) {
        self.spawn_position = position;
        self.spawn_facing_right = facing_right;
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.facing_right = facing_right;
    }

    // ===== director inputs =====

    /// Overwrites the position with an externally resolved one. Call before
    /// [`tick`](Self::tick) within a step.
    pub fn sync_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn set_facing(&mut self, facing_right: bool) {
        self.facing_right = facing_right;
    }

    /// Freezes or resumes the fighter. While paused, [`tick`](Self::tick)
    /// does nothing and incoming hits and throws are ignored.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            tracing::debug!(paused, state = %self.state, "pause toggled");
        }
        self.paused = paused;
    }

    /// Forces a state, bypassing the transition table.
    ///
    /// Non-executing states drop the current move; frozen states stop all
    /// motion. Leaving `Thrown` this way releases any hold.
    pub fn set_state(&mut self, state: FighterState) {
        tracing::debug!(from = %self.state, to = %state, "state override");
        self.state = state;
        if !state.is_executing() {
            self.current_move = None;
            self.current_throw = None;
        }
        if state.is_frozen() {
            self.velocity = Vec2::ZERO;
        }
        if state != FighterState::Thrown {
            self.hold = None;
            self.timers.thrown.stop();
            self.timers.escape.stop();
        }
    }

    // ===== observables =====

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.config.max_health
    }

    pub fn state(&self) -> FighterState {
        self.state
    }

    /// Phase of the executing move or throw, if any.
    pub fn phase(&self) -> Option<MovePhase> {
        self.is_move_data_valid().then_some(self.phase)
    }

    pub fn current_move(&self) -> Option<&MoveFrameData> {
        self.current_move.as_ref()
    }

    pub fn current_throw(&self) -> Option<&ThrowData> {
        self.current_throw.as_ref()
    }

    pub fn is_move_data_valid(&self) -> bool {
        self.state.is_executing() && (self.current_move.is_some() || self.current_throw.is_some())
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    pub fn is_airborne(&self) -> bool {
        self.position.y > self.config.movement.ground_y
    }

    pub fn meter_value(&self) -> f32 {
        self.meter.value()
    }

    /// Remaining crush lockout in seconds.
    pub fn crush_timer(&self) -> f32 {
        self.meter.crush_timer()
    }

    pub fn meter(&self) -> &RunMeter {
        &self.meter
    }

    pub fn block_stun_remaining(&self) -> f32 {
        self.timers.block_stun.remaining()
    }

    pub fn knockdown_remaining(&self) -> f32 {
        self.timers.knockdown.remaining()
    }

    /// Remaining mercy window in seconds; zero when closed.
    pub fn mercy_window_remaining(&self) -> f32 {
        self.timers.mercy_window.remaining()
    }

    pub fn mercy_taps(&self) -> u32 {
        self.mercy.taps
    }

    pub fn is_mercy_eligible_this_round(&self) -> bool {
        self.mercy.eligible_this_round
    }

    pub fn can_perform_mercy_this_match(&self) -> bool {
        self.mercy.available_this_match
    }

    /// False once this fighter has dealt a lethal blow this round.
    pub fn is_ko_friendly(&self) -> bool {
        self.ko_friendly
    }

    pub fn config(&self) -> &FighterConfig {
        &self.config
    }

    pub fn diagnostics(&self) -> &[FighterError] {
        &self.diagnostics
    }

    /// Takes all recorded diagnostics, oldest first.
    pub fn drain_diagnostics(&mut self) -> Diagnostics {
        core::mem::take(&mut self.diagnostics)
    }

    // ===== internals shared by the step modules =====

    fn facing_sign(&self) -> f32 {
        if self.facing_right { 1.0 } else { -1.0 }
    }

    fn frames(&self, frames: u32) -> f32 {
        self.config.frames_to_seconds(frames)
    }

    fn is_grounded(&self) -> bool {
        !self.is_airborne() && self.velocity.y <= 0.0
    }

    /// Moves to `next` through the transition table.
    fn transition(&mut self, next: FighterState) {
        let from = self.state;
        if from == next {
            return;
        }
        if from.allows(next) {
            tracing::trace!(%from, to = %next, "state transition");
        } else {
            tracing::error!(%from, to = %next, "illegal state transition");
        }
        self.state = next;
        if !next.is_executing() {
            self.current_move = None;
            self.current_throw = None;
        }
    }

    /// Stores a diagnostic, dropping the oldest when full.
    fn record(&mut self, err: FighterError) {
        tracing::warn!(
            code = err.error_code(),
            severity = err.severity().as_str(),
            "{err}"
        );
        if self.diagnostics.is_full() {
            self.diagnostics.remove(0);
        }
        self.diagnostics.push(err);
    }
}

impl core::fmt::Debug for FighterCore<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FighterCore")
            .field("state", &self.state)
            .field("phase", &self.phase)
            .field("health", &self.health)
            .field("position", &self.position)
            .field("velocity", &self.velocity)
            .field("facing_right", &self.facing_right)
            .field("meter", &self.meter)
            .field("paused", &self.paused)
            .finish_non_exhaustive()
    }
}
