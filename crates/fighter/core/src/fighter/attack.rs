use super::FighterCore;
use crate::env::{MoveFrameData, MoveTag, ThrowTag};
use crate::error::FighterError;
use crate::input::{Controls, InputSnapshot};
use crate::state::{FighterState, MovePhase};

impl FighterCore<'_> {
    /// Starts a move or throw from an idle-like state, advances the one in
    /// progress, or checks a throw tech while held.
    pub(super) fn resolve_action(&mut self, input: &InputSnapshot) {
        if self.state.is_idle_like() {
            if self.is_grounded() {
                self.try_initiate(input);
            }
        } else if self.state.is_executing() {
            self.advance_phase(input);
        } else if self.state == FighterState::Thrown {
            self.try_tech(input);
        }
    }

    /// Only the highest-priority pressed button is looked up; its edge is
    /// consumed even when the table has no entry.
    fn try_initiate(&mut self, input: &InputSnapshot) {
        let back = input.is_held(Controls::BACK);
        if input.was_pressed(Controls::HIGH_PUNCH | Controls::HIGH_KICK) {
            let tag = if back {
                ThrowTag::Reverse
            } else {
                ThrowTag::Forward
            };
            self.start_throw(tag);
        } else if input.was_pressed(Controls::HIGH_PUNCH) {
            let crouching = self.state == FighterState::Crouch;
            self.start_move(crouching.then_some(MoveTag::Uppercut), MoveTag::HighPunch);
        } else if input.was_pressed(Controls::HIGH_KICK) {
            self.start_move(back.then_some(MoveTag::Roundhouse), MoveTag::HighKick);
        } else if input.was_pressed(Controls::LOW_PUNCH) {
            self.start_move(None, MoveTag::LowPunch);
        } else if input.was_pressed(Controls::LOW_KICK) {
            let variant = if self.state == FighterState::Crouch {
                Some(MoveTag::WakeupRoll)
            } else {
                back.then_some(MoveTag::SweepKick)
            };
            self.start_move(variant, MoveTag::LowKick);
        } else if input.double_tap_back {
            self.start_move(None, MoveTag::BackDash);
        }
    }

    fn lookup_move(&self, tag: MoveTag) -> Option<MoveFrameData> {
        self.moves
            .try_get_move(tag)
            .filter(MoveFrameData::is_executable)
    }

    /// Starts `variant` when the table has it, else `base`.
    fn start_move(&mut self, variant: Option<MoveTag>, base: MoveTag) -> bool {
        let data = variant
            .and_then(|tag| self.lookup_move(tag))
            .or_else(|| self.lookup_move(base));
        let Some(data) = data else {
            self.record(FighterError::MissingMoveData(base));
            return false;
        };

        let dashing = data.tag == MoveTag::BackDash;
        self.transition(if dashing {
            FighterState::BackDash
        } else {
            FighterState::Attacking
        });
        self.current_move = Some(data);
        self.velocity.x = if dashing {
            -self.config.movement.back_dash_speed * self.facing_sign()
        } else {
            0.0
        };
        tracing::debug!(tag = %data.tag, damage = data.damage, "move started");
        self.begin_phases();
        true
    }

    fn start_throw(&mut self, tag: ThrowTag) -> bool {
        let Some(data) = self.throws.try_get_throw(tag) else {
            self.record(FighterError::MissingThrowData(tag));
            return false;
        };
        self.transition(FighterState::ThrowStartup);
        self.current_throw = Some(data);
        self.velocity.x = 0.0;
        tracing::debug!(%tag, "throw started");
        self.begin_phases();
        true
    }

    fn phase_frames(&self, phase: MovePhase) -> u32 {
        if let Some(mv) = &self.current_move {
            match phase {
                MovePhase::Startup => mv.startup,
                MovePhase::Active => mv.active,
                MovePhase::Recovery => mv.recovery,
            }
        } else if let Some(throw) = &self.current_throw {
            match phase {
                MovePhase::Startup => throw.startup,
                MovePhase::Active => throw.execute,
                MovePhase::Recovery => throw.recovery,
            }
        } else {
            0
        }
    }

    fn begin_phases(&mut self) {
        self.phase = MovePhase::Startup;
        let frames = self.phase_frames(MovePhase::Startup);
        self.timers.phase.arm(self.frames(frames));
        if frames == 0 {
            self.next_phase();
        }
    }

    /// Enters the next phase with a non-zero length, or finishes.
    fn next_phase(&mut self) {
        let mut phase = self.phase;
        while let Some(next) = phase.next() {
            phase = next;
            let frames = self.phase_frames(next);
            if frames > 0 {
                self.enter_phase(next, frames);
                return;
            }
        }
        self.finish_move();
    }

    fn enter_phase(&mut self, phase: MovePhase, frames: u32) {
        self.phase = phase;
        self.timers.phase.arm(self.frames(frames));
        if self.state == FighterState::ThrowStartup {
            self.transition(FighterState::Throwing);
        }
        if phase == MovePhase::Recovery && self.state == FighterState::BackDash {
            self.velocity.x = 0.0;
        }
    }

    fn finish_move(&mut self) {
        self.transition(FighterState::Idle);
        self.velocity.x = 0.0;
        self.timers.phase.stop();
    }

    fn advance_phase(&mut self, input: &InputSnapshot) {
        if self.current_move.is_none() && self.current_throw.is_none() {
            self.finish_move();
            return;
        }
        self.apply_move_drift(input);
        if self.timers.phase.advance(self.dt) || !self.timers.phase.is_running() {
            self.next_phase();
        }
    }

    /// Walk input during phases that allow it; otherwise hold still.
    fn apply_move_drift(&mut self, input: &InputSnapshot) {
        if self.state != FighterState::Attacking {
            return;
        }
        let movable = self.current_move.is_some_and(|mv| match self.phase {
            MovePhase::Startup => mv.movable_startup,
            MovePhase::Active => mv.movable_active,
            MovePhase::Recovery => false,
        });
        self.velocity.x = if movable {
            self.walk_velocity(input)
        } else {
            0.0
        };
    }

    /// The escape window is counted down here, after the tech check, so it
    /// spans exactly `escape_window` steps.
    fn try_tech(&mut self, input: &InputSnapshot) {
        if !self.timers.escape.is_running() {
            return;
        }
        if input.pressed_any(Controls::PUNCHES) {
            self.tech();
            return;
        }
        self.timers.escape.advance(self.dt);
    }
}
