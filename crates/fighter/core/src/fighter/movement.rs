use glam::Vec2;

use super::{FighterCore, JumpArc};
use crate::input::{Controls, InputSnapshot};
use crate::state::FighterState;

impl FighterCore<'_> {
    /// Resolves stance and ground movement.
    ///
    /// Precedence: block, crouch, jump, run, walk. Jump is checked ahead of
    /// run and walk so it stays reachable while Forward is held.
    pub(super) fn resolve_movement(&mut self, input: &InputSnapshot) {
        if self.state.is_frozen() {
            self.velocity.x = 0.0;
            return;
        }
        let from = self.state;
        if !(from.is_idle_like() || from.is_blocking()) || !self.is_grounded() {
            return;
        }

        let block_stunned = self.timers.block_stun.is_running();
        if input.is_held(Controls::BLOCK) && !self.meter.is_crushed() && !block_stunned {
            let stance = if input.is_held(Controls::DOWN) {
                FighterState::BlockingLow
            } else {
                FighterState::BlockingHigh
            };
            self.transition(stance);
            self.velocity.x = 0.0;
            return;
        }
        if from.is_blocking() && block_stunned {
            return;
        }

        if input.is_held(Controls::DOWN) {
            self.transition(FighterState::Crouch);
            self.velocity.x = 0.0;
            return;
        }

        let up_pressed = input.was_pressed(Controls::UP);
        let up_held = input.is_held(Controls::UP) && !self.timers.land_lock.is_running();
        if up_pressed || up_held {
            self.start_jump(input);
            return;
        }

        if input.is_held(Controls::RUN | Controls::FORWARD) && self.meter.can_run(&self.config.meter)
        {
            self.transition(FighterState::Running);
            self.velocity.x = self.config.movement.run_speed * self.facing_sign();
            return;
        }

        let drift = self.walk_velocity(input);
        let next = if drift == 0.0 {
            FighterState::Idle
        } else {
            FighterState::Walking
        };
        self.transition(next);
        self.velocity.x = drift;
    }

    /// Horizontal walk velocity for the held direction; forward wins ties.
    pub(super) fn walk_velocity(&self, input: &InputSnapshot) -> f32 {
        let movement = &self.config.movement;
        if input.is_held(Controls::FORWARD) {
            movement.walk_forward_speed * self.facing_sign()
        } else if input.is_held(Controls::BACK) {
            -movement.walk_back_speed * self.facing_sign()
        } else {
            0.0
        }
    }

    fn start_jump(&mut self, input: &InputSnapshot) {
        self.jump_arc = if input.is_held(Controls::FORWARD) {
            JumpArc::Forward
        } else if input.is_held(Controls::BACK) {
            JumpArc::Back
        } else {
            JumpArc::Neutral
        };
        self.transition(FighterState::JumpStartup);
        self.velocity = Vec2::ZERO;
        self.timers
            .jump_startup
            .arm(self.frames(self.config.movement.jump_startup_frames));
    }
}
