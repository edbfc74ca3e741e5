use glam::Vec2;

use super::{FighterCore, JumpArc};
use crate::input::InputSnapshot;
use crate::meter::MeterChange;
use crate::state::FighterState;

impl FighterCore<'_> {
    /// Advances the fighter by one fixed step.
    ///
    /// Order: counters, crush lockout, meter, movement, attacks and phases,
    /// then jump launch, gravity, integration and landing. Each stage sees
    /// the effects of the previous ones. A paused fighter does not advance.
    pub fn tick(&mut self, input: &InputSnapshot) {
        if self.paused {
            return;
        }
        self.advance_counters();
        self.meter.tick_crush(self.dt);
        let change = self
            .meter
            .update(&self.config.meter, self.state, input, self.dt);
        if change == MeterChange::Crushed {
            tracing::debug!(
                lockout_secs = self.meter.crush_timer(),
                "run meter exhausted"
            );
        }
        self.resolve_movement(input);
        self.resolve_action(input);
        self.integrate();
    }

    fn advance_counters(&mut self) {
        let dt = self.dt;
        if self.timers.hit_stun.advance(dt) && self.state == FighterState::HitStun {
            self.transition(FighterState::Idle);
        }
        if self.timers.block_stun.advance(dt) && self.state.is_blocking() {
            self.velocity.x = 0.0;
            let next = if self.state == FighterState::BlockingLow {
                FighterState::Crouch
            } else {
                FighterState::Idle
            };
            self.transition(next);
        }
        if self.timers.knockdown.advance(dt)
            && self.state == FighterState::Knockdown
            && self.health > 0
        {
            self.transition(FighterState::Idle);
        }
        self.timers.jump_startup.advance(dt);
        self.timers.land_lock.advance(dt);
        if self.timers.thrown.advance(dt) && self.state == FighterState::Thrown {
            self.slam();
        }
        if self.state == FighterState::MercyReceiving && self.timers.mercy_window.advance(dt) {
            self.expire_mercy_window();
        }
    }

    fn integrate(&mut self) {
        let movement = self.config.movement;
        if self.state == FighterState::JumpStartup && !self.timers.jump_startup.is_running() {
            self.launch();
        }

        if !self.is_grounded() {
            self.velocity.y -= movement.gravity * self.dt;
        }
        self.position += self.velocity * self.dt;

        if self.position.y <= movement.ground_y && self.velocity.y <= 0.0 {
            self.position.y = movement.ground_y;
            self.velocity.y = 0.0;
            if self.state == FighterState::Jumping {
                self.transition(FighterState::Idle);
                self.velocity.x = 0.0;
                self.timers
                    .land_lock
                    .arm(self.frames(movement.land_lock_frames));
            }
        }
    }

    fn launch(&mut self) {
        let movement = self.config.movement;
        let horizontal = match self.jump_arc {
            JumpArc::Neutral => 0.0,
            JumpArc::Forward => movement.jump_forward_velocity,
            JumpArc::Back => -movement.jump_back_velocity,
        };
        self.velocity = Vec2::new(horizontal * self.facing_sign(), movement.jump_up_velocity);
        self.jump_arc = JumpArc::Neutral;
        self.transition(FighterState::Jumping);
    }
}
