use glam::Vec2;

use super::{FighterCore, Hold};
use crate::combat::{self, HitOutcome};
use crate::env::{MoveFrameData, ThrowData};
use crate::error::FighterError;
use crate::state::FighterState;

impl FighterCore<'_> {
    /// Applies an already-resolved collision from `attacker`'s move.
    ///
    /// A paused fighter ignores it. A finisher victim always takes the hit.
    /// Otherwise invulnerable or defeated fighters ignore it, and a block
    /// flag resolves as a block unless the move is unblockable.
    pub fn receive_hit(
        &mut self,
        mv: &MoveFrameData,
        blocked: bool,
        attacker: &mut FighterCore<'_>,
    ) -> HitOutcome {
        if self.paused {
            tracing::trace!(tag = %mv.tag, "hit ignored while paused");
            return HitOutcome::Ignored;
        }
        let finisher = self.state == FighterState::FinishHimVictim;
        if !finisher && (self.state.is_invulnerable() || self.health == 0) {
            tracing::trace!(state = %self.state, tag = %mv.tag, "hit ignored");
            return HitOutcome::Ignored;
        }
        if !finisher && blocked && !mv.unblockable {
            return self.resolve_block(mv, attacker);
        }
        self.resolve_hit(mv, attacker)
    }

    fn resolve_block(&mut self, mv: &MoveFrameData, attacker: &mut FighterCore<'_>) -> HitOutcome {
        let tuning = &self.config.combat;
        let chip = combat::chip_damage(mv, tuning);
        let stun_frames = combat::block_stun_frames(mv.power, tuning);
        let pushback = combat::block_pushback(mv.power, tuning);

        let dealt = self.take_damage(chip);
        if self.health == 0 {
            return self.knock_out(attacker, dealt);
        }

        let low = matches!(
            self.state,
            FighterState::Crouch | FighterState::BlockingLow
        );
        self.transition(if low {
            FighterState::BlockingLow
        } else {
            FighterState::BlockingHigh
        });
        self.timers.hit_stun.stop();
        let stun_secs = self.frames(stun_frames);
        self.timers.block_stun.arm(stun_secs);
        self.velocity.x = if stun_secs > 0.0 {
            -self.facing_sign() * pushback / stun_secs
        } else {
            0.0
        };
        tracing::trace!(chip = dealt, stun_frames, "hit blocked");
        HitOutcome::Blocked {
            chip: dealt,
            stun_frames,
        }
    }

    fn resolve_hit(&mut self, mv: &MoveFrameData, attacker: &mut FighterCore<'_>) -> HitOutcome {
        let dealt = self.take_damage(mv.damage);
        self.timers.hit_stun.stop();
        self.timers.block_stun.stop();
        self.velocity.x = 0.0;
        if self.health == 0 {
            return self.knock_out(attacker, dealt);
        }
        self.mercy.eligible_this_round = true;

        let reaction = self.reactions.try_get_reaction(mv.reaction);
        if reaction.is_none() {
            self.record(FighterError::MissingReactionData(mv.reaction));
        }

        if mv.knockdown {
            let knockdown_frames = match reaction {
                Some(r) if r.knockdown_delay > 0 => r.knockdown_delay,
                _ => self.config.combat.knockdown_frames,
            };
            self.knock_down(knockdown_frames);
            return HitOutcome::KnockedDown {
                damage: dealt,
                knockdown_frames,
            };
        }

        let airborne = self.is_airborne();
        let stun_frames = reaction
            .map_or(self.config.combat.fallback_hit_stun_frames, |r| {
                r.stun_for(airborne)
            })
            .max(1);
        self.transition(FighterState::HitStun);
        self.timers.hit_stun.arm(self.frames(stun_frames));
        HitOutcome::Hit {
            damage: dealt,
            stun_frames,
        }
    }

    /// Grabs this fighter with `thrower`'s throw. Returns false when the
    /// fighter cannot be thrown right now or is paused.
    pub fn receive_throw(&mut self, throw: &ThrowData, thrower: &FighterCore<'_>) -> bool {
        if self.paused
            || !self.state.is_throwable()
            || self.health == 0
            || !self.is_grounded()
        {
            return false;
        }
        self.transition(FighterState::Thrown);
        self.velocity = Vec2::ZERO;
        self.timers.hit_stun.stop();
        self.timers.block_stun.stop();
        self.timers.jump_startup.stop();
        self.hold = Some(Hold {
            throw: *throw,
            toss_sign: thrower.facing_sign(),
        });
        self.timers.escape.arm(self.frames(throw.escape_window));
        self.timers.thrown.arm(self.frames(throw.execute));
        tracing::debug!(tag = %throw.tag, "thrown");
        if throw.execute == 0 {
            self.slam();
        }
        true
    }

    /// Ends a hold that was not teched: full damage, toss, knockdown.
    pub(super) fn slam(&mut self) {
        self.timers.escape.stop();
        self.timers.thrown.stop();
        let Some(hold) = self.hold.take() else {
            self.transition(FighterState::Idle);
            return;
        };
        let throw = hold.throw;
        self.position += Vec2::new(throw.toss.x * hold.toss_sign, throw.toss.y);
        self.take_damage(throw.damage_full);
        if self.health == 0 {
            self.knock_down(self.config.combat.ko_knockdown_frames);
        } else {
            self.mercy.eligible_this_round = true;
            let frames = if throw.knockdown_delay > 0 {
                throw.knockdown_delay
            } else {
                self.config.combat.knockdown_frames
            };
            self.knock_down(frames);
        }
        tracing::debug!(tag = %throw.tag, health = self.health, "throw landed");
    }

    /// Escapes a hold: soft damage and back to neutral.
    pub(super) fn tech(&mut self) {
        self.timers.escape.stop();
        self.timers.thrown.stop();
        let Some(hold) = self.hold.take() else {
            return;
        };
        self.take_damage(hold.throw.damage_soft);
        if self.health == 0 {
            self.knock_down(self.config.combat.ko_knockdown_frames);
        } else {
            self.transition(FighterState::Idle);
        }
        tracing::debug!(tag = %hold.throw.tag, "throw teched");
    }

    /// Subtracts up to `amount` health; returns what was removed.
    fn take_damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.health);
        self.health -= dealt;
        dealt
    }

    fn knock_out(&mut self, attacker: &mut FighterCore<'_>, dealt: u32) -> HitOutcome {
        self.health = 0;
        self.knock_down(self.config.combat.ko_knockdown_frames);
        attacker.ko_friendly = false;
        tracing::debug!(damage = dealt, "knocked out");
        HitOutcome::KnockedOut { damage: dealt }
    }

    pub(super) fn knock_down(&mut self, frames: u32) {
        self.transition(FighterState::Knockdown);
        self.velocity.x = 0.0;
        self.timers.jump_startup.stop();
        self.timers.knockdown.arm(self.frames(frames));
    }
}
