use glam::Vec2;

use super::FighterCore;
use crate::error::{ErrorSeverity, GameError};
use crate::state::FighterState;

/// Rejected mercy requests. Nothing changes when one is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MercyError {
    #[error("fighter still has health")]
    NotKnockedOut,

    #[error("fighter is not eligible for mercy this round")]
    NotEligible,
}

impl GameError for MercyError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotKnockedOut => "MERCY_NOT_KNOCKED_OUT",
            Self::NotEligible => "MERCY_NOT_ELIGIBLE",
        }
    }
}

impl FighterCore<'_> {
    /// Opens the mercy window on a defeated, eligible fighter.
    ///
    /// # Errors
    ///
    /// `NotKnockedOut` above zero health, `NotEligible` once eligibility for
    /// the round has been spent.
    pub fn enter_mercy_window(&mut self) -> Result<(), MercyError> {
        self.check_mercy_preconditions()?;
        self.transition(FighterState::MercyReceiving);
        self.velocity = Vec2::ZERO;
        self.timers.knockdown.stop();
        self.timers
            .mercy_window
            .arm(self.frames(self.config.mercy.window_frames));
        self.mercy.taps = 0;
        tracing::debug!(
            window_secs = self.timers.mercy_window.remaining(),
            "mercy window opened"
        );
        Ok(())
    }

    /// Counts one block tap toward mercy. Returns true on the tap that
    /// grants it; false if the window is closed or the threshold is not met.
    pub fn register_block_tap_for_mercy(&mut self) -> bool {
        if self.state != FighterState::MercyReceiving
            || !self.timers.mercy_window.is_running()
            || self.health > 0
        {
            return false;
        }
        self.mercy.taps += 1;
        if self.mercy.taps < self.config.mercy.tap_threshold {
            return false;
        }
        self.grant_mercy();
        true
    }

    /// Grants mercy immediately, without taps.
    ///
    /// # Errors
    ///
    /// Same preconditions as [`enter_mercy_window`](Self::enter_mercy_window).
    pub fn revive_for_mercy(&mut self) -> Result<(), MercyError> {
        self.check_mercy_preconditions()?;
        self.grant_mercy();
        Ok(())
    }

    /// Spends this fighter's once-per-match mercy.
    pub fn mark_mercy_performed_this_match(&mut self) {
        self.mercy.available_this_match = false;
    }

    /// Mercy window ran out inside `tick`.
    pub(super) fn expire_mercy_window(&mut self) {
        self.mercy.eligible_this_round = false;
        self.mercy.taps = 0;
        self.knock_down(self.config.combat.ko_knockdown_frames);
        tracing::debug!("mercy window expired");
    }

    fn check_mercy_preconditions(&self) -> Result<(), MercyError> {
        if self.health > 0 {
            return Err(MercyError::NotKnockedOut);
        }
        if !self.mercy.eligible_this_round {
            return Err(MercyError::NotEligible);
        }
        Ok(())
    }

    fn grant_mercy(&mut self) {
        let max = u64::from(self.config.max_health);
        let restored = max * u64::from(self.config.mercy.restore_percent) / 100;
        self.health = u32::try_from(restored.max(1)).unwrap_or(self.config.max_health);
        self.mercy.eligible_this_round = false;
        self.mercy.taps = 0;
        self.timers.mercy_window.stop();
        self.timers.knockdown.stop();
        // Mercy may also end a finisher freeze, which the table reserves for
        // the director.
        self.set_state(FighterState::Idle);
        self.velocity = Vec2::ZERO;
        tracing::debug!(health = self.health, "mercy granted");
    }
}
