//! Second-based countdowns.
//!
//! Every timer in the core counts seconds and is advanced by the step `dt`.
//! Frame-authored durations are converted once, when armed, through
//! [`FighterConfig::frames_to_seconds`](crate::FighterConfig::frames_to_seconds).

/// A countdown in seconds.
///
/// Expiry is reported on the step whose advance brings the remaining time
/// within half a step of zero, so an `n`-frame countdown armed with a fixed
/// `dt` expires on exactly the `n`th advance despite f32 accumulation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    pub const STOPPED: Self = Self { remaining: 0.0 };

    pub fn from_secs(secs: f32) -> Self {
        Self {
            remaining: secs.max(0.0),
        }
    }

    pub fn arm(&mut self, secs: f32) {
        *self = Self::from_secs(secs);
    }

    pub fn stop(&mut self) {
        self.remaining = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Advances by `dt`. Returns true only on the step the countdown expires.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.is_running() {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= dt * 0.5 {
            self.remaining = 0.0;
            true
        } else {
            false
        }
    }
}
