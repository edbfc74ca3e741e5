//! Per-step input snapshot consumed by [`FighterCore::tick`](crate::FighterCore::tick).
//!
//! A snapshot carries held controls and press edges. `LEFT`/`RIGHT` are
//! world-relative; `FORWARD`/`BACK` are already resolved against facing.
//! [`InputBuffer`] builds snapshots from raw device state.
mod buffer;

pub use buffer::InputBuffer;

use bitflags::bitflags;

bitflags! {
    /// One bit per physical direction or button.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Controls: u16 {
        const LEFT       = 1 << 0;
        const RIGHT      = 1 << 1;
        const UP         = 1 << 2;
        const DOWN       = 1 << 3;
        const FORWARD    = 1 << 4;
        const BACK       = 1 << 5;
        const RUN        = 1 << 6;
        const BLOCK      = 1 << 7;
        const HIGH_PUNCH = 1 << 8;
        const HIGH_KICK  = 1 << 9;
        const LOW_PUNCH  = 1 << 10;
        const LOW_KICK   = 1 << 11;

        const WORLD_HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        const RELATIVE_HORIZONTAL = Self::FORWARD.bits() | Self::BACK.bits();
        const PUNCHES = Self::HIGH_PUNCH.bits() | Self::LOW_PUNCH.bits();
    }
}

/// Immutable record of one step's input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputSnapshot {
    pub held: Controls,
    pub pressed: Controls,
    /// Back was tapped twice inside the double-tap window.
    pub double_tap_back: bool,
}

impl InputSnapshot {
    pub const NEUTRAL: Self = Self {
        held: Controls::empty(),
        pressed: Controls::empty(),
        double_tap_back: false,
    };

    /// Adds held controls without press edges.
    #[must_use]
    pub fn holding(mut self, controls: Controls) -> Self {
        self.held |= controls;
        self
    }

    /// Adds press edges; a pressed control is also held.
    #[must_use]
    pub fn pressing(mut self, controls: Controls) -> Self {
        self.held |= controls;
        self.pressed |= controls;
        self
    }

    #[must_use]
    pub fn with_double_tap_back(mut self) -> Self {
        self.double_tap_back = true;
        self
    }

    pub fn is_held(&self, controls: Controls) -> bool {
        self.held.contains(controls)
    }

    pub fn was_pressed(&self, controls: Controls) -> bool {
        self.pressed.contains(controls)
    }

    pub fn holds_any(&self, controls: Controls) -> bool {
        self.held.intersects(controls)
    }

    pub fn pressed_any(&self, controls: Controls) -> bool {
        self.pressed.intersects(controls)
    }
}
