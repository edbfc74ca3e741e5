use glam::Vec2;

/// Oracle providing throw data.
pub trait ThrowOracle: Send + Sync {
    fn try_get_throw(&self, tag: ThrowTag) -> Option<ThrowData>;
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThrowTag {
    /// High punch + high kick.
    Forward,
    /// Back + high punch + high kick.
    Reverse,
}

/// Grab timing, damage and the escape window.
///
/// The thrower runs startup, execute and recovery like an ordinary move; the
/// victim is held for `execute` frames and may tech during the first
/// `escape_window` of them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThrowData {
    pub tag: ThrowTag,
    pub startup: u32,
    pub execute: u32,
    pub recovery: u32,
    pub damage_full: u32,
    /// Damage taken when the victim techs.
    pub damage_soft: u32,
    pub knockdown_delay: u32,
    pub escape_window: u32,
    /// Displacement applied to the victim on the slam, `x` measured along the
    /// thrower's facing.
    #[cfg_attr(feature = "serde", serde(default))]
    pub toss: Vec2,
}

impl ThrowData {
    pub const fn total_frames(&self) -> u32 {
        self.startup + self.execute + self.recovery
    }
}
