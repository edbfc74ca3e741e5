use super::ReactionType;

/// Oracle providing per-move frame data.
pub trait MoveOracle: Send + Sync {
    fn try_get_move(&self, tag: MoveTag) -> Option<MoveFrameData>;
}

/// Every move the core knows how to initiate.
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
pub enum MoveTag {
    HighPunch,
    HighKick,
    LowPunch,
    LowKick,
    /// Crouching high punch.
    Uppercut,
    /// Back + low kick.
    SweepKick,
    /// Back + high kick.
    Roundhouse,
    /// Double-tap back.
    BackDash,
    WakeupRoll,
}

/// Strength tier of a move. Indexes the block-stun and push-back tables.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackPower {
    #[default]
    Light,
    Medium,
    Heavy,
    Special,
}

impl AttackPower {
    pub const fn index(self) -> usize {
        match self {
            Self::Light => 0,
            Self::Medium => 1,
            Self::Heavy => 2,
            Self::Special => 3,
        }
    }
}

/// Timing and damage parameters for one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveFrameData {
    pub tag: MoveTag,
    pub startup: u32,
    pub active: u32,
    pub recovery: u32,
    pub damage: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reaction: ReactionType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub power: AttackPower,
    #[cfg_attr(feature = "serde", serde(default))]
    pub knockdown: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub unblockable: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub no_chip: bool,
    /// Walk input is honoured during startup.
    #[cfg_attr(feature = "serde", serde(default))]
    pub movable_startup: bool,
    /// Walk input is honoured while active.
    #[cfg_attr(feature = "serde", serde(default))]
    pub movable_active: bool,
}

impl MoveFrameData {
    pub const fn new(tag: MoveTag, startup: u32, active: u32, recovery: u32, damage: u32) -> Self {
        Self {
            tag,
            startup,
            active,
            recovery,
            damage,
            reaction: ReactionType::None,
            power: AttackPower::Light,
            knockdown: false,
            unblockable: false,
            no_chip: false,
            movable_startup: false,
            movable_active: false,
        }
    }

    pub const fn with_reaction(mut self, reaction: ReactionType) -> Self {
        self.reaction = reaction;
        self
    }

    pub const fn with_power(mut self, power: AttackPower) -> Self {
        self.power = power;
        self
    }

    pub const fn with_knockdown(mut self) -> Self {
        self.knockdown = true;
        self
    }

    pub const fn with_unblockable(mut self) -> Self {
        self.unblockable = true;
        self
    }

    pub const fn with_no_chip(mut self) -> Self {
        self.no_chip = true;
        self
    }

    pub const fn with_movement(mut self, startup: bool, active: bool) -> Self {
        self.movable_startup = startup;
        self.movable_active = active;
        self
    }

    pub const fn total_frames(&self) -> u32 {
        self.startup + self.active + self.recovery
    }

    /// A move with no frames at all cannot be executed.
    pub const fn is_executable(&self) -> bool {
        self.total_frames() > 0
    }
}
