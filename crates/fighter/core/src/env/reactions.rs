/// Oracle providing hit reactions keyed by reaction type.
pub trait ReactionOracle: Send + Sync {
    fn try_get_reaction(&self, kind: ReactionType) -> Option<ReactionFrameData>;
}

/// How a struck fighter reacts. Moves name one of these.
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
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReactionType {
    #[default]
    None,
    HitHigh,
    HitLow,
    SweepKnockdown,
    Popup,
    Knockback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReactionFrameData {
    pub kind: ReactionType,
    pub hit_stun: u32,
    pub block_stun: u32,
    /// Replaces `hit_stun` when the victim is airborne; 0 means unused.
    #[cfg_attr(feature = "serde", serde(default))]
    pub air_stun: u32,
    /// Knockdown length for knockdown moves; 0 defers to the config.
    #[cfg_attr(feature = "serde", serde(default))]
    pub knockdown_delay: u32,
}

impl ReactionFrameData {
    pub const fn new(kind: ReactionType, hit_stun: u32, block_stun: u32) -> Self {
        Self {
            kind,
            hit_stun,
            block_stun,
            air_stun: 0,
            knockdown_delay: 0,
        }
    }

    pub const fn with_air_stun(mut self, air_stun: u32) -> Self {
        self.air_stun = air_stun;
        self
    }

    pub const fn with_knockdown_delay(mut self, knockdown_delay: u32) -> Self {
        self.knockdown_delay = knockdown_delay;
        self
    }

    /// Hit-stun to apply, honouring the airborne override.
    pub const fn stun_for(&self, airborne: bool) -> u32 {
        if airborne && self.air_stun > 0 {
            self.air_stun
        } else {
            self.hit_stun
        }
    }
}
