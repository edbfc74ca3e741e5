//! Pure hit/block arithmetic shared by hit resolution.

use crate::config::CombatConfig;
use crate::env::{AttackPower, MoveFrameData};

/// What a call to [`FighterCore::receive_hit`](crate::FighterCore::receive_hit) did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitOutcome {
    /// The fighter was invulnerable or already defeated.
    Ignored,
    Blocked {
        chip: u32,
        stun_frames: u32,
    },
    Hit {
        damage: u32,
        stun_frames: u32,
    },
    KnockedDown {
        damage: u32,
        knockdown_frames: u32,
    },
    /// Health reached zero.
    KnockedOut {
        damage: u32,
    },
}

impl HitOutcome {
    /// Health removed by this hit.
    pub const fn damage(&self) -> u32 {
        match *self {
            Self::Ignored => 0,
            Self::Blocked { chip, .. } => chip,
            Self::Hit { damage, .. }
            | Self::KnockedDown { damage, .. }
            | Self::KnockedOut { damage } => damage,
        }
    }

    pub const fn is_knockout(&self) -> bool {
        matches!(self, Self::KnockedOut { .. })
    }
}

pub fn chip_damage(mv: &MoveFrameData, config: &CombatConfig) -> u32 {
    if mv.no_chip {
        0
    } else {
        mv.damage / config.chip_divisor.max(1)
    }
}

pub fn block_stun_frames(power: AttackPower, config: &CombatConfig) -> u32 {
    config.block_stun_frames[power.index()]
}

/// Push-back distance in world units.
pub fn block_pushback(power: AttackPower, config: &CombatConfig) -> f32 {
    config.block_pushback[power.index()]
}
