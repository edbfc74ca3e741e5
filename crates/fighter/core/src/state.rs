//! Fighter state machine vocabulary.
//!
//! [`FighterState`] is the single tagged state of a fighter. Legal edges live
//! in [`FighterState::allows`]; the core checks every internal transition
//! against it, while the round director's override bypasses it.

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
pub enum FighterState {
    #[default]
    Idle,
    Walking,
    Running,
    Crouch,
    BlockingHigh,
    BlockingLow,
    JumpStartup,
    Jumping,
    Attacking,
    HitStun,
    Knockdown,
    BackDash,
    ThrowStartup,
    Throwing,
    Thrown,
    MercyReceiving,
    FinishHimVictim,
    FinishHimWinner,
}

impl FighterState {
    /// Grounded neutral states from which movement and attacks are resolved.
    pub const fn is_idle_like(self) -> bool {
        matches!(self, Self::Idle | Self::Walking | Self::Running | Self::Crouch)
    }

    pub const fn is_blocking(self) -> bool {
        matches!(self, Self::BlockingHigh | Self::BlockingLow)
    }

    /// States whose fighter ignores movement input and has no horizontal drive.
    pub const fn is_frozen(self) -> bool {
        matches!(
            self,
            Self::HitStun
                | Self::Knockdown
                | Self::Thrown
                | Self::FinishHimVictim
                | Self::MercyReceiving
        )
    }

    /// States that carry a current move or throw and a [`MovePhase`].
    pub const fn is_executing(self) -> bool {
        matches!(
            self,
            Self::Attacking | Self::BackDash | Self::ThrowStartup | Self::Throwing
        )
    }

    /// States that only the round director may enter.
    pub const fn is_director_only(self) -> bool {
        matches!(self, Self::FinishHimVictim | Self::FinishHimWinner)
    }

    /// States in which a hit or throw has no effect.
    pub const fn is_invulnerable(self) -> bool {
        matches!(
            self,
            Self::Knockdown | Self::Thrown | Self::MercyReceiving | Self::FinishHimWinner
        )
    }

    /// States a throw can grab.
    pub const fn is_throwable(self) -> bool {
        self.is_idle_like()
            || self.is_blocking()
            || matches!(self, Self::Attacking | Self::JumpStartup)
    }

    const fn is_locomotion(self) -> bool {
        self.is_idle_like() || self.is_blocking()
    }

    /// Whether the core itself may move from `self` to `next`.
    pub const fn allows(self, next: Self) -> bool {
        use FighterState::*;
        if self as u8 == next as u8 {
            return true;
        }
        match next {
            Idle => !matches!(self, FinishHimVictim | FinishHimWinner),
            Walking | Running | Crouch | JumpStartup => self.is_locomotion(),
            BlockingHigh | BlockingLow => {
                !matches!(self, Knockdown | Thrown | MercyReceiving)
                    && !self.is_director_only()
            }
            Attacking | BackDash | ThrowStartup => self.is_idle_like(),
            Jumping => matches!(self, JumpStartup),
            Throwing => matches!(self, ThrowStartup),
            Thrown => self.is_throwable(),
            HitStun => !matches!(self, Knockdown | Thrown | MercyReceiving | FinishHimWinner),
            Knockdown => !matches!(self, FinishHimWinner),
            MercyReceiving => matches!(self, Knockdown | FinishHimVictim),
            FinishHimVictim | FinishHimWinner => false,
        }
    }
}

/// Phase of an executing move or throw.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovePhase {
    #[default]
    Startup,
    Active,
    Recovery,
}

impl MovePhase {
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Startup => Some(Self::Active),
            Self::Active => Some(Self::Recovery),
            Self::Recovery => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn director_only_states_are_unreachable_internally() {
        for from in FighterState::iter() {
            for to in [FighterState::FinishHimVictim, FighterState::FinishHimWinner] {
                assert_eq!(from.allows(to), from == to, "{from} -> {to}");
            }
        }
    }

    #[test]
    fn jump_and_throw_chains() {
        assert!(FighterState::Running.allows(FighterState::JumpStartup));
        assert!(FighterState::JumpStartup.allows(FighterState::Jumping));
        assert!(!FighterState::Idle.allows(FighterState::Jumping));
        assert!(FighterState::Jumping.allows(FighterState::Idle));
        assert!(FighterState::ThrowStartup.allows(FighterState::Throwing));
        assert!(!FighterState::Attacking.allows(FighterState::Throwing));
    }

    #[test]
    fn hit_edges() {
        assert!(FighterState::Jumping.allows(FighterState::HitStun));
        assert!(FighterState::FinishHimVictim.allows(FighterState::Knockdown));
        assert!(!FighterState::Knockdown.allows(FighterState::HitStun));
        assert!(!FighterState::FinishHimWinner.allows(FighterState::Knockdown));
        assert!(FighterState::MercyReceiving.allows(FighterState::Knockdown));
        assert!(!FighterState::HitStun.allows(FighterState::Attacking));
    }

    #[test]
    fn finisher_victim_is_hittable_and_winner_is_not() {
        let excluded: Vec<_> = FighterState::iter()
            .filter(|state| state.is_invulnerable())
            .collect();
        assert_eq!(
            excluded,
            [
                FighterState::Knockdown,
                FighterState::Thrown,
                FighterState::MercyReceiving,
                FighterState::FinishHimWinner,
            ]
        );
        assert!(!FighterState::FinishHimVictim.is_invulnerable());
    }

    #[test]
    fn phases_advance_in_order() {
        assert_eq!(MovePhase::Startup.next(), Some(MovePhase::Active));
        assert_eq!(MovePhase::Active.next(), Some(MovePhase::Recovery));
        assert_eq!(MovePhase::Recovery.next(), None);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            "blocking_low".parse::<FighterState>().ok(),
            Some(FighterState::BlockingLow)
        );
        assert_eq!(
            "FINISH_HIM_VICTIM".parse::<FighterState>().ok(),
            Some(FighterState::FinishHimVictim)
        );
    }
}
