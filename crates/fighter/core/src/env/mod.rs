//! Traits describing read-only frame data.
//!
//! Oracles expose move, reaction and throw tables. The [`Env`] aggregate
//! bundles them so a fighter can access everything it needs without hard
//! coupling to concrete implementations.
mod error;
mod moves;
mod reactions;
mod tables;
mod throws;

pub use error::OracleError;
pub use moves::{AttackPower, MoveFrameData, MoveOracle, MoveTag};
pub use reactions::{ReactionFrameData, ReactionOracle, ReactionType};
pub use tables::{FrameDataTables, MoveTable, ReactionTable, ThrowTable};
pub use throws::{ThrowData, ThrowOracle, ThrowTag};

/// Aggregates the read-only oracles a fighter consults every step.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, M, R, T>
where
    M: MoveOracle + ?Sized,
    R: ReactionOracle + ?Sized,
    T: ThrowOracle + ?Sized,
{
    moves: Option<&'a M>,
    reactions: Option<&'a R>,
    throws: Option<&'a T>,
}

pub type FighterEnv<'a> =
    Env<'a, dyn MoveOracle + 'a, dyn ReactionOracle + 'a, dyn ThrowOracle + 'a>;

impl<'a, M, R, T> Env<'a, M, R, T>
where
    M: MoveOracle + ?Sized,
    R: ReactionOracle + ?Sized,
    T: ThrowOracle + ?Sized,
{
    pub fn new(moves: Option<&'a M>, reactions: Option<&'a R>, throws: Option<&'a T>) -> Self {
        Self {
            moves,
            reactions,
            throws,
        }
    }

    pub fn with_all(moves: &'a M, reactions: &'a R, throws: &'a T) -> Self {
        Self::new(Some(moves), Some(reactions), Some(throws))
    }

    pub fn empty() -> Self {
        Self {
            moves: None,
            reactions: None,
            throws: None,
        }
    }

    /// Returns the MoveOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MovesNotAvailable` if no move oracle was provided.
    pub fn moves(&self) -> Result<&'a M, OracleError> {
        self.moves.ok_or(OracleError::MovesNotAvailable)
    }

    /// Returns the ReactionOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ReactionsNotAvailable` if no reaction oracle was provided.
    pub fn reactions(&self) -> Result<&'a R, OracleError> {
        self.reactions.ok_or(OracleError::ReactionsNotAvailable)
    }

    /// Returns the ThrowOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ThrowsNotAvailable` if no throw oracle was provided.
    pub fn throws(&self) -> Result<&'a T, OracleError> {
        self.throws.ok_or(OracleError::ThrowsNotAvailable)
    }
}

impl<'a, M, R, T> Env<'a, M, R, T>
where
    M: MoveOracle + 'a,
    R: ReactionOracle + 'a,
    T: ThrowOracle + 'a,
{
    /// Converts this environment into a trait-object based `FighterEnv` (consumes self).
    pub fn into_fighter_env(self) -> FighterEnv<'a> {
        let moves: Option<&'a dyn MoveOracle> = self.moves.map(|moves| moves as _);
        let reactions: Option<&'a dyn ReactionOracle> =
            self.reactions.map(|reactions| reactions as _);
        let throws: Option<&'a dyn ThrowOracle> = self.throws.map(|throws| throws as _);
        Env::new(moves, reactions, throws)
    }
}
