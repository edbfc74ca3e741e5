//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when a required oracle is missing from the environment.
///
/// These are fatal: a fighter cannot be constructed without all three
/// frame-data tables.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// MoveOracle is not available in the environment.
    #[error("MoveOracle not available")]
    MovesNotAvailable,

    /// ReactionOracle is not available in the environment.
    #[error("ReactionOracle not available")]
    ReactionsNotAvailable,

    /// ThrowOracle is not available in the environment.
    #[error("ThrowOracle not available")]
    ThrowsNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            MovesNotAvailable => "ORACLE_MOVES_NOT_AVAILABLE",
            ReactionsNotAvailable => "ORACLE_REACTIONS_NOT_AVAILABLE",
            ThrowsNotAvailable => "ORACLE_THROWS_NOT_AVAILABLE",
        }
    }
}
