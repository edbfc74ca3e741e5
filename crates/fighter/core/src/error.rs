//! Common error infrastructure for fighter-core.
//!
//! Every error enum in the crate implements [`GameError`] so the round
//! director can route failures by severity without matching on concrete
//! types. Domain-specific errors (e.g. `MercyError`) live next to the
//! operations that produce them.

use crate::config::ConfigError;
use crate::env::{MoveTag, OracleError, ReactionType, ThrowTag};

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the core continued with a fallback value
/// - **Validation**: a request was rejected and nothing changed
/// - **Internal**: unexpected state inconsistency
/// - **Fatal**: the core cannot be constructed or cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Continued with a fallback.
    ///
    /// Examples: missing reaction entry, hit-stun defaulted
    Recoverable,

    /// Rejected without side effects.
    ///
    /// Examples: missing move entry, mercy requested outside its window
    Validation,

    /// Unexpected state inconsistency.
    Internal,

    /// Unrecoverable.
    ///
    /// Examples: missing required oracle, invalid configuration
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all fighter-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are SCREAMING_SNAKE_CASE and stable across releases
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Failures raised by a [`FighterCore`](crate::FighterCore).
///
/// Only `Oracle` and `Config` are ever returned as `Err`; the remaining
/// variants are recorded as diagnostics while the step carries on.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FighterError {
    /// Initiation was dropped; the button edge is consumed.
    #[error("no frame data for move {0}")]
    MissingMoveData(MoveTag),

    /// Throw initiation was dropped; the button edges are consumed.
    #[error("no frame data for throw {0}")]
    MissingThrowData(ThrowTag),

    /// Hit-stun fell back to the configured default.
    #[error("no frame data for reaction {0}")]
    MissingReactionData(ReactionType),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("invalid fighter config: {0}")]
    Config(#[from] ConfigError),
}

impl GameError for FighterError {
    fn severity(&self) -> ErrorSeverity {
        use FighterError::*;
        match self {
            MissingMoveData(_) | MissingThrowData(_) => ErrorSeverity::Validation,
            MissingReactionData(_) => ErrorSeverity::Recoverable,
            Oracle(err) => err.severity(),
            Config(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use FighterError::*;
        match self {
            MissingMoveData(_) => "FIGHTER_MISSING_MOVE_DATA",
            MissingThrowData(_) => "FIGHTER_MISSING_THROW_DATA",
            MissingReactionData(_) => "FIGHTER_MISSING_REACTION_DATA",
            Oracle(err) => err.error_code(),
            Config(err) => err.error_code(),
        }
    }
}
