//! Data-driven frame data and tuning for `fighter-core`.
//!
//! This crate houses the shipped arcade content and provides loaders for
//! RON/TOML data files:
//! - Move frame data (data-driven via RON)
//! - Hit reactions (data-driven via RON)
//! - Throws (data-driven via RON)
//! - Fighter tuning (data-driven via TOML)
//!
//! Loaded content backs the read-only oracles of a fighter and never appears
//! in fighter state.

pub mod audit;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use audit::{TableIssue, audit_tables};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, MoveLoader, ReactionLoader, ThrowLoader, builtin_config,
    builtin_tables,
};
