//! Deterministic per-fighter combat simulation.
//!
//! `fighter-core` turns one [`InputSnapshot`] per fixed step into movement,
//! attack phases, hit/block reactions, a stamina meter and mercy/finisher
//! signaling. Frame data comes from read-only oracles bundled in an [`Env`];
//! all mutation of a fighter flows through [`FighterCore`].
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod fighter;
pub mod input;
pub mod meter;
pub mod sim;
pub mod state;
pub mod timer;

pub use combat::HitOutcome;
pub use config::{CombatConfig, ConfigError, FighterConfig, MercyConfig, MeterConfig, MovementConfig};
pub use env::{
    AttackPower, Env, FighterEnv, FrameDataTables, MoveFrameData, MoveOracle, MoveTable, MoveTag,
    OracleError, ReactionFrameData, ReactionOracle, ReactionTable, ReactionType, ThrowData,
    ThrowOracle, ThrowTable, ThrowTag,
};
pub use error::{ErrorSeverity, FighterError, GameError};
pub use fighter::{Diagnostics, FighterCore, MercyError};
pub use input::{Controls, InputBuffer, InputSnapshot};
pub use meter::{MeterChange, RunMeter};
pub use sim::{SimError, SimHarness, face_each_other};
pub use state::{FighterState, MovePhase};
pub use timer::Countdown;

pub use glam::Vec2;
