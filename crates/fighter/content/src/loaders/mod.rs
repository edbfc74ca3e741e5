//! Content loaders for reading fighter data from files.
//!
//! This module converts RON/TOML files into the table and config types of
//! `fighter-core`. The shipped arcade data is embedded via [`builtin_tables`].

pub mod builtin;
pub mod config;
pub mod factory;
pub mod moves;
pub mod reactions;
pub mod throws;

pub use builtin::{builtin_config, builtin_tables};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use moves::{MoveCatalog, MoveLoader};
pub use reactions::{ReactionCatalog, ReactionLoader};
pub use throws::{ThrowCatalog, ThrowLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
