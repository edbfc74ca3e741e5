//! Content factory for building fighter tables from data files.

use std::path::{Path, PathBuf};

use fighter_core::{FighterConfig, FrameDataTables, MoveTable, ReactionTable, ThrowTable};

use crate::audit::audit_tables;
use crate::loaders::{ConfigLoader, LoadResult, MoveLoader, ReactionLoader, ThrowLoader};

/// Content factory that loads all fighter content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── moves.ron
/// ├── reactions.ron
/// └── throws.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load fighter tuning from `config.toml`.
    pub fn load_config(&self) -> LoadResult<FighterConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load move frame data from `moves.ron`.
    pub fn load_moves(&self) -> LoadResult<MoveTable> {
        MoveLoader::load(&self.data_dir.join("moves.ron"))
    }

    /// Load hit reactions from `reactions.ron`.
    pub fn load_reactions(&self) -> LoadResult<ReactionTable> {
        ReactionLoader::load(&self.data_dir.join("reactions.ron"))
    }

    /// Load throws from `throws.ron`.
    pub fn load_throws(&self) -> LoadResult<ThrowTable> {
        ThrowLoader::load(&self.data_dir.join("throws.ron"))
    }

    /// Load all three tables. Gaps found by [`audit_tables`] are logged, not
    /// rejected; a fighter reports them as diagnostics when it needs them.
    pub fn load_tables(&self) -> LoadResult<FrameDataTables> {
        let tables = FrameDataTables::new(
            self.load_moves()?,
            self.load_reactions()?,
            self.load_throws()?,
        );
        for issue in audit_tables(&tables) {
            tracing::warn!(data_dir = %self.data_dir.display(), "{issue}");
        }
        tracing::debug!(
            moves = tables.moves.len(),
            reactions = tables.reactions.len(),
            throws = tables.throws.len(),
            "frame data loaded"
        );
        Ok(tables)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
