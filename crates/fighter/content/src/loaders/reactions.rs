//! Hit reaction loader.

use std::path::Path;

use fighter_core::{ReactionFrameData, ReactionTable};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Reaction catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionCatalog {
    pub reactions: Vec<ReactionFrameData>,
}

/// Loader for hit reactions from RON files.
pub struct ReactionLoader;

impl ReactionLoader {
    pub fn load(path: &Path) -> LoadResult<ReactionTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ReactionTable> {
        let catalog: ReactionCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse reaction catalog RON: {}", e))?;
        Ok(ReactionTable::new(catalog.reactions))
    }
}
