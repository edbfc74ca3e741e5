//! Throw data loader.

use std::path::Path;

use fighter_core::{ThrowData, ThrowTable};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Throw catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThrowCatalog {
    pub throws: Vec<ThrowData>,
}

/// Loader for throws from RON files.
pub struct ThrowLoader;

impl ThrowLoader {
    pub fn load(path: &Path) -> LoadResult<ThrowTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ThrowTable> {
        let catalog: ThrowCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse throw catalog RON: {}", e))?;
        Ok(ThrowTable::new(catalog.throws))
    }
}
