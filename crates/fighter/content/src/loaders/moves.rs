//! Move frame data loader.

use std::path::Path;

use fighter_core::{MoveFrameData, MoveTable};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Move catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveCatalog {
    pub moves: Vec<MoveFrameData>,
}

/// Loader for move frame data from RON files.
pub struct MoveLoader;

impl MoveLoader {
    /// Load a move table from a RON file.
    ///
    /// Later entries replace earlier ones with the same tag.
    pub fn load(path: &Path) -> LoadResult<MoveTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<MoveTable> {
        let catalog: MoveCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse move catalog RON: {}", e))?;
        Ok(MoveTable::new(catalog.moves))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fighter_core::{AttackPower, MoveOracle, MoveTag, ReactionType};

    #[test]
    fn optional_fields_default() {
        let table = MoveLoader::parse(
            "(moves: [(tag: LowPunch, startup: 3, active: 3, recovery: 8, damage: 4)])",
        )
        .unwrap();
        let mv = table.try_get_move(MoveTag::LowPunch).unwrap();
        assert_eq!(mv.reaction, ReactionType::None);
        assert_eq!(mv.power, AttackPower::Light);
        assert!(!mv.knockdown && !mv.unblockable && !mv.no_chip);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = MoveLoader::parse(
            "(moves: [(tag: Fireball, startup: 3, active: 3, recovery: 8, damage: 4)])",
        )
        .unwrap_err();
        assert!(err.to_string().contains("move catalog"));
    }
}
