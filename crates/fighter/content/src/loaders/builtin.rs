//! Arcade content embedded at build time.

use fighter_core::{FighterConfig, FrameDataTables};

use crate::loaders::{ConfigLoader, LoadResult, MoveLoader, ReactionLoader, ThrowLoader};

/// Parses the shipped arcade frame data.
pub fn builtin_tables() -> LoadResult<FrameDataTables> {
    let moves = MoveLoader::parse(include_str!("../../data/moves.ron"))
        .map_err(|e| anyhow::anyhow!("builtin moves.ron: {}", e))?;
    let reactions = ReactionLoader::parse(include_str!("../../data/reactions.ron"))
        .map_err(|e| anyhow::anyhow!("builtin reactions.ron: {}", e))?;
    let throws = ThrowLoader::parse(include_str!("../../data/throws.ron"))
        .map_err(|e| anyhow::anyhow!("builtin throws.ron: {}", e))?;
    Ok(FrameDataTables::new(moves, reactions, throws))
}

/// Parses the shipped arcade tuning.
pub fn builtin_config() -> LoadResult<FighterConfig> {
    ConfigLoader::parse(include_str!("../../data/config.toml"))
        .map_err(|e| anyhow::anyhow!("builtin config.toml: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit_tables;
    use fighter_core::{MoveOracle, MoveTag, ReactionOracle, ReactionType, ThrowOracle, ThrowTag};

    #[test]
    fn builtin_tables_are_complete() {
        let tables = builtin_tables().expect("builtin data parses");
        assert!(audit_tables(&tables).is_empty());

        let hp = tables.moves.try_get_move(MoveTag::HighPunch).unwrap();
        assert_eq!(hp.total_frames(), 17);
        let sweep = tables.moves.try_get_move(MoveTag::SweepKick).unwrap();
        assert!(sweep.knockdown);
        let popup = tables.reactions.try_get_reaction(ReactionType::Popup).unwrap();
        assert_eq!(popup.hit_stun, 16);
        let reverse = tables.throws.try_get_throw(ThrowTag::Reverse).unwrap();
        assert!(reverse.toss.x < 0.0);
    }

    #[test]
    fn builtin_config_matches_defaults() {
        assert_eq!(builtin_config().unwrap(), FighterConfig::default());
    }
}
