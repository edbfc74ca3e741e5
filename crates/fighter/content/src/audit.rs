//! Consistency checks across the three frame-data tables.
//!
//! A fighter runs with incomplete tables (missing entries surface as
//! diagnostics at the moment they are needed); auditing reports those gaps
//! up front, when content is loaded.

use fighter_core::{
    FrameDataTables, MoveOracle, MoveTag, ReactionOracle, ReactionType, ThrowOracle, ThrowTag,
};
use strum::IntoEnumIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableIssue {
    #[error("no frame data for move {0}")]
    MissingMove(MoveTag),

    #[error("move {0} has no frames and can never start")]
    NotExecutable(MoveTag),

    #[error("move {tag} reacts with {reaction}, which has no reaction entry")]
    UnknownReaction { tag: MoveTag, reaction: ReactionType },

    #[error("no throw data for {0} throw")]
    MissingThrow(ThrowTag),

    #[error("{0} throw escape window outlasts the hold")]
    EscapeOutlastsHold(ThrowTag),
}

/// Lists every gap or inconsistency, in tag order.
pub fn audit_tables(tables: &FrameDataTables) -> Vec<TableIssue> {
    let mut issues = Vec::new();

    for tag in MoveTag::iter() {
        let Some(mv) = tables.moves.try_get_move(tag) else {
            issues.push(TableIssue::MissingMove(tag));
            continue;
        };
        if !mv.is_executable() {
            issues.push(TableIssue::NotExecutable(tag));
        }
        if tables.reactions.try_get_reaction(mv.reaction).is_none() {
            issues.push(TableIssue::UnknownReaction {
                tag,
                reaction: mv.reaction,
            });
        }
    }

    for tag in ThrowTag::iter() {
        match tables.throws.try_get_throw(tag) {
            None => issues.push(TableIssue::MissingThrow(tag)),
            Some(throw) if throw.escape_window > throw.execute => {
                issues.push(TableIssue::EscapeOutlastsHold(tag));
            }
            Some(_) => {}
        }
    }

    issues
}
