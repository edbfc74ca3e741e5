//! Vector-backed oracle implementations.
//!
//! Tables are small (a dozen entries), so lookups are linear scans. Inserting
//! an entry whose tag already exists replaces it.

use super::{
    Env, FighterEnv, MoveFrameData, MoveOracle, MoveTag, ReactionFrameData, ReactionOracle,
    ReactionType, ThrowData, ThrowOracle, ThrowTag,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveTable {
    entries: Vec<MoveFrameData>,
}

impl MoveTable {
    pub fn new(entries: impl IntoIterator<Item = MoveFrameData>) -> Self {
        let mut table = Self::default();
        for entry in entries {
            table.insert(entry);
        }
        table
    }

    pub fn insert(&mut self, entry: MoveFrameData) {
        match self.entries.iter_mut().find(|e| e.tag == entry.tag) {
            Some(slot) => *slot = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn remove(&mut self, tag: MoveTag) -> Option<MoveFrameData> {
        let idx = self.entries.iter().position(|e| e.tag == tag)?;
        Some(self.entries.remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveFrameData> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MoveOracle for MoveTable {
    fn try_get_move(&self, tag: MoveTag) -> Option<MoveFrameData> {
        self.entries.iter().find(|e| e.tag == tag).copied()
    }
}

impl FromIterator<MoveFrameData> for MoveTable {
    fn from_iter<I: IntoIterator<Item = MoveFrameData>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReactionTable {
    entries: Vec<ReactionFrameData>,
}

impl ReactionTable {
    pub fn new(entries: impl IntoIterator<Item = ReactionFrameData>) -> Self {
        let mut table = Self::default();
        for entry in entries {
            table.insert(entry);
        }
        table
    }

    pub fn insert(&mut self, entry: ReactionFrameData) {
        match self.entries.iter_mut().find(|e| e.kind == entry.kind) {
            Some(slot) => *slot = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn remove(&mut self, kind: ReactionType) -> Option<ReactionFrameData> {
        let idx = self.entries.iter().position(|e| e.kind == kind)?;
        Some(self.entries.remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReactionFrameData> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ReactionOracle for ReactionTable {
    fn try_get_reaction(&self, kind: ReactionType) -> Option<ReactionFrameData> {
        self.entries.iter().find(|e| e.kind == kind).copied()
    }
}

impl FromIterator<ReactionFrameData> for ReactionTable {
    fn from_iter<I: IntoIterator<Item = ReactionFrameData>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThrowTable {
    entries: Vec<ThrowData>,
}

impl ThrowTable {
    pub fn new(entries: impl IntoIterator<Item = ThrowData>) -> Self {
        let mut table = Self::default();
        for entry in entries {
            table.insert(entry);
        }
        table
    }

    pub fn insert(&mut self, entry: ThrowData) {
        match self.entries.iter_mut().find(|e| e.tag == entry.tag) {
            Some(slot) => *slot = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThrowData> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ThrowOracle for ThrowTable {
    fn try_get_throw(&self, tag: ThrowTag) -> Option<ThrowData> {
        self.entries.iter().find(|e| e.tag == tag).copied()
    }
}

impl FromIterator<ThrowData> for ThrowTable {
    fn from_iter<I: IntoIterator<Item = ThrowData>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Owns all three tables so a single value can back a [`FighterEnv`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameDataTables {
    pub moves: MoveTable,
    pub reactions: ReactionTable,
    pub throws: ThrowTable,
}

impl FrameDataTables {
    pub fn new(moves: MoveTable, reactions: ReactionTable, throws: ThrowTable) -> Self {
        Self {
            moves,
            reactions,
            throws,
        }
    }

    pub fn env(&self) -> FighterEnv<'_> {
        Env::with_all(&self.moves, &self.reactions, &self.throws).into_fighter_env()
    }
}
