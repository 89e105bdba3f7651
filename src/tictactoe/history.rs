//! Move log backing undo

use super::Player;
use crate::types::Position;

/// A single placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub player: Player,
    pub position: Position,
}

impl Move {
    pub fn new(player: Player, position: Position) -> Self {
        Move { player, position }
    }
}

/// Chronological record of placements that are still live for undo.
///
/// Entries are appended on placement, popped on undo, and removed by match
/// when the mark they describe is evicted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    /// Remove the most recent entry equal to `mv`.
    ///
    /// Only one entry is removed even if stale duplicates exist.
    pub fn remove_last_match(&mut self, mv: Move) -> Option<Move> {
        let idx = self.moves.iter().rposition(|m| *m == mv)?;
        Some(self.moves.remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}
