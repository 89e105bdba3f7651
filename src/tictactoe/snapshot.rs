//! Read-only view handed to presentation layers

use serde::{Deserialize, Serialize};

use super::{GameState, Phase, Player, WinResult};

/// Everything a front end needs to draw a game without knowing the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Nine-character board encoding, row-major (`X`, `O`, `.`).
    pub board: String,
    pub phase: Phase,
    /// Player to move; `None` once the game is won.
    pub to_move: Option<Player>,
    /// X's live marks, oldest first.
    pub x_marks: Vec<usize>,
    /// O's live marks, oldest first.
    pub o_marks: Vec<usize>,
    pub winner: Option<WinResult>,
    /// Cell that vanishes if the player to move places again.
    pub about_to_vanish: Option<usize>,
    /// Number of placements undo can still take back.
    pub undo_depth: usize,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        let indices = |player: Player| -> Vec<usize> {
            self.marks(player).iter().map(|p| p.value()).collect()
        };
        Snapshot {
            board: self.board().encode(),
            phase: self.phase(),
            to_move: (!self.is_won()).then_some(self.current()),
            x_marks: indices(Player::X),
            o_marks: indices(Player::O),
            winner: self.winner().copied(),
            about_to_vanish: self.about_to_vanish().map(|p| p.value()),
            undo_depth: if self.can_undo() { self.moves().len() } else { 0 },
        }
    }
}
