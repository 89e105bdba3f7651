//! Winning line analysis

use serde::{Deserialize, Serialize};

use super::{Board, Player};
use crate::types::Position;

/// Winning line indices on the 3x3 board, in the order they are checked
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// A completed line: the winner and the three cells that form it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    pub player: Player,
    pub cells: [usize; 3],
}

impl WinResult {
    /// Whether the given position is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos.value())
    }
}

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First complete line on the board, scanning [`WINNING_LINES`] in order.
    ///
    /// Both players are considered; a line counts when all three cells hold
    /// the same mark.
    pub fn find_win(board: &Board) -> Option<WinResult> {
        let cells = board.cells();
        WINNING_LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            let owner = cells[a].owner()?;
            (cells[a] == cells[b] && cells[a] == cells[c]).then_some(WinResult {
                player: owner,
                cells: line,
            })
        })
    }

    /// Check if a player has three in a row
    pub fn has_won(board: &Board, player: Player) -> bool {
        let target = player.to_cell();
        let cells = board.cells();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_win_horizontal() {
        let board = Board::decode("XXX......").unwrap();
        let win = LineAnalyzer::find_win(&board).unwrap();
        assert_eq!(win.player, Player::X);
        assert_eq!(win.cells, [0, 1, 2]);
        assert!(LineAnalyzer::has_won(&board, Player::X));
        assert!(!LineAnalyzer::has_won(&board, Player::O));
    }

    #[test]
    fn test_find_win_vertical() {
        let board = Board::decode(".O..O..O.").unwrap();
        let win = LineAnalyzer::find_win(&board).unwrap();
        assert_eq!(win.player, Player::O);
        assert_eq!(win.cells, [1, 4, 7]);
    }

    #[test]
    fn test_find_win_anti_diagonal() {
        let board = Board::decode("..X.X.X..").unwrap();
        let win = LineAnalyzer::find_win(&board).unwrap();
        assert_eq!(win.cells, [2, 4, 6]);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            let mut encoded = ['.'; 9];
            for idx in line {
                encoded[idx] = 'O';
            }
            let board = Board::decode(&encoded.iter().collect::<String>()).unwrap();
            let win = LineAnalyzer::find_win(&board).unwrap();
            assert_eq!(win.player, Player::O);
            assert_eq!(win.cells, line);
        }
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // X X X
        // X . .
        // X . .
        let board = Board::decode("XXXX..X..").unwrap();
        let win = LineAnalyzer::find_win(&board).unwrap();
        assert_eq!(win.cells, [0, 1, 2]);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::decode("XOX.O.OXO").unwrap();
        assert_eq!(LineAnalyzer::find_win(&board), None);
    }

    #[test]
    fn test_win_contains() {
        let win = WinResult {
            player: Player::X,
            cells: [0, 4, 8],
        };
        assert!(win.contains(Position::new(4).unwrap()));
        assert!(!win.contains(Position::new(5).unwrap()));
    }
}
