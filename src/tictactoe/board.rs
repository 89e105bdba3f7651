//! Board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{CELL_COUNT, Position};

/// A cell on the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    /// Owner of the mark in this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Parse a player token (`x`/`X` or `o`/`O`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPlayerString`] for anything else.
    pub fn parse(token: &str) -> Result<Player, crate::Error> {
        match token.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayerString {
                player: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// The nine cells of the grid, row-major.
///
/// This type implements `Copy` since it's only 9 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Get cell at a position
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.value()]
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.value()] = cell;
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Raw view of all nine cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of cells holding the player's mark.
    pub fn count(&self, player: Player) -> usize {
        let target = player.to_cell();
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Encode board as a 9-character string (`X`, `O`, `.`).
    pub fn encode(&self) -> String {
        self.cells.iter().map(|c| c.to_char()).collect()
    }

    /// Parse the 9-character encoding produced by [`Board::encode`].
    ///
    /// Whitespace is ignored. This does not check whether the board is
    /// reachable through play.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if the string does not
    /// hold exactly nine valid cell characters.
    pub fn decode(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "board '{s}' has {} cells, expected {CELL_COUNT}",
                    chars.len()
                ),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidConfiguration {
                message: format!("invalid character '{c}' at position {i} in '{s}'"),
            })?;
        }
        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                write!(f, "{}", self.cells[row * 3 + col].to_char())?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(i: usize) -> Position {
        Position::new(i).unwrap()
    }

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.encode(), ".........");
    }

    #[test]
    fn test_set_and_count() {
        let mut board = Board::new();
        board.set(pos(0), Cell::X);
        board.set(pos(4), Cell::O);
        board.set(pos(8), Cell::X);

        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 1);
        assert_eq!(board.get(pos(4)).owner(), Some(Player::O));
        assert!(board.is_empty(pos(1)));
    }

    #[test]
    fn test_encode_decode() {
        let board = Board::decode("XO. .X. ..O").unwrap();
        assert_eq!(board.encode(), "XO..X...O");
        assert!(Board::decode("XO").is_err());
        assert!(Board::decode("XOZ......").is_err());
    }

    #[test]
    fn test_display() {
        let board = Board::decode("X...O...X").unwrap();
        assert_eq!(board.to_string(), "X..\n.O.\n..X");
    }

    #[test]
    fn test_player_parse() {
        assert_eq!(Player::parse("x").unwrap(), Player::X);
        assert_eq!(Player::parse(" O ").unwrap(), Player::O);
        assert!(Player::parse("z").is_err());
        assert_eq!(Player::X.opponent(), Player::O);
    }
}
