//! Game state and its transitions
//!
//! Every transition takes `&GameState` and returns a new `GameState`; the
//! input is never mutated. Rule violations have two faces: the `try_*`
//! methods report them as [`crate::Error`] rejections, while [`GameState::place`]
//! and [`GameState::undo`] treat them as no-ops and hand back an unchanged copy.

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Cell, Player},
    history::{Move, MoveLog},
    lines::{LineAnalyzer, WinResult},
    queue::{MAX_MARKS, MarkQueue},
};
use crate::types::Position;

/// Macro state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No line completed; place and undo are accepted.
    Playing,
    /// A line is complete; only reset is accepted.
    Won,
}

/// Complete state of one game
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    x_marks: MarkQueue,
    o_marks: MarkQueue,
    log: MoveLog,
    current: Player,
    winner: Option<WinResult>,
    first_player: Player,
}

/// Result of an accepted placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub state: GameState,
    pub placed: Move,
    /// The mover's oldest mark, if the placement pushed it off the board.
    pub evicted: Option<Position>,
    pub winner: Option<WinResult>,
}

/// Result of an accepted undo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Undone {
    pub state: GameState,
    pub undone: Move,
}

impl GameState {
    /// Create a new empty game with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    /// Create a new empty game with a specified player to move first.
    ///
    /// ```
    /// use t3::tictactoe::{GameState, Player};
    ///
    /// let game = GameState::new_with_player(Player::O);
    /// assert_eq!(game.current(), Player::O);
    ///
    /// // Reset keeps the configured opener.
    /// let game = game.place(4).reset();
    /// assert_eq!(game.current(), Player::O);
    /// ```
    pub fn new_with_player(first_player: Player) -> Self {
        GameState {
            board: Board::new(),
            x_marks: MarkQueue::new(),
            o_marks: MarkQueue::new(),
            log: MoveLog::new(),
            current: first_player,
            winner: None,
            first_player,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell at `idx`, or `None` if the index is off the board.
    pub fn cell(&self, idx: usize) -> Option<Cell> {
        Position::new(idx).ok().map(|pos| self.board.get(pos))
    }

    /// Player to move. Once the game is won this stays on the winner.
    pub fn current(&self) -> Player {
        self.current
    }

    pub fn first_player(&self) -> Player {
        self.first_player
    }

    pub fn winner(&self) -> Option<&WinResult> {
        self.winner.as_ref()
    }

    pub fn phase(&self) -> Phase {
        if self.winner.is_some() {
            Phase::Won
        } else {
            Phase::Playing
        }
    }

    pub fn is_won(&self) -> bool {
        self.winner.is_some()
    }

    /// The player's live marks, oldest first.
    pub fn marks(&self, player: Player) -> &MarkQueue {
        match player {
            Player::X => &self.x_marks,
            Player::O => &self.o_marks,
        }
    }

    fn marks_mut(&mut self, player: Player) -> &mut MarkQueue {
        match player {
            Player::X => &mut self.x_marks,
            Player::O => &mut self.o_marks,
        }
    }

    /// Placements that undo can still walk back through, oldest first.
    pub fn moves(&self) -> &MoveLog {
        &self.log
    }

    pub fn can_undo(&self) -> bool {
        self.winner.is_none() && !self.log.is_empty()
    }

    /// The mark that disappears if the player to move places again.
    ///
    /// Returns the oldest position of the current player once they hold
    /// [`MAX_MARKS`] marks; `None` otherwise.
    pub fn about_to_vanish(&self) -> Option<Position> {
        let marks = self.marks(self.current);
        if marks.len() >= MAX_MARKS {
            marks.oldest()
        } else {
            None
        }
    }

    /// Place the current player's mark at `idx`.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::GameOver`] if a line is already complete
    /// - [`crate::Error::InvalidPosition`] if `idx` is not 0-8
    /// - [`crate::Error::CellOccupied`] if the cell already holds a mark
    pub fn try_place(&self, idx: usize) -> Result<Placement, crate::Error> {
        if let Some(win) = self.winner {
            return Err(crate::Error::GameOver { winner: win.player });
        }
        let position = Position::new(idx)?;
        if !self.board.is_empty(position) {
            return Err(crate::Error::CellOccupied { position: idx });
        }

        let player = self.current;
        let placed = Move::new(player, position);
        let mut next = self.clone();

        next.board.set(position, player.to_cell());
        next.log.push(placed);
        let evicted = next.marks_mut(player).push(position);
        if let Some(old) = evicted {
            next.board.set(old, Cell::Empty);
            next.log.remove_last_match(Move::new(player, old));
        }

        let winner = LineAnalyzer::find_win(&next.board);
        next.winner = winner;
        if winner.is_none() {
            next.current = player.opponent();
        }

        Ok(Placement {
            state: next,
            placed,
            evicted,
            winner,
        })
    }

    /// Place the current player's mark at `idx`, ignoring illegal requests.
    ///
    /// ```
    /// use t3::tictactoe::{GameState, Player};
    ///
    /// let game = GameState::new().place(4);
    /// assert_eq!(game.current(), Player::O);
    ///
    /// // Occupied and out-of-range cells leave the state untouched.
    /// assert_eq!(game.place(4), game);
    /// assert_eq!(game.place(9), game);
    /// ```
    pub fn place(&self, idx: usize) -> GameState {
        self.try_place(idx)
            .map(|placement| placement.state)
            .unwrap_or_else(|_| self.clone())
    }

    /// Take back the most recent live placement.
    ///
    /// A mark that the undone placement evicted is not restored.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::GameOver`] if a line is complete
    /// - [`crate::Error::NothingToUndo`] if the move log is empty
    pub fn try_undo(&self) -> Result<Undone, crate::Error> {
        if let Some(win) = self.winner {
            return Err(crate::Error::GameOver { winner: win.player });
        }

        let mut next = self.clone();
        let undone = next.log.pop().ok_or(crate::Error::NothingToUndo)?;

        if next.board.get(undone.position) == undone.player.to_cell() {
            next.board.set(undone.position, Cell::Empty);
        }
        next.marks_mut(undone.player).remove_last(undone.position);
        next.current = undone.player;
        next.winner = None;

        Ok(Undone {
            state: next,
            undone,
        })
    }

    /// Take back the most recent live placement, ignoring illegal requests.
    pub fn undo(&self) -> GameState {
        self.try_undo()
            .map(|undone| undone.state)
            .unwrap_or_else(|_| self.clone())
    }

    /// A fresh game with the same opening player.
    pub fn reset(&self) -> GameState {
        Self::new_with_player(self.first_player)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
