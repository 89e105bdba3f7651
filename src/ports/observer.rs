//! Observer port - abstraction for watching a game session
//!
//! This port defines the interface for observing session events, so that
//! logging, transcripts and counters can be attached to a session without the
//! session knowing about any output format.

use crate::{
    Error, Result,
    tictactoe::{Action, GameState, Move, WinResult},
    types::Position,
};

/// Observer trait for monitoring a session
///
/// # Event Sequence
///
/// 1. `on_session_start(state)` - once, with the initial state
/// 2. For each dispatched action, exactly one of:
///    - `on_placed(...)`, followed by `on_win(...)` if the placement completed a line
///    - `on_undone(...)`
///    - `on_reset(...)`
///    - `on_ignored(...)` when the engine rejected the action
/// 3. `on_session_end(state)` - once, with the final state
///
/// Every state passed in is the state *after* the event.
///
/// # Examples
///
/// ```no_run
/// use t3::{ports::Observer, tictactoe::{GameState, WinResult}};
///
/// struct WinCounter {
///     wins: usize,
/// }
///
/// impl Observer for WinCounter {
///     fn on_win(&mut self, _state: &GameState, _win: &WinResult) -> t3::Result<()> {
///         self.wins += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called once, before the first event of the session.
    fn on_session_start(&mut self, _state: &GameState) -> Result<()> {
        Ok(())
    }

    /// Called after a mark is placed.
    ///
    /// # Parameters
    ///
    /// * `state` - State after the placement
    /// * `placed` - The move that was made
    /// * `evicted` - The mover's oldest mark, if it was removed to make room
    fn on_placed(
        &mut self,
        _state: &GameState,
        _placed: Move,
        _evicted: Option<Position>,
    ) -> Result<()> {
        Ok(())
    }

    /// Called after a placement completes a line.
    fn on_win(&mut self, _state: &GameState, _win: &WinResult) -> Result<()> {
        Ok(())
    }

    /// Called after the most recent placement is taken back.
    fn on_undone(&mut self, _state: &GameState, _undone: Move) -> Result<()> {
        Ok(())
    }

    /// Called after the game is reset.
    fn on_reset(&mut self, _state: &GameState) -> Result<()> {
        Ok(())
    }

    /// Called when the engine rejects an action; the state is unchanged.
    fn on_ignored(&mut self, _state: &GameState, _action: Action, _reason: &Error) -> Result<()> {
        Ok(())
    }

    /// Called once when the session is finished.
    ///
    /// Use this to flush outputs or report summaries.
    fn on_session_end(&mut self, _state: &GameState) -> Result<()> {
        Ok(())
    }
}
