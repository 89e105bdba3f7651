//! Reducer interface: `(state, action) -> state`

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{GameState, Move, WinResult};
use crate::types::Position;

/// A user request against a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "position", rename_all = "lowercase")]
pub enum Action {
    /// Place the current player's mark. The index is validated when applied.
    Place(usize),
    Undo,
    Reset,
}

impl FromStr for Action {
    type Err = crate::Error;

    /// Parse a command token: `0`-`8`, `u`/`undo`, `r`/`reset`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token.to_ascii_lowercase().as_str() {
            "u" | "undo" => Ok(Action::Undo),
            "r" | "reset" => Ok(Action::Reset),
            other => other
                .parse::<usize>()
                .map(Action::Place)
                .map_err(|_| crate::Error::InvalidCommand {
                    input: token.to_string(),
                }),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Place(idx) => write!(f, "place {idx}"),
            Action::Undo => write!(f, "undo"),
            Action::Reset => write!(f, "reset"),
        }
    }
}

/// What an accepted action changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Placed {
        placed: Move,
        evicted: Option<Position>,
        winner: Option<WinResult>,
    },
    Undone {
        undone: Move,
    },
    Reset,
}

/// Outcome of applying an accepted action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: GameState,
    pub event: Event,
}

impl GameState {
    /// Apply an action, reporting rule violations as rejections.
    ///
    /// Reset is always accepted.
    pub fn try_apply(&self, action: Action) -> Result<Step, crate::Error> {
        match action {
            Action::Place(idx) => self.try_place(idx).map(|p| Step {
                state: p.state,
                event: Event::Placed {
                    placed: p.placed,
                    evicted: p.evicted,
                    winner: p.winner,
                },
            }),
            Action::Undo => self.try_undo().map(|u| Step {
                state: u.state,
                event: Event::Undone { undone: u.undone },
            }),
            Action::Reset => Ok(Step {
                state: self.reset(),
                event: Event::Reset,
            }),
        }
    }

    /// Apply an action; rejected actions return an unchanged copy.
    ///
    /// ```
    /// use t3::tictactoe::{Action, GameState, Player};
    ///
    /// let actions = [Action::Place(0), Action::Place(3), Action::Undo];
    /// let state = actions
    ///     .into_iter()
    ///     .fold(GameState::new(), |state, action| state.apply(action));
    /// assert_eq!(state.current(), Player::O);
    /// assert_eq!(state.moves().len(), 1);
    /// ```
    pub fn apply(&self, action: Action) -> GameState {
        self.try_apply(action)
            .map(|step| step.state)
            .unwrap_or_else(|_| self.clone())
    }
}
