//! T3: tic-tac-toe where each player keeps at most three marks
//!
//! This crate provides:
//! - The game engine: board, per-player mark windows, move log, win detection, undo
//! - A reducer interface (`GameState` + `Action` -> `GameState`)
//! - Sessions that own one live game and publish events to observers
//! - Observers for logging, JSON Lines transcripts and counters
//! - The `t3` command-line front end
//!
//! ```
//! use t3::tictactoe::{GameState, Player};
//!
//! let game = [0, 3, 1, 4, 2]
//!     .into_iter()
//!     .fold(GameState::new(), |game, idx| game.place(idx));
//!
//! let win = game.winner().expect("top row is complete");
//! assert_eq!(win.player, Player::X);
//! assert_eq!(win.cells, [0, 1, 2]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod ports;
pub mod session;
pub mod tictactoe;
pub mod types;

pub use config::SessionConfig;
pub use error::{Error, Result};
pub use session::{Outcome, Session};
pub use tictactoe::{Action, GameState, Player, Snapshot, WinResult};
pub use types::Position;
