//! Three-mark tic-tac-toe engine
//!
//! Each player keeps at most [`MAX_MARKS`] marks on the board; a further
//! placement removes that player's oldest mark. States are plain values and
//! every transition returns a new one.

pub mod action;
pub mod board;
pub mod game;
pub mod history;
pub mod lines;
pub mod queue;
pub mod snapshot;

pub use action::{Action, Event, Step};
pub use board::{Board, Cell, Player};
pub use game::{GameState, Phase, Placement, Undone};
pub use history::{Move, MoveLog};
pub use lines::{LineAnalyzer, WINNING_LINES, WinResult};
pub use queue::{MAX_MARKS, MarkQueue};
pub use snapshot::Snapshot;
