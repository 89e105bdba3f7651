//! Error types for the T3 crate

use thiserror::Error;

use crate::tictactoe::Player;

/// Main error type for the T3 crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("invalid move: position {position} is already occupied")]
    CellOccupied { position: usize },

    #[error("game already over: {winner:?} has won")]
    GameOver { winner: Player },

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("invalid player '{player}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String },

    #[error("invalid command '{input}' (expected 0-8, u, r)")]
    InvalidCommand { input: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// True for the game-rule violations that the engine treats as silent no-ops.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::InvalidPosition { .. }
                | Error::CellOccupied { .. }
                | Error::GameOver { .. }
                | Error::NothingToUndo
        )
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
