//! Session hosting for a single live game
//!
//! A [`Session`] owns one [`crate::tictactoe::GameState`], applies user
//! actions to it and publishes every change to its observers.

pub mod game_session;
pub mod observers;

pub use game_session::{Outcome, Session};
pub use observers::{
    JsonlObserver, LogObserver, MetricsHandle, MetricsObserver, MetricsSummary, TranscriptEvent,
    TranscriptRecord,
};

pub use crate::ports::Observer;
