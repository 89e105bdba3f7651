//! Ports (trait boundaries) for external dependencies.
//!
//! The session publishes what happens to a game through these traits;
//! adapters decide where the events go.

pub mod observer;

pub use observer::Observer;
