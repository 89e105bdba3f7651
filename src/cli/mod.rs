//! CLI infrastructure for the T3 engine
//!
//! This module provides the command-line front end: an interactive game loop
//! and a scripted replay command, both hosted in a [`crate::session::Session`].

pub mod commands;
pub mod config;
pub mod output;
