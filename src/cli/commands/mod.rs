//! Subcommands of the `t3` binary

pub mod play;
pub mod replay;
