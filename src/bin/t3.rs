//! T3 CLI - three-mark tic-tac-toe in the terminal
//!
//! This CLI provides:
//! - An interactive game loop (`play`)
//! - Scripted replays with text or JSON output (`replay`)

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "t3")]
#[command(version, about = "Tic-tac-toe where each player keeps at most three marks", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game on stdin/stdout
    Play(t3::cli::commands::play::PlayArgs),

    /// Apply a scripted list of actions and print the result
    Replay(t3::cli::commands::replay::ReplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Play(args) => t3::cli::commands::play::execute(args),
        Commands::Replay(args) => t3::cli::commands::replay::execute(args),
    }
}
