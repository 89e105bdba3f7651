//! Shared configuration flags for CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Args;

use crate::{config::SessionConfig, tictactoe::Player};

/// Session flags shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Which token opens each game (`x` or `o`)
    #[arg(long = "first-player")]
    pub first_player: Option<String>,

    /// Write a JSON Lines transcript of the session to this file
    #[arg(long)]
    pub transcript: Option<PathBuf>,

    /// Load session settings from a JSON file; flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl SessionArgs {
    /// Merge the optional config file with the command-line flags.
    pub fn resolve(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SessionConfig::default(),
        };

        if let Some(value) = &self.first_player {
            config.first_player = parse_player_token(value, "--first-player")?;
        }
        if let Some(path) = &self.transcript {
            config.transcript = Some(path.clone());
        }
        Ok(config)
    }
}

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "player1" | "p1" => Ok(Player::X),
        "o" | "second" | "player2" | "p2" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_player_token() {
        assert_eq!(parse_player_token("X", "--first-player").unwrap(), Player::X);
        assert_eq!(parse_player_token("p2", "--first-player").unwrap(), Player::O);
        let err = parse_player_token("z", "--first-player").unwrap_err();
        assert!(err.to_string().contains("--first-player"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"first_player":"O","log_events":false}}"#).unwrap();

        let args = SessionArgs {
            first_player: Some("x".to_string()),
            transcript: None,
            config: Some(file.path().to_path_buf()),
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.first_player, Player::X);
        assert!(!config.log_events);
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = SessionArgs::default().resolve().unwrap();
        assert_eq!(config, SessionConfig::default());
    }
}
