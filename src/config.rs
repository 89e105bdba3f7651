//! Session configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, tictactoe::Player};

/// Configuration for creating a [`crate::session::Session`].
///
/// Builder-style in code, or loaded from a JSON file where every field is
/// optional:
///
/// ```json
/// { "first_player": "O", "transcript": "game.jsonl", "log_events": false }
/// ```
///
/// # Examples
///
/// ```
/// use t3::{config::SessionConfig, tictactoe::Player};
///
/// let config = SessionConfig::default()
///     .with_first_player(Player::O)
///     .with_log_events(false);
/// assert_eq!(config.first_player, Player::O);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Player who opens every game of the session, including after reset
    pub first_player: Player,
    /// Where to write a JSON Lines transcript, if anywhere
    pub transcript: Option<PathBuf>,
    /// Whether to attach the `log`-backed observer
    pub log_events: bool,
}

impl SessionConfig {
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    pub fn with_transcript<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.transcript = Some(path.into());
        self
    }

    pub fn with_log_events(mut self, enabled: bool) -> Self {
        self.log_events = enabled;
        self
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        let config: SessionConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values that serde cannot rule out.
    pub fn validate(&self) -> Result<()> {
        if self
            .transcript
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(Error::InvalidConfiguration {
                message: "transcript path must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            first_player: Player::X,
            transcript: None,
            log_events: true,
        }
    }
}
