//! SDK configuration.
//!
//! Configuration can be built in code or read from TOML:
//!
//! ```toml
//! token = "eyJ0eXAi..."
//! game = 10            # numeric game id, or a string game key
//! base_url = "https://susteam.gogo.moe/api"
//! save_dir = "/tmp/susteam"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use susteam_protocol::GameIdentifier;
use susteam_protocol::constants::DEFAULT_BASE_URL;

/// Errors produced while loading or applying configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("token cannot be sent as a bearer header")]
    InvalidToken,

    #[error("cannot build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Settings a [`Client`](crate::Client) is initialized from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdkConfig {
    /// Service root every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token of the player.
    pub token: String,

    /// Game this session acts on.
    pub game: GameIdentifier,

    /// Root of the download cache. Defaults to `<temp dir>/susteam`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_dir: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Default root of the download cache.
pub fn default_save_dir() -> PathBuf {
    std::env::temp_dir().join("susteam")
}

impl SdkConfig {
    /// Creates a configuration against the public service.
    pub fn new(token: impl Into<String>, game: impl Into<GameIdentifier>) -> Self {
        Self {
            base_url: default_base_url(),
            token: token.into(),
            game: game.into(),
            save_dir: None,
        }
    }

    /// Parses a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), game = %config.game, "configuration loaded");
        Ok(config)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = Some(dir.into());
        self
    }

    /// Download cache root, falling back to [`default_save_dir`].
    pub fn resolved_save_dir(&self) -> PathBuf {
        self.save_dir.clone().unwrap_or_else(default_save_dir)
    }
}
