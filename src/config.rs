//! Runtime configuration loaded from TOML and the environment.

use derive_getters::Getters;
use derive_more::{Display, Error};
use phee_core::DEFAULT_IMAGES_DIR;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable overriding [`PheeConfig::data_url`].
pub const DATA_URL_ENV: &str = "SUPABASE_URL";

/// Environment variable holding the data-service access key.
pub const DATA_KEY_ENV: &str = "SUPABASE_KEY";

/// Game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PheeConfig {
    /// Base URL of the hosted data service.
    #[serde(default)]
    data_url: Option<String>,

    /// Table holding the roster.
    #[serde(default = "default_players_table")]
    players_table: String,

    /// JSON roster file, used instead of the data service when set.
    #[serde(default)]
    roster_file: Option<PathBuf>,

    /// Where tracing output goes while the terminal UI is running.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Root path of the player images.
    #[serde(default = "default_images_dir")]
    images_dir: String,
}

#[instrument]
fn default_players_table() -> String {
    "players".to_string()
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("phee.log")
}

#[instrument]
fn default_images_dir() -> String {
    DEFAULT_IMAGES_DIR.to_string()
}

impl Default for PheeConfig {
    fn default() -> Self {
        Self {
            data_url: None,
            players_table: default_players_table(),
            roster_file: None,
            log_file: default_log_file(),
            images_dir: default_images_dir(),
        }
    }
}

impl PheeConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(players_table = %config.players_table, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies environment overrides.
    #[instrument(skip(self))]
    pub fn with_env(mut self) -> Self {
        if let Ok(url) = std::env::var(DATA_URL_ENV) {
            debug!(url = %url, "Data service URL taken from environment");
            self.data_url = Some(url);
        }
        self
    }

    /// Overrides the roster file.
    pub fn with_roster_file(mut self, path: PathBuf) -> Self {
        self.roster_file = Some(path);
        self
    }

    /// Overrides the data service URL.
    pub fn with_data_url(mut self, url: impl Into<String>) -> Self {
        self.data_url = Some(url.into());
        self
    }

    /// Reads the data-service access key from the environment.
    #[instrument(skip(self))]
    pub fn data_key(&self) -> Result<String, ConfigError> {
        std::env::var(DATA_KEY_ENV).map_err(|_| {
            ConfigError::new(format!("{} environment variable not set", DATA_KEY_ENV))
        })
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
