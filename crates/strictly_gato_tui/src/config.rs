//! Player-facing configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GatoConfig {
    /// File the game is saved to between runs.
    #[serde(default = "default_storage_path")]
    storage_path: PathBuf,

    /// File the TUI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Ticks the win celebration stays on screen.
    #[serde(default = "default_celebration_frames")]
    celebration_frames: u16,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("strictly_gato_save.json")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_gato.log")
}

fn default_celebration_frames() -> u16 {
    30
}

impl Default for GatoConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
            log_file: default_log_file(),
            celebration_frames: default_celebration_frames(),
        }
    }
}

impl GatoConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(storage = %config.storage_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file when it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the saved-game path.
    pub fn with_storage_path(mut self, path: PathBuf) -> Self {
        self.storage_path = path;
        self
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
