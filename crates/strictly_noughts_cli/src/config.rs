//! Game configuration loaded from TOML, with command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Front-end settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Pause before the computer replies, in milliseconds.
    #[serde(default = "default_delay_ms")]
    computer_delay_ms: u64,

    /// Fixed seed for tie-breaks; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Emit JSON render updates instead of a text board.
    #[serde(default)]
    json: bool,
}

fn default_delay_ms() -> u64 {
    500
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            computer_delay_ms: default_delay_ms(),
            seed: None,
            json: false,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file, or defaults if it does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(delay_ms = config.computer_delay_ms, "Config loaded");
        Ok(config)
    }

    /// Applies command-line overrides on top of the file settings.
    pub fn with_overrides(mut self, delay_ms: Option<u64>, seed: Option<u64>, json: bool) -> Self {
        if let Some(delay_ms) = delay_ms {
            self.computer_delay_ms = delay_ms;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self.json |= json;
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
