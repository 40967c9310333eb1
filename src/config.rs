//! Loop configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::controller::{Cadence, GameMode};

/// Tunables for the game loop.
///
/// Every key is optional in the TOML file:
///
/// ```toml
/// automatic_cadence_ms = 500
/// human_cadence_ms = 300
/// show_indexed_board = true
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct LoopConfig {
    /// Delay before each automatic move when both seats are automatic.
    #[serde(default = "default_automatic_cadence_ms")]
    automatic_cadence_ms: u64,

    /// Delay before each automatic move when a human is playing.
    #[serde(default = "default_human_cadence_ms")]
    human_cadence_ms: u64,

    /// Whether to render the board overlay labelled with input indices.
    #[serde(default = "default_show_indexed_board")]
    show_indexed_board: bool,

    /// Seed for the automatic player; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_automatic_cadence_ms() -> u64 {
    500
}

fn default_human_cadence_ms() -> u64 {
    300
}

fn default_show_indexed_board() -> bool {
    true
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            automatic_cadence_ms: default_automatic_cadence_ms(),
            human_cadence_ms: default_human_cadence_ms(),
            show_indexed_board: default_show_indexed_board(),
            seed: None,
        }
    }
}

impl LoopConfig {
    /// Creates a configuration with explicit cadences.
    #[instrument]
    pub fn new(automatic_cadence_ms: u64, human_cadence_ms: u64, show_indexed_board: bool) -> Self {
        Self {
            automatic_cadence_ms,
            human_cadence_ms,
            show_indexed_board,
            seed: None,
        }
    }

    /// Returns a copy with the automatic player's seed fixed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns a copy with both cadences set to zero.
    pub fn without_delay(mut self) -> Self {
        self.automatic_cadence_ms = 0;
        self.human_cadence_ms = 0;
        self
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Cadences as durations.
    pub fn cadence(&self) -> Cadence {
        Cadence::new(
            Duration::from_millis(self.automatic_cadence_ms),
            Duration::from_millis(self.human_cadence_ms),
        )
    }

    /// Tick delay for a mode.
    pub fn cadence_for(&self, mode: GameMode) -> Duration {
        self.cadence().for_mode(mode)
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
