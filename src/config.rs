//! Game settings shared by the server and the terminal client.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Board layout and pacing settings.
///
/// Loaded from an optional TOML file; any field left out falls back to
/// the standard 6-pit, 6-stone game. CLI flags override file values.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Pits per side.
    #[serde(default = "default_pits")]
    pits: usize,

    /// Stones seeded into each pit.
    #[serde(default = "default_stones")]
    stones: u32,

    /// Cosmetic pause before each agent move, in milliseconds.
    #[serde(default = "default_agent_delay_ms")]
    agent_delay_ms: u64,
}

fn default_pits() -> usize {
    6
}

fn default_stones() -> u32 {
    6
}

fn default_agent_delay_ms() -> u64 {
    800
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pits: default_pits(),
            stones: default_stones(),
            agent_delay_ms: default_agent_delay_ms(),
        }
    }
}

impl GameConfig {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            pits = config.pits,
            stones = config.stones,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Applies CLI overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        pits: Option<usize>,
        stones: Option<u32>,
        agent_delay_ms: Option<u64>,
    ) -> Self {
        if let Some(pits) = pits {
            self.pits = pits;
        }
        if let Some(stones) = stones {
            self.stones = stones;
        }
        if let Some(delay) = agent_delay_ms {
            self.agent_delay_ms = delay;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
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
