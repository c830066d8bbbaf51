//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default location of the config file.
pub const DEFAULT_CONFIG_PATH: &str = "tac_toe.toml";

/// Settings for the console game and the simulator.
///
/// Every field has a default, so a partial (or empty) file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Input line that asks the AI to move.
    ai_command: String,

    /// Input line that ends the game.
    quit_command: String,

    /// Prompt printed before reading a line.
    prompt: String,

    /// Seed for the random AI; unseeded when absent.
    seed: Option<u64>,

    /// Number of games `simulate` plays when not given on the command line.
    simulation_games: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ai_command: "AI".to_string(),
            quit_command: "exit".to_string(),
            prompt: "> ".to_string(),
            seed: None,
            simulation_games: 100_000,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file and validates it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from a file, falling back to defaults when the
    /// file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with the seed replaced, when one is given.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Checks that the commands can be told apart from each other and from
    /// a coordinate, and that the simulator has work to do.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, command) in [
            ("ai_command", &self.ai_command),
            ("quit_command", &self.quit_command),
        ] {
            if command.trim().is_empty() {
                return Err(ConfigError::new(format!("{name} must not be empty")));
            }
            if command.trim() != command {
                return Err(ConfigError::new(format!(
                    "{name} must not have surrounding whitespace"
                )));
            }
            if command.contains(',') {
                return Err(ConfigError::new(format!("{name} must not contain ','")));
            }
        }
        if self.ai_command == self.quit_command {
            return Err(ConfigError::new(
                "ai_command and quit_command must differ".to_string(),
            ));
        }
        if self.simulation_games == 0 {
            return Err(ConfigError::new(
                "simulation_games must be > 0".to_string(),
            ));
        }
        Ok(())
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
