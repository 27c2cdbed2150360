//! Match configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who sits at the two seats.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    /// A person at the terminal against the random agent, seats shuffled.
    #[default]
    HumanVsRandom,
    /// Two random agents.
    RandomVsRandom,
}

/// How the series summary is printed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object.
    Json,
}

/// Configuration for a match of one or more games.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct MatchConfig {
    /// Seat assignment.
    #[serde(default)]
    mode: Mode,

    /// Number of games to play.
    #[serde(default = "default_games")]
    games: u32,

    /// RNG seed for seat shuffling and random agents. Random if unset.
    #[serde(default)]
    seed: Option<u64>,

    /// Print the board after every move.
    #[serde(default = "default_render")]
    render: bool,

    /// Summary output format.
    #[serde(default)]
    format: OutputFormat,
}

fn default_games() -> u32 {
    1
}

fn default_render() -> bool {
    true
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            games: default_games(),
            seed: None,
            render: default_render(),
            format: OutputFormat::default(),
        }
    }
}

impl MatchConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(mode = %config.mode, games = config.games, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, else defaults, then layers `overrides` on top
    /// and validates the result.
    #[instrument]
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = config.apply_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Replaces every field that `overrides` sets.
    pub fn apply_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(mode) = overrides.mode {
            self = self.with_mode(mode);
        }
        if let Some(games) = overrides.games {
            self = self.with_games(games);
        }
        if let Some(seed) = overrides.seed {
            self = self.with_seed(Some(seed));
        }
        if let Some(format) = overrides.format {
            self = self.with_format(format);
        }
        if overrides.quiet {
            self = self.with_render(false);
        }
        debug!(config = ?self, "Applied overrides");
        self
    }

    /// Rejects settings no match can run with.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::new("games must be at least 1"));
        }
        Ok(())
    }
}

/// Settings given on the command line, applied over the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Seat assignment.
    pub mode: Option<Mode>,
    /// Number of games.
    pub games: Option<u32>,
    /// RNG seed.
    pub seed: Option<u64>,
    /// Summary format.
    pub format: Option<OutputFormat>,
    /// Suppress board rendering.
    pub quiet: bool,
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = MatchConfig::from_toml("").expect("valid config");
        assert_eq!(config, MatchConfig::default());
        assert_eq!(*config.games(), 1);
        assert!(*config.render());
    }

    #[test]
    fn test_zero_games_rejected() {
        let err = MatchConfig::from_toml("games = 0").unwrap_err();
        assert!(err.message.contains("at least 1"));
    }

    #[test]
    fn test_empty_overrides_keep_file_values() {
        let config = MatchConfig::from_toml("games = 4\nrender = false").expect("valid config");
        let merged = config.clone().apply_overrides(&ConfigOverrides::default());
        assert_eq!(merged, config);
    }

    #[test]
    fn test_setters_override() {
        let config = MatchConfig::default()
            .with_mode(Mode::RandomVsRandom)
            .with_seed(Some(7));
        assert_eq!(*config.mode(), Mode::RandomVsRandom);
        assert_eq!(*config.seed(), Some(7));
    }
}
