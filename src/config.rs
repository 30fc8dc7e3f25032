//! Session configuration, read from TOML.
//!
//! Every field is optional; anything missing falls back to the arcade defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::constants::timing::DEFAULT_INTRO_FRAMES;
use crate::constants::STARTING_LIVES;
use crate::error::{ConfigError, GameResult};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Round the session starts on. Later rounds are faster and shorten the fright window.
    pub starting_round: u32,
    /// Spare lives; the game ends once a death takes this below zero.
    pub starting_lives: i32,
    /// Frames of the "ready" pause before play begins, both at round start and after a death.
    pub intro_frames: u32,
    /// Seed of the frightened-ghost direction sampler.
    pub rng_seed: u64,
    /// High score carried over from an earlier session.
    pub high_score: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            starting_round: 1,
            starting_lives: STARTING_LIVES,
            intro_frames: DEFAULT_INTRO_FRAMES,
            rng_seed: 0,
            high_score: 0,
        }
    }
}

impl SimConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the configuration at `path`.
    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        debug!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_round == 0 {
            return Err(ConfigError::Invalid("starting_round must be at least 1".to_string()));
        }
        if self.starting_lives < 0 {
            return Err(ConfigError::Invalid(format!(
                "starting_lives must not be negative, got {}",
                self.starting_lives
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(SimConfig::from_toml_str("").unwrap(), SimConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = SimConfig::from_toml_str("starting_round = 5\nrng_seed = 99\n").unwrap();
        assert_eq!(config.starting_round, 5);
        assert_eq!(config.rng_seed, 99);
        assert_eq!(config.intro_frames, DEFAULT_INTRO_FRAMES);
    }

    #[test]
    fn test_rejects_round_zero() {
        assert!(matches!(
            SimConfig::from_toml_str("starting_round = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(matches!(SimConfig::from_toml_str("lives = 3"), Err(ConfigError::Parse(_))));
    }
}
