//! Centralized error types for the simulation.
//!
//! The simulation itself never fails once its assets are loaded; every error here
//! originates while loading the maze, the pellet layout or the configuration.

use std::io;

/// Main error type for the simulation.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(&'static str),

    #[error("Asset {name} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        name: &'static str,
        #[source]
        source: std::str::Utf8Error,
    },
}

/// Error type for maze and pellet description parsing.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character {character:?} at row {row}, column {column}")]
    UnknownCharacter { character: char, row: usize, column: usize },
    #[error("The {0} description contains no rows")]
    Empty(&'static str),
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for simulation operations.
pub type GameResult<T> = Result<T, GameError>;
