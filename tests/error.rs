use maze_chase::config::SimConfig;
use maze_chase::error::{AssetError, ConfigError, GameError, ParseError};
use maze_chase::map::TileMap;
use pretty_assertions::assert_eq;
use std::io;

#[test]
fn test_game_error_from_asset_error() {
    let asset_error = AssetError::NotFound("tiles.txt");
    let game_error: GameError = asset_error.into();
    assert!(matches!(game_error, GameError::Asset(_)));
}

#[test]
fn test_game_error_from_parse_error() {
    let parse_error = ParseError::Empty("maze");
    let game_error: GameError = parse_error.into();
    assert!(matches!(game_error, GameError::MapParse(_)));
}

#[test]
fn test_game_error_from_io_error() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "missing");
    let game_error: GameError = io_error.into();
    assert!(matches!(game_error, GameError::Io(_)));
}

#[test]
fn test_unknown_tile_reports_position() {
    let error = TileMap::load("00081\n000x8\n").unwrap_err();
    assert_eq!(
        error,
        ParseError::UnknownCharacter {
            character: 'x',
            row: 2,
            column: 4,
        }
    );
    assert_eq!(error.to_string(), "Unknown character 'x' at row 2, column 4");
}

#[test]
fn test_config_errors_surface_as_game_errors() {
    let error = SimConfig::load("does/not/exist.toml").unwrap_err();
    assert!(matches!(error, GameError::Io(_)));

    let error = SimConfig::from_toml_str("lives = 3").unwrap_err();
    assert!(matches!(error, ConfigError::Parse(_)));

    let error = SimConfig::from_toml_str("starting_round = 0").unwrap_err();
    assert!(matches!(error, ConfigError::Invalid(_)));
}
