#![allow(dead_code)]

use std::sync::Arc;

use glam::IVec2;
use maze_chase::asset::{get_asset_str, Asset};
use maze_chase::config::SimConfig;
use maze_chase::constants::POWER_PELLET_TILES;
use maze_chase::game::round::{Round, RoundState};
use maze_chase::game::score::Scoreboard;
use maze_chase::map::parser::parse_pellets;
use maze_chase::map::TileMap;

pub fn maze() -> TileMap {
    TileMap::load(&get_asset_str(Asset::Tiles).unwrap()).unwrap()
}

pub fn pellet_layout() -> Vec<IVec2> {
    parse_pellets(&get_asset_str(Asset::Pellets).unwrap()).unwrap()
}

/// Builds a map from rows written without the three overscan columns.
pub fn small_map(rows: &[&str]) -> TileMap {
    let description: String = rows.iter().map(|row| format!("000{row}\n")).collect();
    TileMap::load(&description).unwrap()
}

/// Default configuration with the intro skipped.
pub fn quick_config() -> SimConfig {
    SimConfig {
        intro_frames: 0,
        ..SimConfig::default()
    }
}

/// A round on the full maze that has already left the intro.
pub fn playing_round(round: u32, scoreboard: &mut Scoreboard) -> Round {
    let mut game_round = Round::new(
        Arc::new(maze()),
        &pellet_layout(),
        &POWER_PELLET_TILES,
        round,
        &quick_config(),
    );
    game_round.update(scoreboard);
    assert_eq!(game_round.state(), RoundState::Playing);
    game_round
}

/// Pixel centre of `grid` for an entity using `anchor` as its in-tile centre.
pub fn tile_center(grid: IVec2, anchor: IVec2) -> IVec2 {
    grid * 8 + anchor
}
