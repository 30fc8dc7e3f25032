use glam::IVec2;
use maze_chase::constants::{POWER_PELLET_TILES, STARTING_PELLET_COUNT};
use maze_chase::map::{Direction, Tile};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

#[test]
fn test_maze_spans_overscan_columns() {
    let map = common::maze();
    assert_eq!(map.size(), IVec2::new(31, 36));
    assert_that(&map.len()).is_equal_to(34 * 36);
}

#[test]
fn test_unknown_coordinates_are_disabled() {
    let map = common::maze();
    assert_eq!(map.tile_at(IVec2::new(-10, 5)), Tile::Disabled);
    assert_eq!(map.tile_at(IVec2::new(100, 100)), Tile::Disabled);
    assert_eq!(map.tile_at(IVec2::new(5, -1)), Tile::Disabled);
}

#[test]
fn test_tunnel_ends_in_teleporters() {
    let map = common::maze();
    assert_eq!(map.tile_at(IVec2::new(-3, 17)), Tile::Teleport);
    assert_eq!(map.tile_at(IVec2::new(30, 17)), Tile::Teleport);
    assert_eq!(map.tile_at(IVec2::new(-2, 17)), Tile::Tunnel);
    assert_eq!(map.tile_at(IVec2::new(29, 17)), Tile::Tunnel);
    assert_eq!(map.next_tile(Direction::Left, IVec2::new(-2, 17)), Tile::Teleport);
}

#[test]
fn test_house_door_and_restricted_tiles() {
    let map = common::maze();
    for x in [13, 14] {
        assert_eq!(map.tile_at(IVec2::new(x, 15)), Tile::HomeDoor);
        assert_that(&map.tile_at(IVec2::new(x, 15)).is_blocking()).is_true();
    }
    for grid in [IVec2::new(12, 14), IVec2::new(15, 14), IVec2::new(12, 26), IVec2::new(15, 26)] {
        assert_eq!(map.tile_at(grid), Tile::Restricted, "at {grid}");
    }
    assert_eq!(map.tile_at(IVec2::new(13, 17)), Tile::HomeInterior);
}

#[test]
fn test_pellet_layout() {
    let map = common::maze();
    let pellets = common::pellet_layout();

    assert_that(&pellets.len()).is_equal_to(STARTING_PELLET_COUNT - POWER_PELLET_TILES.len());
    for grid in &pellets {
        assert_that(&map.tile_at(*grid).is_blocking()).is_false();
    }
    for grid in POWER_PELLET_TILES {
        assert_that(&pellets.contains(&grid)).is_false();
        assert_eq!(map.tile_at(grid), Tile::Floor);
    }
}
