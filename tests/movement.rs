use glam::IVec2;
use maze_chase::constants::{GHOST_TILE_CENTER, PLAYER_TILE_CENTER};
use maze_chase::entity::movement::Movement;
use maze_chase::entity::player::{Player, PlayerState};
use maze_chase::game::context::SimContext;
use maze_chase::map::Direction;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

#[test]
fn test_left_teleport_keeps_offset_and_direction() {
    let map = common::maze();
    let mut movement = Movement::new(IVec2::new(-11, 140), PLAYER_TILE_CENTER, Direction::Left);
    assert_eq!(movement.grid(), IVec2::new(-2, 17));

    assert_that(&movement.wrap_teleport(&map)).is_true();
    assert_eq!(movement.grid(), IVec2::new(30, 17));
    assert_eq!(movement.offset(), IVec2::new(5, 4));
    assert_eq!(movement.center(), IVec2::new(245, 140));
    assert_eq!(movement.current, Direction::Left);
}

#[test]
fn test_right_teleport_keeps_offset_and_direction() {
    let map = common::maze();
    let mut movement = Movement::new(IVec2::new(234, 143), GHOST_TILE_CENTER, Direction::Right);
    assert_eq!(movement.grid(), IVec2::new(29, 17));

    assert_that(&movement.wrap_teleport(&map)).is_true();
    assert_eq!(movement.grid(), IVec2::new(-2, 17));
    assert_eq!(movement.offset(), IVec2::new(2, 7));
    assert_eq!(movement.current, Direction::Right);
}

#[test]
fn test_no_wrap_away_from_teleporters() {
    let map = common::maze();
    let mut movement = Movement::new(IVec2::new(112, 212), PLAYER_TILE_CENTER, Direction::Left);
    assert_that(&movement.wrap_teleport(&map)).is_false();

    let mut vertical = Movement::new(IVec2::new(-11, 140), PLAYER_TILE_CENTER, Direction::Up);
    assert_that(&vertical.wrap_teleport(&map)).is_false();
    assert_eq!(vertical.center(), IVec2::new(-11, 140));
}

#[test]
fn test_player_wraps_through_tunnel() {
    let map = common::maze();
    let mut ctx = SimContext::new(1, 0);
    let mut player = Player::new(1);
    player.place(IVec2::new(-11, 140), Direction::Left);
    player.set_state(PlayerState::Moving);

    player.update(&map, &mut ctx, false);

    assert_eq!(player.grid(), IVec2::new(30, 17));
    assert_eq!(player.current_direction(), Direction::Left);
    assert_eq!(player.state(), PlayerState::Moving);
}

#[test]
fn test_player_stops_at_wall_centre() {
    let map = common::maze();
    let mut ctx = SimContext::new(1, 0);
    let mut player = Player::new(1);
    player.place(common::tile_center(IVec2::new(1, 4), PLAYER_TILE_CENTER), Direction::Left);
    player.set_state(PlayerState::Moving);

    player.update(&map, &mut ctx, false);

    assert_eq!(player.state(), PlayerState::Idle);
    assert_eq!(player.center(), IVec2::new(11, 36));
}

#[test]
fn test_player_turn_is_buffered_until_open() {
    let map = common::maze();
    let mut ctx = SimContext::new(1, 0);
    let mut player = Player::new(1);
    player.set_state(PlayerState::Moving);
    // Row 26 at the start has walls above and below.
    player.set_desired_direction(Direction::Up);

    player.update(&map, &mut ctx, false);

    assert_eq!(player.current_direction(), Direction::Left);
    assert_eq!(player.desired_direction(), Direction::Up);
}
