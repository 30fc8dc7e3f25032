use maze_chase::config::SimConfig;
use maze_chase::game::round::RoundState;
use maze_chase::game::Game;
use maze_chase::map::Direction;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

fn run(config: SimConfig, frames: usize) -> Game {
    let mut game = Game::new(config).unwrap();
    let route = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];
    for frame in 0..frames {
        if frame % 40 == 0 {
            game.set_desired_direction(route[(frame / 40) % route.len()]);
        }
        game.update();
    }
    game
}

#[test]
fn test_game_builds_from_embedded_assets() {
    let game = Game::new(SimConfig::default()).unwrap();

    assert_eq!(game.round().state(), RoundState::Intro);
    assert_eq!(game.round().pellets_remaining(), 240);
    assert_eq!(game.round().power_pellets_remaining(), 4);
    assert_eq!(game.scoreboard().lives(), 2);
    assert_that(&game.is_over()).is_false();
}

#[test]
fn test_same_seed_same_game() {
    let config = SimConfig {
        rng_seed: 42,
        ..common::quick_config()
    };

    let first = run(config.clone(), 1_500);
    let second = run(config, 1_500);

    assert_eq!(first.snapshot(), second.snapshot());
    assert_eq!(first.scoreboard(), second.scoreboard());
}

#[test]
fn test_player_scores_while_moving() {
    let game = run(common::quick_config(), 300);
    assert_that(&game.scoreboard().score()).is_greater_than(0);
}

#[test]
fn test_config_overrides_starting_round() {
    let config = SimConfig::from_toml_str("starting_round = 3\nstarting_lives = 4\n").unwrap();
    let game = Game::new(config).unwrap();

    assert_eq!(game.round().round(), 3);
    assert_eq!(game.scoreboard().lives(), 4);
}
