use maze_chase::game::score::Scoreboard;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

#[test]
fn test_display_wraps_at_a_million() {
    let mut scoreboard = Scoreboard::default();

    scoreboard.set_score(1_999_000);
    assert_eq!(scoreboard.display_score(), 999_000);
    assert_eq!(scoreboard.display_high_score(), 999_000);

    scoreboard.set_score(2_100_000);
    assert_eq!(scoreboard.display_score(), 100_000);
    // The display keeps the largest value it has shown, not the wrapped high score.
    assert_eq!(scoreboard.display_high_score(), 999_000);
    assert_eq!(scoreboard.high_score(), 2_100_000);
}

#[test]
fn test_carried_high_score() {
    let mut scoreboard = Scoreboard::new(1, 2).with_high_score(5_000);
    scoreboard.add_points(1_000);

    assert_eq!(scoreboard.high_score(), 5_000);
    assert_that(&scoreboard.is_new_high_score()).is_false();

    scoreboard.add_points(4_010);
    assert_eq!(scoreboard.high_score(), 5_010);
    assert_that(&scoreboard.is_new_high_score()).is_true();
}

#[test]
fn test_game_over_below_zero_lives() {
    let mut scoreboard = Scoreboard::new(3, 1);
    assert_eq!(scoreboard.round(), 3);

    scoreboard.lose_life();
    assert_that(&scoreboard.is_game_over()).is_false();
    scoreboard.lose_life();
    assert_that(&scoreboard.is_game_over()).is_true();
}

#[test]
fn test_tying_carried_high_score_is_not_new() {
    let mut scoreboard = Scoreboard::new(1, 3).with_high_score(1_000);
    scoreboard.add_points(1_000);

    assert_eq!(scoreboard.high_score(), 1_000);
    assert_that(&scoreboard.is_new_high_score()).is_false();

    scoreboard.add_points(10);
    assert_that(&scoreboard.is_new_high_score()).is_true();
}
