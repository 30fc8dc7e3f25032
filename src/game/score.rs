//! Score, high score, lives and round number.

use crate::constants::{DISPLAY_SCORE_MODULUS, STARTING_LIVES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    score: u64,
    high_score: u64,
    /// The high score the session started with.
    starting_high_score: u64,
    display_score: u64,
    display_high_score: u64,
    lives: i32,
    round: u32,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            score: 0,
            high_score: 0,
            starting_high_score: 0,
            display_score: 0,
            display_high_score: 0,
            lives: STARTING_LIVES,
            round: 1,
        }
    }
}

impl Scoreboard {
    pub fn new(round: u32, lives: i32) -> Self {
        Self {
            round,
            lives,
            ..Default::default()
        }
    }

    /// Seeds a high score carried over from an earlier session.
    pub fn with_high_score(mut self, high_score: u64) -> Self {
        self.high_score = high_score;
        self.starting_high_score = high_score;
        self.display_high_score = high_score % DISPLAY_SCORE_MODULUS;
        self
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// The score as the six digit display shows it.
    pub fn display_score(&self) -> u64 {
        self.display_score
    }

    /// The highest value the six digit display has shown.
    pub fn display_high_score(&self) -> u64 {
        self.display_high_score
    }

    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn is_game_over(&self) -> bool {
        self.lives < 0
    }

    /// Whether this session's score beat the high score it started with.
    pub fn is_new_high_score(&self) -> bool {
        self.high_score > self.starting_high_score
    }

    pub fn set_score(&mut self, score: u64) {
        self.score = score;
        self.high_score = self.high_score.max(score);
        self.display_score = score % DISPLAY_SCORE_MODULUS;
        self.display_high_score = self.display_high_score.max(self.display_score);
    }

    pub fn add_points(&mut self, points: u64) {
        self.set_score(self.score + points);
    }

    pub fn lose_life(&mut self) {
        self.lives -= 1;
    }

    pub fn advance_round(&mut self) {
        self.round += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_points_raises_high_score() {
        let mut scoreboard = Scoreboard::default();
        scoreboard.add_points(10);
        scoreboard.add_points(50);
        assert_eq!(scoreboard.score(), 60);
        assert_eq!(scoreboard.high_score(), 60);
        assert!(scoreboard.is_new_high_score());
    }

    #[test]
    fn test_seeded_high_score_is_kept() {
        let mut scoreboard = Scoreboard::default().with_high_score(5000);
        scoreboard.add_points(200);
        assert_eq!(scoreboard.high_score(), 5000);
        assert_eq!(scoreboard.display_high_score(), 5000);
        assert!(!scoreboard.is_new_high_score());
    }

    #[test]
    fn test_game_over_below_zero_lives() {
        let mut scoreboard = Scoreboard::new(1, 0);
        assert!(!scoreboard.is_game_over());
        scoreboard.lose_life();
        assert!(scoreboard.is_game_over());
    }
}
