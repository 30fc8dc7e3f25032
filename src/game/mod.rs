//! This module contains the game session: the scoreboard and the round being played.

pub mod context;
pub mod release;
pub mod render;
pub mod round;
pub mod score;
pub mod timing;

use std::sync::Arc;

use glam::IVec2;
use tracing::{info, warn};

use crate::asset::{get_asset_str, Asset};
use crate::config::SimConfig;
use crate::constants::{POWER_PELLET_TILES, STARTING_PELLET_COUNT};
use crate::error::GameResult;
use crate::events::{AudioEvent, RoundSignal};
use crate::map::parser::parse_pellets;
use crate::map::{Direction, TileMap};

use self::render::RenderSnapshot;
use self::round::Round;
use self::score::Scoreboard;

/// The `Game` struct is the main entry point for the simulation.
///
/// It owns the maze, the scoreboard and the current round, and moves on to the next
/// round whenever one is cleared.
pub struct Game {
    map: Arc<TileMap>,
    pellets: Arc<[IVec2]>,
    config: SimConfig,
    scoreboard: Scoreboard,
    round: Round,
    over: bool,
}

impl Game {
    /// Builds a session from the embedded maze.
    pub fn new(config: SimConfig) -> GameResult<Game> {
        let map = TileMap::load(&get_asset_str(Asset::Tiles)?)?;
        let pellets = parse_pellets(&get_asset_str(Asset::Pellets)?)?;
        let total = pellets.len() + POWER_PELLET_TILES.len();
        if total != STARTING_PELLET_COUNT {
            warn!(total, expected = STARTING_PELLET_COUNT, "Embedded pellet layout has an unexpected size");
        }
        Ok(Self::with_layout(map, pellets, config))
    }

    /// Builds a session from an already parsed maze and pellet layout.
    pub fn with_layout(map: TileMap, pellets: Vec<IVec2>, config: SimConfig) -> Game {
        let map = Arc::new(map);
        let pellets: Arc<[IVec2]> = pellets.into();
        let scoreboard =
            Scoreboard::new(config.starting_round, config.starting_lives).with_high_score(config.high_score);
        let round = Round::new(
            Arc::clone(&map),
            &pellets,
            &POWER_PELLET_TILES,
            config.starting_round,
            &config,
        );

        Game {
            map,
            pellets,
            config,
            scoreboard,
            round,
            over: false,
        }
    }

    /// Advances one frame.
    ///
    /// Once the game is over this does nothing and keeps returning [`RoundSignal::GameOver`].
    pub fn update(&mut self) -> RoundSignal {
        if self.over {
            return RoundSignal::GameOver;
        }

        let signal = self.round.update(&mut self.scoreboard);
        match signal {
            RoundSignal::Continue => {}
            RoundSignal::RoundComplete => {
                self.scoreboard.advance_round();
                info!(round = self.scoreboard.round(), score = self.scoreboard.score(), "Advancing to next round");
                self.round = Round::new(
                    Arc::clone(&self.map),
                    &self.pellets,
                    &POWER_PELLET_TILES,
                    self.scoreboard.round(),
                    &self.config,
                );
            }
            RoundSignal::GameOver => {
                info!(score = self.scoreboard.score(), round = self.scoreboard.round(), "Game over");
                self.over = true;
            }
        }
        signal
    }

    pub fn set_desired_direction(&mut self, direction: Direction) {
        self.round.set_desired_direction(direction);
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn round_mut(&mut self) -> &mut Round {
        &mut self.round
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        self.round.snapshot(&self.scoreboard)
    }

    pub fn drain_events(&mut self) -> Vec<AudioEvent> {
        self.round.drain_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::round::RoundState;

    #[test]
    fn test_cleared_round_moves_to_next() {
        let config = SimConfig {
            intro_frames: 0,
            ..SimConfig::default()
        };
        let mut game = Game::new(config.clone()).unwrap();
        game.round = Round::new(Arc::clone(&game.map), &[IVec2::new(13, 26)], &[], 1, &config);

        let mut signal = RoundSignal::Continue;
        for _ in 0..1_000 {
            signal = game.update();
            if signal != RoundSignal::Continue {
                break;
            }
        }

        assert_eq!(signal, RoundSignal::RoundComplete);
        assert_eq!(game.scoreboard().round(), 2);
        assert_eq!(game.round().round(), 2);
        assert_eq!(game.round().state(), RoundState::Intro);
        assert_eq!(game.round().pellets_remaining(), 240);
    }
}
