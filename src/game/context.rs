//! State shared by every entity during a frame.

use crate::constants::points::MAX_MULTIPLIER;
use crate::entity::ghost::frightened::FrightRng;
use crate::game::timing::{is_fright_immune, FrightTiming};

/// Everything an entity update may read or write beyond its own fields.
///
/// Owned by the round and passed down explicitly, so that two rounds never share state.
#[derive(Debug, Clone)]
pub struct SimContext {
    pub round: u32,
    /// Frames simulated since the round was created.
    pub frame: u64,
    /// Frames of fright left. Counted down by the player.
    pub fright_timer: u32,
    pub fright: FrightTiming,
    /// Multiplier applied to the next ghost eaten.
    pub multiplier: u32,
    pub rng: FrightRng,
}

impl SimContext {
    pub fn new(round: u32, seed: u64) -> Self {
        Self {
            round,
            frame: 0,
            fright_timer: 0,
            fright: FrightTiming::for_round(round),
            multiplier: 1,
            rng: FrightRng::new(seed),
        }
    }

    pub fn fright_immune(&self) -> bool {
        is_fright_immune(self.round)
    }

    /// Doubles the capture multiplier, stopping at its maximum.
    pub fn double_multiplier(&mut self) {
        self.multiplier = (self.multiplier * 2).min(MAX_MULTIPLIER);
    }
}
