//! Per-round difficulty tables.

use crate::constants::timing::{PELLET_TIMER, PELLET_TIMER_LATE, PELLET_TIMER_LATE_ROUND};
use crate::entity::ghost::GhostType;

/// Number of alternating Scatter/Chase phases before the ghosts chase for good.
pub const MODE_PHASES: usize = 7;

/// How long ghosts stay frightened after a power pellet, and when they start flashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrightTiming {
    /// Frames of fright.
    pub duration: u32,
    /// Remaining frames at or below which frightened ghosts flash.
    pub flash_start: u32,
}

impl FrightTiming {
    pub fn for_round(round: u32) -> Self {
        let (duration, flash_start) = match round {
            0..=1 => (360, 70),
            2 | 6 | 10 => (300, 70),
            3 => (240, 70),
            4 | 14 => (180, 70),
            5 | 7 | 8 | 11 => (120, 70),
            9 | 12 | 13 | 15 | 16 | 18 => (60, 42),
            _ => (0, 0),
        };
        Self { duration, flash_start }
    }
}

/// Rounds in which power pellets no longer frighten anyone.
pub fn is_fright_immune(round: u32) -> bool {
    round >= 17 && round != 18
}

/// Durations, in frames, of the Scatter/Chase phases, starting with Scatter.
pub fn mode_durations(round: u32) -> [u32; MODE_PHASES] {
    match round {
        0..=1 => [420, 1200, 420, 1200, 300, 1200, 300],
        2..=4 => [420, 1200, 420, 1200, 300, 61980, 1],
        _ => [420, 1200, 300, 1200, 300, 62040, 1],
    }
}

/// Pellets a caged ghost waits for before leaving, while personal counters are in use.
pub fn personal_pellet_limit(ghost_type: GhostType, round: u32) -> u32 {
    match (ghost_type, round) {
        (GhostType::Chaser, _) => 0,
        (GhostType::Ambusher, 0..=1) => 30,
        (GhostType::Ambusher, _) => 0,
        (GhostType::Flanker, 0..=1) => 60,
        (GhostType::Flanker, 2) => 50,
        (GhostType::Flanker, _) => 0,
        (GhostType::Opportunist, _) => 0,
    }
}

/// Value of the shared counter that releases a ghost while the global counter is in use.
///
/// The comparison is exact: skipping past the value leaves the ghost caged.
pub fn global_release_threshold(ghost_type: GhostType) -> Option<u32> {
    match ghost_type {
        GhostType::Chaser => None,
        GhostType::Ambusher => Some(32),
        GhostType::Flanker => Some(17),
        GhostType::Opportunist => Some(7),
    }
}

/// Frames without a pellet before the next caged ghost is forced out.
pub fn pellet_timer(round: u32) -> u32 {
    if round >= PELLET_TIMER_LATE_ROUND {
        PELLET_TIMER_LATE
    } else {
        PELLET_TIMER
    }
}
