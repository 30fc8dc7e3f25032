//! This module contains all the constants used by the simulation.

use std::time::Duration;

use glam::IVec2;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of each tile, in pixels.
pub const TILE_SIZE: i32 = 8;

/// Columns of overscan on each side of the maze description, used by the teleporters.
pub const MAZE_PADDING: i32 = 3;
/// Lines beginning with this character are skipped in maze and pellet descriptions.
pub const COMMENT_MARKER: char = '/';

/// Grid column an entity is moved to after leaving through the left teleporter.
pub const TELEPORT_LEFT_DESTINATION: i32 = 30;
/// Grid column an entity is moved to after leaving through the right teleporter.
pub const TELEPORT_RIGHT_DESTINATION: i32 = -2;

/// The in-tile pixel the player considers the centre of a tile.
pub const PLAYER_TILE_CENTER: IVec2 = IVec2::new(3, 4);
/// The in-tile pixel a ghost considers the centre of a tile (three pixels deeper than the player's).
pub const GHOST_TILE_CENTER: IVec2 = IVec2::new(6, 7);

/// Pixel a ghost must reach above the door before entering or after leaving the house.
pub const HOUSE_EXIT: IVec2 = IVec2::new(114, 119);
/// Tile targeted by an eaten ghost returning to the house.
pub const HOUSE_ENTRANCE_TARGET: IVec2 = IVec2::new(13, 14);
/// Resting depth of the centre lane inside the house.
pub const HOUSE_CENTER_Y: i32 = 143;
/// Upper bound of the idle bobbing inside the house.
pub const HOUSE_TOP_Y: i32 = 139;
/// Lower bound of the idle bobbing inside the house.
pub const HOUSE_BOTTOM_Y: i32 = 148;

pub const PLAYER_START: IVec2 = IVec2::new(112, 212);

/// The fixed tiles holding the four power pellets.
pub const POWER_PELLET_TILES: [IVec2; 4] = [IVec2::new(1, 6), IVec2::new(26, 6), IVec2::new(1, 26), IVec2::new(26, 26)];

/// Regular pellets plus power pellets in a full maze.
pub const STARTING_PELLET_COUNT: usize = 244;

pub const STARTING_LIVES: i32 = 2;

/// Scores are mirrored to a six digit display, like the original score wheel.
pub const DISPLAY_SCORE_MODULUS: u64 = 1_000_000;

pub mod points {
    pub const PELLET: u64 = 10;
    pub const POWER_PELLET: u64 = 50;
    /// Base value of a ghost, multiplied by the capture multiplier.
    pub const GHOST: u64 = 200;
    /// The capture multiplier stops doubling here (1600 points).
    pub const MAX_MULTIPLIER: u32 = 8;
}

/// Frame and sub-step counts. Freeze and dead timers count sub-steps, everything else counts frames.
pub mod timing {
    pub const PELLET_FREEZE: u32 = 2;
    pub const POWER_PELLET_FREEZE: u32 = 6;
    pub const GHOST_EATEN_FREEZE: u32 = 180;
    /// Eating two ghosts at once would stack the player's freeze past this; it is clamped back down.
    pub const GHOST_EATEN_FREEZE_LIMIT: u32 = 300;
    pub const DEAD_SCORE_DISPLAY: u32 = 180;

    pub const DEFAULT_INTRO_FRAMES: u32 = 252;

    pub const DEATH_HIDE_GHOSTS: u32 = 120;
    pub const DEATH_ANIMATION_INTERVAL: u32 = 8;
    pub const DEATH_RESTART: u32 = 216;
    pub const DEATH_ANIMATION_FRAMES: u8 = 12;

    pub const COMPLETE_FLASH_START: u32 = 120;
    pub const COMPLETE_FLASH_INTERVAL: u32 = 40;
    pub const COMPLETE_FLASH_END: u32 = 400;
    pub const COMPLETE_SIGNAL: u32 = 440;

    pub const PELLET_TIMER: u32 = 240;
    /// From this round on the pellet timer uses [`PELLET_TIMER_LATE`].
    pub const PELLET_TIMER_LATE_ROUND: u32 = 5;
    pub const PELLET_TIMER_LATE: u32 = 180;
}

pub mod animation {
    pub const POWER_PELLET_BLINK: u64 = 15;
    pub const ONE_UP_BLINK: u64 = 30;
    pub const PLAYER_BODY_INTERVAL: u64 = 2;
    pub const GHOST_BODY_INTERVAL: u64 = 8;
    pub const FRIGHTENED_FLASH_INTERVAL: u64 = 14;
}
