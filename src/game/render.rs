//! A renderer-agnostic description of what is on screen.
//!
//! The simulation never draws. After each frame it can produce a [`RenderSnapshot`]
//! naming a sprite, a visibility flag and a pixel rectangle for every drawable, which a
//! front-end resolves against its own texture atlas via [`GameSprite::to_path`].

use glam::{IVec2, UVec2};
use strum_macros::AsRefStr;

use crate::constants::TILE_SIZE;
use crate::entity::ghost::GhostType;
use crate::map::Direction;

/// Side length of the player and ghost sprites, in pixels.
pub const ENTITY_SPRITE_SIZE: u32 = 16;
/// Side length of a power pellet sprite, in pixels.
pub const POWER_PELLET_SPRITE_SIZE: u32 = TILE_SIZE as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSprite {
    /// Chomping in a direction, frames 0 through 3.
    Moving(Direction, u8),
    /// One of the twelve death animation frames.
    Dying(u8),
    /// The closed-mouth sprite shown while the maze flashes.
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum FrightenedColor {
    Blue,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GhostSprite {
    Normal(GhostType, Direction, u8),
    Frightened(FrightenedColor, u8),
    Eyes(Direction),
    /// Capture score shown where the ghost was eaten: 0 is 200 up to 3 for 1600.
    Score(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSprite {
    Player(PlayerSprite),
    Ghost(GhostSprite),
    PowerPellet,
}

impl GameSprite {
    /// Generates the atlas path for the sprite.
    pub fn to_path(self) -> String {
        let frame_char = |frame: u8| (b'a' + frame % 26) as char;
        match self {
            GameSprite::Player(sprite) => match sprite {
                PlayerSprite::Moving(dir, frame) => format!("player/{}_{}.png", dir.as_ref(), frame_char(frame)),
                PlayerSprite::Dying(frame) => format!("player/dying_{}.png", frame),
                PlayerSprite::Full => "player/full.png".to_string(),
            },
            GameSprite::Ghost(sprite) => match sprite {
                GhostSprite::Normal(ghost, dir, frame) => {
                    format!("ghost/{}/{}_{}.png", ghost.as_ref(), dir.as_ref(), frame_char(frame))
                }
                GhostSprite::Frightened(color, frame) => {
                    format!("ghost/frightened/{}_{}.png", color.as_ref(), frame_char(frame))
                }
                GhostSprite::Eyes(dir) => format!("ghost/eyes/{}.png", dir.as_ref()),
                GhostSprite::Score(index) => format!("score/{}.png", 200u32 << index.min(3)),
            },
            GameSprite::PowerPellet => "maze/energizer.png".to_string(),
        }
    }
}

/// An axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub origin: IVec2,
    pub size: UVec2,
}

impl Rect {
    /// A square of side `size` centred on `center`.
    pub fn centered(center: IVec2, size: u32) -> Self {
        Self {
            origin: center - IVec2::splat(size as i32 / 2),
            size: UVec2::splat(size),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drawable {
    pub sprite: GameSprite,
    pub visible: bool,
    pub rect: Rect,
}

/// Colour state of the maze walls.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
pub enum MazeFlash {
    #[default]
    Normal,
    White,
    Blue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSnapshot {
    pub player: Drawable,
    /// Indexed by [`GhostType`] discriminant.
    pub ghosts: [Drawable; 4],
    pub power_pellets: Vec<Drawable>,
    /// Grid positions of the regular pellets still on the board.
    pub pellets: Vec<IVec2>,
    pub maze: MazeFlash,
    pub one_up_visible: bool,
    pub score: u64,
    pub high_score: u64,
    pub lives: i32,
    pub round: u32,
}
