//! The maze: tile classifications, directions and the description parsers.

pub mod direction;
pub mod parser;
pub mod tile;

pub use direction::{Direction, DIRECTIONS};
pub use tile::{Tile, TileMap};
