//! Tile classification and the immutable tile map.

use std::collections::HashMap;

use glam::IVec2;
use strum_macros::{AsRefStr, EnumCount, EnumIter};

use crate::error::ParseError;
use crate::map::direction::Direction;
use crate::map::parser::MapTileParser;

/// Classification of a single grid cell.
///
/// The discriminants match the digits used by the maze description.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumCount, EnumIter)]
pub enum Tile {
    /// Outside the playable area. Also returned for any coordinate the map does not hold.
    #[default]
    Disabled = 0,
    Floor = 1,
    /// Passable only by ghosts.
    HomeDoor = 2,
    HomeInterior = 3,
    /// A decision point where ghosts may change direction.
    Intersection = 4,
    /// A decision point where ghosts may not turn upward.
    Restricted = 5,
    /// The outermost tunnel tile; stepping toward it wraps the entity to the other side.
    Teleport = 6,
    /// Slows ghosts down.
    Tunnel = 7,
    Wall = 8,
}

impl Tile {
    /// Whether an entity may move onto this tile when choosing a direction.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Tile::Wall | Tile::HomeDoor)
    }

    /// Whether a ghost reconsiders its direction upon approaching this tile.
    pub fn is_decision_point(&self) -> bool {
        matches!(self, Tile::Intersection | Tile::Restricted)
    }
}

/// The maze, keyed by grid coordinate.
///
/// Grid X runs from -3 to 30 so that the teleporters sit outside the visible board.
#[derive(Debug, Clone, Default)]
pub struct TileMap {
    tiles: HashMap<IVec2, Tile>,
    size: IVec2,
}

impl TileMap {
    /// Parses a maze description into a tile map.
    ///
    /// # Errors
    ///
    /// Returns an error if the description holds no rows or contains a character other than `0`-`8`.
    pub fn load(description: &str) -> Result<Self, ParseError> {
        let tiles = MapTileParser::parse_board(description)?;
        let size = tiles.keys().fold(IVec2::ZERO, |acc, p| acc.max(*p + IVec2::ONE));
        Ok(Self { tiles, size })
    }

    /// Returns the tile at `point`, or [`Tile::Disabled`] when the map holds nothing there.
    pub fn tile_at(&self, point: IVec2) -> Tile {
        self.tiles.get(&point).copied().unwrap_or_default()
    }

    /// Returns the tile one step from `point` in `direction`.
    pub fn next_tile(&self, direction: Direction, point: IVec2) -> Tile {
        self.tile_at(point + direction.as_ivec2())
    }

    /// One past the largest grid coordinate the map holds.
    pub fn size(&self) -> IVec2 {
        self.size
    }

    /// Number of classified cells, padding included.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "// a comment\n0008880\n0004140\n0008880\n";

    #[test]
    fn test_load_skips_comments_and_offsets_columns() {
        let map = TileMap::load(SMALL).unwrap();
        assert_eq!(map.tile_at(IVec2::new(0, 0)), Tile::Wall);
        assert_eq!(map.tile_at(IVec2::new(0, 1)), Tile::Intersection);
        assert_eq!(map.tile_at(IVec2::new(1, 1)), Tile::Floor);
        assert_eq!(map.tile_at(IVec2::new(-3, 1)), Tile::Disabled);
        assert_eq!(map.len(), 21);
    }

    #[test]
    fn test_next_tile() {
        let map = TileMap::load(SMALL).unwrap();
        assert_eq!(map.next_tile(Direction::Right, IVec2::new(0, 1)), Tile::Floor);
        assert_eq!(map.next_tile(Direction::Up, IVec2::new(0, 1)), Tile::Wall);
        assert_eq!(map.next_tile(Direction::None, IVec2::new(2, 1)), Tile::Intersection);
    }

    #[test]
    fn test_blocking_tiles() {
        assert!(Tile::Wall.is_blocking());
        assert!(Tile::HomeDoor.is_blocking());
        assert!(!Tile::Tunnel.is_blocking());
        assert!(Tile::Restricted.is_decision_point());
        assert!(!Tile::Floor.is_decision_point());
    }
}
