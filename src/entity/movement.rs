//! The position model shared by the player and the ghosts.
//!
//! Entities live in whole-pixel space. Everything grid-related is derived from the
//! pixel centre one axis at a time, so a tile boundary crossing is visible for exactly
//! one sub-step as a difference between the previous and current grid coordinate.

use glam::IVec2;

use crate::constants::{TELEPORT_LEFT_DESTINATION, TELEPORT_RIGHT_DESTINATION, TILE_SIZE};
use crate::map::{Direction, Tile, TileMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    center: IVec2,
    grid: IVec2,
    previous_grid: IVec2,
    offset: IVec2,
    distance: IVec2,
    /// The in-tile pixel this entity treats as the centre of a tile.
    anchor: IVec2,
    pub current: Direction,
    pub desired: Direction,
}

impl Movement {
    pub fn new(center: IVec2, anchor: IVec2, direction: Direction) -> Self {
        let mut movement = Self {
            center,
            grid: IVec2::ZERO,
            previous_grid: IVec2::ZERO,
            offset: IVec2::ZERO,
            distance: IVec2::ZERO,
            anchor,
            current: direction,
            desired: direction,
        };
        movement.place(center);
        movement
    }

    pub fn center(&self) -> IVec2 {
        self.center
    }

    pub fn grid(&self) -> IVec2 {
        self.grid
    }

    pub fn previous_grid(&self) -> IVec2 {
        self.previous_grid
    }

    /// Pixel offset of the centre within its tile, always in `0..8`.
    pub fn offset(&self) -> IVec2 {
        self.offset
    }

    /// Signed pixel distance from the centre to the anchor of its tile.
    pub fn distance_to_center(&self) -> IVec2 {
        self.distance
    }

    pub fn is_centered(&self) -> bool {
        self.distance == IVec2::ZERO
    }

    /// True on the sub-step where a tile boundary was crossed.
    pub fn entered_new_tile(&self) -> bool {
        self.previous_grid != self.grid
    }

    /// Forgets the last boundary crossing, so the next one is required before a new decision.
    pub fn settle(&mut self) {
        self.previous_grid = self.grid;
    }

    pub fn set_x(&mut self, x: i32) {
        self.previous_grid.x = self.grid.x;
        self.center.x = x;
        self.grid.x = x.div_euclid(TILE_SIZE);
        self.offset.x = x.rem_euclid(TILE_SIZE);
        self.distance.x = self.anchor.x - self.offset.x;
    }

    pub fn set_y(&mut self, y: i32) {
        self.previous_grid.y = self.grid.y;
        self.center.y = y;
        self.grid.y = y.div_euclid(TILE_SIZE);
        self.offset.y = y.rem_euclid(TILE_SIZE);
        self.distance.y = self.anchor.y - self.offset.y;
    }

    /// Moves the centre to `center`, updating both axes.
    pub fn set_center(&mut self, center: IVec2) {
        self.set_x(center.x);
        self.set_y(center.y);
    }

    /// Relocates the entity without registering a boundary crossing.
    pub fn place(&mut self, center: IVec2) {
        self.set_center(center);
        self.settle();
    }

    /// Moves `pixels` along `direction`, touching only the axis of travel.
    pub fn step(&mut self, direction: Direction, pixels: i32) {
        match direction {
            Direction::Left | Direction::Right => self.set_x(self.center.x + direction.as_ivec2().x * pixels),
            Direction::Up | Direction::Down => self.set_y(self.center.y + direction.as_ivec2().y * pixels),
            Direction::None => {}
        }
    }

    /// Moves up to `pixels` along X toward `target`.
    pub fn move_towards_x(&mut self, target: i32, pixels: i32) {
        let delta = (target - self.center.x).clamp(-pixels, pixels);
        if delta != 0 {
            self.set_x(self.center.x + delta);
        }
    }

    /// Moves up to `pixels` along Y toward `target`.
    pub fn move_towards_y(&mut self, target: i32, pixels: i32) {
        let delta = (target - self.center.y).clamp(-pixels, pixels);
        if delta != 0 {
            self.set_y(self.center.y + delta);
        }
    }

    /// Wraps the entity to the far side of the maze when the tile ahead is a teleporter.
    ///
    /// The in-tile offset and the direction of travel are preserved.
    ///
    /// # Returns
    ///
    /// Whether the entity was moved.
    pub fn wrap_teleport(&mut self, map: &TileMap) -> bool {
        if map.next_tile(self.current, self.grid) != Tile::Teleport {
            return false;
        }

        let destination = match self.current {
            Direction::Left => TELEPORT_LEFT_DESTINATION,
            Direction::Right => TELEPORT_RIGHT_DESTINATION,
            _ => return false,
        };
        self.set_x(destination * TILE_SIZE + self.offset.x);
        true
    }

    /// Pulls the perpendicular axis one pixel toward the tile centre.
    pub fn corner(&mut self) {
        if self.current.is_horizontal() && self.distance.y != 0 {
            self.set_y(self.center.y + self.distance.y.signum());
        } else if self.current.is_vertical() && self.distance.x != 0 {
            self.set_x(self.center.x + self.distance.x.signum());
        }
    }
}
