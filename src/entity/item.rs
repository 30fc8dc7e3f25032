use glam::IVec2;
use strum_macros::AsRefStr;

use crate::constants::points;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
pub enum ItemType {
    Pellet,
    /// Frightens every ghost when eaten.
    PowerPellet,
}

impl ItemType {
    pub fn points(&self) -> u64 {
        match self {
            ItemType::Pellet => points::PELLET,
            ItemType::PowerPellet => points::POWER_PELLET,
        }
    }
}

/// A collectible sitting on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub grid: IVec2,
    pub item_type: ItemType,
    /// Blink state; power pellets flash while the round is running.
    pub visible: bool,
}

impl Item {
    pub fn new(grid: IVec2, item_type: ItemType) -> Self {
        Self {
            grid,
            item_type,
            visible: true,
        }
    }
}
