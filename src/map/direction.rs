use glam::IVec2;
use strum_macros::{AsRefStr, EnumCount, EnumIter};

/// A cardinal direction of travel, or the absence of one.
///
/// The declaration order is significant: when two candidate moves are equally good,
/// the one declared first wins.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, EnumCount, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
    #[default]
    None,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::None => Direction::None,
        }
    }

    /// The next direction clockwise, wrapping from Right back to Up.
    pub fn rotate_clockwise(&self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
            Direction::None => Direction::None,
        }
    }

    pub fn as_ivec2(&self) -> IVec2 {
        (*self).into()
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Parses a single route letter (`U`, `L`, `D`, `R`), case-insensitively.
    pub fn from_char(c: char) -> Option<Direction> {
        match c.to_ascii_uppercase() {
            'U' => Some(Direction::Up),
            'L' => Some(Direction::Left),
            'D' => Some(Direction::Down),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -IVec2::Y,
            Direction::Down => IVec2::Y,
            Direction::Left => -IVec2::X,
            Direction::Right => IVec2::X,
            Direction::None => IVec2::ZERO,
        }
    }
}

/// The four cardinal directions in tie-break order.
pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];
