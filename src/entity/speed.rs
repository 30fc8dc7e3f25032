//! Speed patterns.
//!
//! Entities never move fractional pixels. Instead, each one carries 32-bit shift registers
//! whose set bits authorise a single pixel of movement. The register is tested and then
//! rotated once per sub-step, so a pattern with more set bits is a faster entity.

/// Bit tested on each sub-step, counted from the least significant bit.
const TESTED_BIT: u32 = 15;

/// A cyclic 32-bit movement pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedPattern(u32);

impl SpeedPattern {
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// A pattern that moves on every sub-step.
    pub const fn always() -> Self {
        Self(u32::MAX)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Whether the next call to [`SpeedPattern::advance`] will authorise a move.
    pub fn will_move(&self) -> bool {
        (self.0 >> TESTED_BIT) & 1 == 1
    }

    /// Tests the pattern and rotates it by one.
    ///
    /// # Returns
    ///
    /// Whether this sub-step may move one pixel.
    pub fn advance(&mut self) -> bool {
        let moves = self.will_move();
        self.0 = self.0.rotate_right(1);
        moves
    }
}

/// The three patterns a ghost switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostSpeed {
    pub normal: SpeedPattern,
    pub tunnel: SpeedPattern,
    pub frightened: SpeedPattern,
}

impl GhostSpeed {
    pub fn for_round(round: u32) -> Self {
        let [normal, tunnel, frightened] = match round {
            0..=1 => [2854901077, 572662306, 2451870244],
            2..=4 => [2859095509, 1210327697, 2451842377],
            5..=20 => [3596266933, 2451870244, 623191333],
            _ => [3596266933, 2451870244, 3596266933],
        };
        Self {
            normal: SpeedPattern::new(normal),
            tunnel: SpeedPattern::new(tunnel),
            frightened: SpeedPattern::new(frightened),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSpeed {
    pub normal: SpeedPattern,
    pub frightened: SpeedPattern,
}

impl PlayerSpeed {
    pub fn for_round(round: u32) -> Self {
        let (normal, frightened) = match round {
            0..=1 => (1431655765, 3580548458),
            2..=4 => (3580548458, 3596266933),
            5..=20 => (1835887981, 1835887981),
            _ => (3580548458, 3580548458),
        };
        Self {
            normal: SpeedPattern::new(normal),
            frightened: SpeedPattern::new(frightened),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tests_bit_fifteen_before_rotating() {
        let mut pattern = SpeedPattern::new(1 << 15);
        assert!(pattern.advance());
        assert_eq!(pattern.bits(), 1 << 14);
        assert!(!pattern.advance());
    }

    #[test]
    fn test_pattern_is_cyclic() {
        let start = SpeedPattern::new(2854901077);
        let mut pattern = start;
        let moves = (0..32).filter(|_| pattern.advance()).count();
        assert_eq!(pattern, start);
        assert_eq!(moves as u32, start.bits().count_ones());
    }

    #[test]
    fn test_always_moves() {
        let mut pattern = SpeedPattern::always();
        assert!((0..64).all(|_| pattern.advance()));
    }

    #[test]
    fn test_half_speed_alternates() {
        // 0x5555_5555
        let mut pattern = PlayerSpeed::for_round(1).normal;
        let sequence: Vec<bool> = (0..4).map(|_| pattern.advance()).collect();
        assert_eq!(sequence, vec![false, true, false, true]);
    }

    #[test]
    fn test_round_tables() {
        assert_eq!(GhostSpeed::for_round(3), GhostSpeed::for_round(2));
        assert_ne!(GhostSpeed::for_round(21).frightened, GhostSpeed::for_round(20).frightened);
        assert_eq!(PlayerSpeed::for_round(7).normal, PlayerSpeed::for_round(7).frightened);
    }
}
