use glam::IVec2;
use maze_chase::map::direction::*;

#[test]
fn test_direction_opposite() {
    let test_cases = [
        (Direction::Up, Direction::Down),
        (Direction::Down, Direction::Up),
        (Direction::Left, Direction::Right),
        (Direction::Right, Direction::Left),
    ];

    for (dir, expected) in test_cases {
        assert_eq!(dir.opposite(), expected);
    }
}

#[test]
fn test_direction_as_ivec2() {
    let test_cases = [
        (Direction::Up, -IVec2::Y),
        (Direction::Down, IVec2::Y),
        (Direction::Left, -IVec2::X),
        (Direction::Right, IVec2::X),
    ];

    for (dir, expected) in test_cases {
        assert_eq!(dir.as_ivec2(), expected);
        assert_eq!(IVec2::from(dir), expected);
    }
}

#[test]
fn test_direction_rotates_clockwise() {
    let mut direction = Direction::Up;
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(direction);
        direction = direction.rotate_clockwise();
    }
    assert_eq!(seen, vec![Direction::Up, Direction::Right, Direction::Down, Direction::Left]);
    assert_eq!(direction, Direction::Up);
}

#[test]
fn test_none_stays_put() {
    assert_eq!(Direction::None.as_ivec2(), IVec2::ZERO);
    assert_eq!(Direction::None.opposite(), Direction::None);
    assert_eq!(Direction::default(), Direction::None);
}

#[test]
fn test_tie_break_order() {
    assert_eq!(DIRECTIONS, [Direction::Up, Direction::Left, Direction::Down, Direction::Right]);
    assert!(DIRECTIONS.windows(2).all(|pair| pair[0] < pair[1]));
}
