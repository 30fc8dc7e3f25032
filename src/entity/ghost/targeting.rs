//! Chase targets, one strategy per ghost.

use glam::IVec2;

use crate::entity::ghost::GhostType;
use crate::map::Direction;

/// Distance, in tiles, inside which the opportunist gives up and heads for its corner.
const OPPORTUNIST_SHYNESS: f32 = 8.0;

/// The part of the round every ghost can see, taken once per frame before the ghosts move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChaseView {
    pub player_grid: IVec2,
    pub player_facing: Direction,
    pub chaser_grid: IVec2,
}

/// What a ghost may look at when picking its chase target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetInput {
    pub player_grid: IVec2,
    pub player_facing: Direction,
    /// Grid position of the chaser, which the flanker pivots around.
    pub chaser_grid: IVec2,
    pub own_grid: IVec2,
    pub scatter_target: IVec2,
}

pub type TargetingStrategy = fn(&TargetInput) -> IVec2;

/// Strategies indexed by [`GhostType`] discriminant.
pub const TARGETING: [TargetingStrategy; 4] = [direct, ambush, flank, opportunist];

pub fn strategy(ghost_type: GhostType) -> TargetingStrategy {
    TARGETING[ghost_type as usize]
}

/// The tile `tiles` ahead of the player.
///
/// Facing up also shifts the point the same distance left.
fn ahead_of_player(input: &TargetInput, tiles: i32) -> IVec2 {
    let mut point = input.player_grid + input.player_facing.as_ivec2() * tiles;
    if input.player_facing == Direction::Up {
        point.x -= tiles;
    }
    point
}

fn direct(input: &TargetInput) -> IVec2 {
    input.player_grid
}

fn ambush(input: &TargetInput) -> IVec2 {
    ahead_of_player(input, 4)
}

fn flank(input: &TargetInput) -> IVec2 {
    let pivot = ahead_of_player(input, 2);
    pivot + (pivot - input.chaser_grid)
}

fn opportunist(input: &TargetInput) -> IVec2 {
    if input.own_grid.as_vec2().distance(input.player_grid.as_vec2()) >= OPPORTUNIST_SHYNESS {
        input.player_grid
    } else {
        input.scatter_target
    }
}
