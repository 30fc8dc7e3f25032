//! The four ghosts: identity, flags, movement and direction choice.
//!
//! The behaviour that depends on the current state lives in [`state`].

pub mod frightened;
pub mod state;
pub mod targeting;

use bitflags::bitflags;
use glam::IVec2;
use smallvec::SmallVec;
use strum_macros::{AsRefStr, EnumCount, EnumIter};
use tracing::{trace, warn};

use crate::constants::GHOST_TILE_CENTER;
use crate::entity::movement::Movement;
use crate::entity::speed::GhostSpeed;
use crate::game::context::SimContext;
use crate::game::timing::personal_pellet_limit;
use crate::map::{Direction, Tile, TileMap, DIRECTIONS};

use self::frightened::FrightRng;
pub use self::state::{GhostState, ModeCycle};
pub use self::targeting::ChaseView;

/// The four ghost identities, each with its own chase strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AsRefStr, EnumCount, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum GhostType {
    /// Heads straight for the player. Never waits in the house.
    Chaser,
    /// Aims a few tiles ahead of the player.
    Ambusher,
    /// Mirrors the chaser around a point ahead of the player.
    Flanker,
    /// Chases from afar, retreats when close.
    Opportunist,
}

impl GhostType {
    pub const ALL: [GhostType; 4] = [
        GhostType::Chaser,
        GhostType::Ambusher,
        GhostType::Flanker,
        GhostType::Opportunist,
    ];

    /// Order in which caged ghosts are considered for release.
    pub const RELEASE_ORDER: [GhostType; 3] = [GhostType::Opportunist, GhostType::Flanker, GhostType::Ambusher];

    /// Corner tile targeted while scattering.
    pub fn scatter_target(&self) -> IVec2 {
        match self {
            GhostType::Chaser => IVec2::new(25, 0),
            GhostType::Ambusher => IVec2::new(2, 0),
            GhostType::Flanker => IVec2::new(27, 34),
            GhostType::Opportunist => IVec2::new(0, 34),
        }
    }

    /// Starting pixel centre. Every ghost but the chaser starts inside the house.
    pub fn spawn(&self) -> IVec2 {
        match self {
            GhostType::Chaser => IVec2::new(114, 119),
            GhostType::Ambusher => IVec2::new(114, 143),
            GhostType::Flanker => IVec2::new(98, 143),
            GhostType::Opportunist => IVec2::new(130, 143),
        }
    }

    pub fn spawn_direction(&self) -> Direction {
        match self {
            GhostType::Chaser => Direction::Left,
            GhostType::Ambusher => Direction::Down,
            GhostType::Flanker | GhostType::Opportunist => Direction::Up,
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GhostFlags: u8 {
        const FRIGHTENED = 1 << 0;
        /// The frightened body is drawn white instead of blue.
        const FLASH_WHITE = 1 << 1;
        /// Reverse once outside the house, because the mode changed while inside.
        const LEAVE_RIGHT = 1 << 2;
        /// Reverse at the next tile boundary.
        const FORCE_REVERSE = 1 << 3;
        const VISIBLE = 1 << 4;
    }
}

#[derive(Debug, Clone)]
pub struct Ghost {
    ghost_type: GhostType,
    pub(crate) movement: Movement,
    target: IVec2,
    flags: GhostFlags,
    state: GhostState,
    /// The Scatter/Chase mode to adopt once out of the house.
    next_state: GhostState,
    mode: ModeCycle,
    speed: GhostSpeed,
    freeze_frames: u32,
    current_tile: Tile,
    next_tile: Tile,
    pellet_counter: u32,
    pellet_limit: u32,
    /// Sub-steps left showing the capture score.
    dead_timer: u32,
    score_index: u8,
    bobbing_up: bool,
    body_frame: u8,
    round: u32,
}

impl Ghost {
    pub fn new(ghost_type: GhostType, round: u32) -> Self {
        Self {
            ghost_type,
            movement: Movement::new(ghost_type.spawn(), GHOST_TILE_CENTER, ghost_type.spawn_direction()),
            target: ghost_type.scatter_target(),
            flags: GhostFlags::VISIBLE,
            state: GhostState::Idle,
            next_state: GhostState::Scatter,
            mode: ModeCycle::new(round),
            speed: GhostSpeed::for_round(round),
            freeze_frames: 0,
            current_tile: Tile::Disabled,
            next_tile: Tile::Disabled,
            pellet_counter: 0,
            pellet_limit: personal_pellet_limit(ghost_type, round),
            dead_timer: 0,
            score_index: 0,
            bobbing_up: true,
            body_frame: 0,
            round,
        }
    }

    /// Returns the ghost to its spawn, idle, with fresh speed patterns.
    ///
    /// The personal pellet counter survives, so a ghost released before a death stays eligible.
    pub fn reset(&mut self) {
        let pellet_counter = self.pellet_counter;
        *self = Self::new(self.ghost_type, self.round);
        self.pellet_counter = pellet_counter;
    }

    pub fn ghost_type(&self) -> GhostType {
        self.ghost_type
    }

    pub fn state(&self) -> GhostState {
        self.state
    }

    pub fn next_state(&self) -> GhostState {
        self.next_state
    }

    pub fn target(&self) -> IVec2 {
        self.target
    }

    pub fn flags(&self) -> GhostFlags {
        self.flags
    }

    pub fn center(&self) -> IVec2 {
        self.movement.center()
    }

    pub fn grid(&self) -> IVec2 {
        self.movement.grid()
    }

    pub fn current_direction(&self) -> Direction {
        self.movement.current
    }

    pub fn desired_direction(&self) -> Direction {
        self.movement.desired
    }

    pub fn is_frightened(&self) -> bool {
        self.flags.contains(GhostFlags::FRIGHTENED)
    }

    pub fn is_flashing_white(&self) -> bool {
        self.flags.contains(GhostFlags::FLASH_WHITE)
    }

    pub fn is_visible(&self) -> bool {
        self.flags.contains(GhostFlags::VISIBLE)
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(GhostFlags::VISIBLE, visible);
    }

    pub fn freeze_frames(&self) -> u32 {
        self.freeze_frames
    }

    pub fn set_freeze_frames(&mut self, frames: u32) {
        self.freeze_frames = frames;
    }

    pub fn pellet_counter(&self) -> u32 {
        self.pellet_counter
    }

    pub fn pellet_limit(&self) -> u32 {
        self.pellet_limit
    }

    /// Credits pellets to the personal counter.
    ///
    /// # Returns
    ///
    /// Whether the counter has reached the limit.
    pub fn add_pellets(&mut self, count: u32) -> bool {
        self.pellet_counter += count;
        self.pellet_counter >= self.pellet_limit
    }

    /// Capture-score sprite shown while dead: 0 for 200 points up to 3 for 1600.
    pub fn score_index(&self) -> u8 {
        self.score_index
    }

    pub fn body_frame(&self) -> u8 {
        self.body_frame
    }

    pub fn mode(&self) -> &ModeCycle {
        &self.mode
    }

    /// Puts the ghost at `center` facing `direction`, as if it had always been there.
    pub fn place(&mut self, center: IVec2, direction: Direction) {
        self.movement.place(center);
        self.movement.current = direction;
        self.movement.desired = direction;
    }

    /// Sets or clears the frightened flag.
    ///
    /// Eaten ghosts cannot be frightened again until they are home. Becoming frightened
    /// schedules a reversal at the next tile boundary, or on leaving the house. Immune rounds
    /// still get the reversal but keep the flag clear.
    pub fn set_frightened(&mut self, frightened: bool, ctx: &SimContext) {
        if !frightened {
            self.flags.remove(GhostFlags::FRIGHTENED);
            return;
        }

        if self.state.is_returning() || self.state == GhostState::Idle {
            return;
        }

        self.flags.remove(GhostFlags::FLASH_WHITE);
        self.movement.settle();
        if self.state == GhostState::Home {
            self.flags.insert(GhostFlags::LEAVE_RIGHT);
        } else {
            self.flags.insert(GhostFlags::FORCE_REVERSE);
        }
        self.flags.set(GhostFlags::FRIGHTENED, !ctx.fright_immune());
    }

    fn update_tile_types(&mut self, map: &TileMap) {
        self.current_tile = map.tile_at(self.movement.grid());
        self.next_tile = map.next_tile(self.movement.current, self.movement.grid());
    }

    /// True on the sub-step a decision should be made for the tile ahead.
    fn at_decision_gate(&self) -> bool {
        self.next_tile.is_decision_point() && self.movement.entered_new_tile()
    }

    /// Advances the speed pattern that applies right now.
    ///
    /// # Returns
    ///
    /// Whether the ghost may move a pixel this sub-step.
    fn advance_speed(&mut self) -> bool {
        match self.state {
            GhostState::Home | GhostState::LeavingHome => self.speed.tunnel.advance(),
            GhostState::GoingHome | GhostState::EnteringHome => true,
            _ if self.current_tile == Tile::Tunnel => self.speed.tunnel.advance(),
            _ if self.is_frightened() => self.speed.frightened.advance(),
            _ => self.speed.normal.advance(),
        }
    }

    /// Commits the desired direction at a decision tile's centre, then moves and wraps.
    fn travel(&mut self, map: &TileMap, moves: bool) {
        if self.current_tile.is_decision_point() && self.movement.is_centered() {
            self.movement.current = self.movement.desired;
        }
        if moves {
            self.movement.step(self.movement.current, 1);
        }
        self.movement.wrap_teleport(map);
    }

    /// Picks the direction to take at the tile ahead, steering toward the current target.
    ///
    /// The reverse of the current direction is never chosen unless nothing else is legal.
    /// Ties in distance go to the earlier of Up, Left, Down, Right.
    pub fn choose_direction(&self, map: &TileMap) -> Direction {
        let current = self.movement.current;
        let reverse = current.opposite();
        let ahead = self.movement.grid() + current.as_ivec2();
        let upward_restricted = map.next_tile(current, self.movement.grid()) == Tile::Restricted;

        let candidates: SmallVec<[Direction; 4]> = DIRECTIONS
            .iter()
            .copied()
            .filter(|&d| d != reverse)
            .filter(|&d| !(d == Direction::Up && upward_restricted))
            .filter(|&d| !map.tile_at(ahead + d.as_ivec2()).is_blocking())
            .collect();

        let chosen = match candidates.as_slice() {
            [] => {
                warn!(ghost = self.ghost_type.as_ref(), grid = ?self.movement.grid(), "No legal direction, reversing");
                reverse
            }
            [only] => *only,
            _ => {
                let mut best = candidates[0];
                let mut best_distance = (ahead + best.as_ivec2() - self.target).length_squared();
                for &candidate in &candidates[1..] {
                    let distance = (ahead + candidate.as_ivec2() - self.target).length_squared();
                    if distance < best_distance {
                        best = candidate;
                        best_distance = distance;
                    }
                }
                best
            }
        };

        trace!(ghost = self.ghost_type.as_ref(), target = ?self.target, candidates = ?candidates, chosen = ?chosen, "Chose direction");
        chosen
    }

    /// Picks a random legal direction for the tile ahead.
    ///
    /// Starting from a weighted sample, directions are tried clockwise until one is neither
    /// blocked nor a reversal.
    fn random_direction(&self, map: &TileMap, rng: &mut FrightRng) -> Direction {
        let reverse = self.movement.current.opposite();
        let ahead = self.movement.grid() + self.movement.current.as_ivec2();

        let mut direction = rng.sample();
        for _ in 0..DIRECTIONS.len() {
            if direction != reverse && !map.tile_at(ahead + direction.as_ivec2()).is_blocking() {
                return direction;
            }
            direction = direction.rotate_clockwise();
        }
        reverse
    }
}
