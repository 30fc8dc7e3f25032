use glam::IVec2;
use strum_macros::AsRefStr;
use tracing::{debug, trace};

use crate::constants::animation::PLAYER_BODY_INTERVAL;
use crate::constants::timing::DEATH_ANIMATION_FRAMES;
use crate::constants::{PLAYER_START, PLAYER_TILE_CENTER};
use crate::entity::movement::Movement;
use crate::entity::speed::PlayerSpeed;
use crate::game::context::SimContext;
use crate::map::{Direction, TileMap};

/// Frames in the chomping cycle.
const BODY_FRAMES: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
pub enum PlayerState {
    /// Stopped against a wall, or waiting for the round to start.
    Idle,
    Moving,
    Dying,
    LevelComplete,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub(crate) movement: Movement,
    state: PlayerState,
    energized: bool,
    speed: PlayerSpeed,
    freeze_frames: u32,
    frame: u8,
    death_frame: u8,
    round: u32,
}

impl Player {
    pub fn new(round: u32) -> Self {
        Self {
            movement: Movement::new(PLAYER_START, PLAYER_TILE_CENTER, Direction::Left),
            state: PlayerState::Idle,
            energized: false,
            speed: PlayerSpeed::for_round(round),
            freeze_frames: 0,
            frame: 0,
            death_frame: 0,
            round,
        }
    }

    /// Returns the player to the start, idle and facing left.
    pub fn reset(&mut self) {
        *self = Self::new(self.round);
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn set_state(&mut self, state: PlayerState) {
        if self.state != state {
            debug!(from = self.state.as_ref(), to = state.as_ref(), "Player state changed");
        }
        if state == PlayerState::Dying {
            self.death_frame = 0;
        }
        self.state = state;
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

    pub fn set_desired_direction(&mut self, direction: Direction) {
        self.movement.desired = direction;
    }

    pub fn is_energized(&self) -> bool {
        self.energized
    }

    pub fn freeze_frames(&self) -> u32 {
        self.freeze_frames
    }

    pub fn add_freeze_frames(&mut self, frames: u32) {
        self.freeze_frames += frames;
    }

    pub fn set_freeze_frames(&mut self, frames: u32) {
        self.freeze_frames = frames;
    }

    pub fn frame(&self) -> u8 {
        self.frame
    }

    pub fn death_frame(&self) -> u8 {
        self.death_frame
    }

    /// Puts the player at `center` facing `direction`.
    pub fn place(&mut self, center: IVec2, direction: Direction) {
        self.movement.place(center);
        self.movement.current = direction;
        self.movement.desired = direction;
    }

    /// Starts or restarts the fright window.
    ///
    /// The capture multiplier goes back to 1 and the shared timer is reloaded. Does nothing
    /// in rounds where ghosts can no longer be frightened.
    pub fn energize(&mut self, ctx: &mut SimContext) {
        if ctx.fright_immune() {
            return;
        }
        ctx.multiplier = 1;
        ctx.fright_timer = ctx.fright.duration;
        self.energized = true;
        debug!(frames = ctx.fright.duration, "Player energized");
    }

    /// Advances the death animation by one frame; the last frame leaves the player idle.
    pub fn animate_death(&mut self) {
        if self.death_frame + 1 >= DEATH_ANIMATION_FRAMES {
            self.death_frame = DEATH_ANIMATION_FRAMES - 1;
            self.state = PlayerState::Idle;
        } else {
            self.death_frame += 1;
        }
    }

    /// Runs one sub-step. A frame is two sub-steps, the second with `second` set.
    pub fn update(&mut self, map: &TileMap, ctx: &mut SimContext, second: bool) {
        if self.freeze_frames > 0 {
            self.freeze_frames -= 1;
            return;
        }

        if second && self.energized {
            if ctx.fright_timer > 0 {
                ctx.fright_timer -= 1;
            } else {
                ctx.multiplier = 1;
                self.energized = false;
                debug!("Energizer wore off");
            }
        }

        let desired = self.movement.desired;
        if desired != self.movement.current
            && desired != Direction::None
            && !map.next_tile(desired, self.movement.grid()).is_blocking()
        {
            trace!(from = ?self.movement.current, to = ?desired, grid = ?self.movement.grid(), "Player turned");
            self.movement.current = desired;
            self.movement.desired = Direction::None;
            self.state = PlayerState::Moving;
        }

        if self.state != PlayerState::Moving {
            return;
        }

        if map.next_tile(self.movement.current, self.movement.grid()).is_blocking() && self.movement.is_centered() {
            self.state = PlayerState::Idle;
            self.frame = 0;
            return;
        }

        let pattern = if self.energized {
            &mut self.speed.frightened
        } else {
            &mut self.speed.normal
        };
        if pattern.advance() {
            self.movement.step(self.movement.current, 1);
        }
        self.movement.wrap_teleport(map);

        if second && ctx.frame % PLAYER_BODY_INTERVAL == 0 {
            self.frame = (self.frame + 1) % BODY_FRAMES;
        }

        self.movement.corner();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player() {
        let player = Player::new(1);
        assert_eq!(player.center(), IVec2::new(112, 212));
        assert_eq!(player.current_direction(), Direction::Left);
        assert_eq!(player.state(), PlayerState::Idle);
        assert!(!player.is_energized());
    }

    #[test]
    fn test_energize_reloads_timer_and_multiplier() {
        let mut player = Player::new(1);
        let mut ctx = SimContext::new(1, 0);
        ctx.multiplier = 4;
        player.energize(&mut ctx);
        assert!(player.is_energized());
        assert_eq!(ctx.fright_timer, 360);
        assert_eq!(ctx.multiplier, 1);
    }

    #[test]
    fn test_energize_is_ignored_when_immune() {
        let mut player = Player::new(17);
        let mut ctx = SimContext::new(17, 0);
        player.energize(&mut ctx);
        assert!(!player.is_energized());
        assert_eq!(ctx.fright_timer, 0);
    }

    #[test]
    fn test_death_animation_ends_idle() {
        let mut player = Player::new(1);
        player.set_state(PlayerState::Dying);
        for _ in 0..DEATH_ANIMATION_FRAMES {
            player.animate_death();
        }
        assert_eq!(player.state(), PlayerState::Idle);
        assert_eq!(player.death_frame(), DEATH_ANIMATION_FRAMES - 1);
    }
}
