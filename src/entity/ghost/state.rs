//! The ghost state machine and the Scatter/Chase mode cycle.

use strum_macros::AsRefStr;
use tracing::{debug, trace};

use crate::constants::animation::{FRIGHTENED_FLASH_INTERVAL, GHOST_BODY_INTERVAL};
use crate::constants::timing::DEAD_SCORE_DISPLAY;
use crate::constants::{HOUSE_BOTTOM_Y, HOUSE_CENTER_Y, HOUSE_ENTRANCE_TARGET, HOUSE_EXIT, HOUSE_TOP_Y};
use crate::entity::ghost::targeting::{self, ChaseView, TargetInput};
use crate::entity::ghost::{Ghost, GhostFlags, GhostType};
use crate::game::context::SimContext;
use crate::game::timing::{mode_durations, MODE_PHASES};
use crate::map::{Direction, Tile, TileMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
pub enum GhostState {
    /// Waiting for the round to start.
    Idle,
    Scatter,
    Chase,
    /// Just eaten; the capture score is shown in place of the body.
    Dead,
    /// Eyes travelling back to the house.
    GoingHome,
    EnteringHome,
    /// Caged, bobbing up and down until released.
    Home,
    LeavingHome,
}

impl GhostState {
    /// Eaten ghosts on their way back inside, which ignore fright and freezes.
    pub fn is_returning(&self) -> bool {
        matches!(self, GhostState::Dead | GhostState::GoingHome | GhostState::EnteringHome)
    }

    /// Whether the ghost is roaming the maze and can kill the player.
    pub fn is_hunting(&self) -> bool {
        matches!(self, GhostState::Scatter | GhostState::Chase | GhostState::LeavingHome)
    }
}

/// Cursor over the alternating Scatter/Chase phases of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeCycle {
    durations: [u32; MODE_PHASES],
    phase: usize,
    remaining: u32,
}

impl ModeCycle {
    pub fn new(round: u32) -> Self {
        let durations = mode_durations(round);
        Self {
            durations,
            phase: 0,
            remaining: durations[0],
        }
    }

    pub fn reset(&mut self) {
        self.phase = 0;
        self.remaining = self.durations[0];
    }

    pub fn phase(&self) -> usize {
        self.phase
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// The mode of the running phase. Once every phase has run out, ghosts chase for good.
    pub fn current_mode(&self) -> GhostState {
        if self.phase >= MODE_PHASES || self.phase % 2 == 1 {
            GhostState::Chase
        } else {
            GhostState::Scatter
        }
    }

    /// Counts one frame off the running phase.
    ///
    /// # Returns
    ///
    /// The new mode when a phase ran out on this frame.
    pub fn tick(&mut self) -> Option<GhostState> {
        if self.phase >= MODE_PHASES {
            return None;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return None;
        }

        self.phase += 1;
        if let Some(&duration) = self.durations.get(self.phase) {
            self.remaining = duration;
        }
        Some(self.current_mode())
    }
}

impl Ghost {
    /// Transitions to `state`, running its entry actions.
    pub fn set_state(&mut self, state: GhostState, ctx: &SimContext) {
        let previous = self.state;
        self.state = state;
        debug!(ghost = self.ghost_type.as_ref(), from = previous.as_ref(), to = state.as_ref(), "Ghost state changed");

        if previous == GhostState::Idle && state != GhostState::Idle {
            self.mode.reset();
        }

        match state {
            GhostState::Idle | GhostState::EnteringHome => {}
            GhostState::Scatter => {
                if previous == GhostState::Chase {
                    self.flags.insert(GhostFlags::FORCE_REVERSE);
                }
                self.target = self.ghost_type.scatter_target();
            }
            GhostState::Chase => {
                if previous == GhostState::Scatter {
                    self.flags.insert(GhostFlags::FORCE_REVERSE);
                }
                self.target = self.ghost_type.scatter_target();
            }
            GhostState::Dead => {
                if previous == GhostState::LeavingHome {
                    self.movement.desired = Direction::Left;
                    self.consume_leave_right();
                }
                self.score_index = ctx.multiplier.trailing_zeros().min(3) as u8;
                self.dead_timer = DEAD_SCORE_DISPLAY;
            }
            GhostState::GoingHome => {
                self.target = HOUSE_ENTRANCE_TARGET;
            }
            GhostState::Home => {
                self.bobbing_up = true;
                if self.ghost_type == GhostType::Chaser {
                    self.set_state(GhostState::LeavingHome, ctx);
                }
            }
            GhostState::LeavingHome => {
                self.movement.desired = match self.ghost_type {
                    GhostType::Chaser | GhostType::Ambusher => Direction::Up,
                    GhostType::Flanker => Direction::Right,
                    GhostType::Opportunist => Direction::Left,
                };
            }
        }
    }

    /// Sends a caged ghost out of the house.
    pub fn release(&mut self, ctx: &SimContext) {
        if self.state == GhostState::Home {
            debug!(ghost = self.ghost_type.as_ref(), pellets = self.pellet_counter, "Releasing ghost");
            self.set_state(GhostState::LeavingHome, ctx);
        }
    }

    /// Turns a pending leave-right into a reversal at the next tile boundary.
    fn consume_leave_right(&mut self) {
        if self.flags.contains(GhostFlags::LEAVE_RIGHT) {
            self.movement.settle();
            self.flags.insert(GhostFlags::FORCE_REVERSE);
            self.flags.remove(GhostFlags::LEAVE_RIGHT);
        }
    }

    /// Runs one sub-step. A frame is two sub-steps, the second with `second` set.
    pub fn update(&mut self, map: &TileMap, ctx: &mut SimContext, view: &ChaseView, second: bool) {
        if self.state == GhostState::Idle {
            return;
        }

        if self.freeze_frames > 0 {
            self.freeze_frames -= 1;
            if !self.state.is_returning() {
                return;
            }
        }

        if second && ctx.frame % GHOST_BODY_INTERVAL == 0 {
            self.body_frame ^= 1;
        }

        if second && !self.is_frightened() {
            self.advance_mode(ctx);
        }

        if self.flags.contains(GhostFlags::FORCE_REVERSE) && self.movement.entered_new_tile() {
            if map.tile_at(self.movement.grid()) == Tile::Teleport {
                return;
            }
            self.movement.current = self.movement.current.opposite();
            self.movement.desired = self.movement.current;
            self.flags.remove(GhostFlags::FORCE_REVERSE);
            trace!(ghost = self.ghost_type.as_ref(), direction = ?self.movement.current, "Forced reversal");
            return;
        }

        if second && self.is_frightened() {
            if ctx.fright_timer == 0 {
                self.flags.remove(GhostFlags::FRIGHTENED | GhostFlags::FLASH_WHITE);
                debug!(ghost = self.ghost_type.as_ref(), "Fright ended");
            } else if ctx.fright_timer <= ctx.fright.flash_start && ctx.frame % FRIGHTENED_FLASH_INTERVAL == 0 {
                self.flags.toggle(GhostFlags::FLASH_WHITE);
            }
        }

        if self.is_frightened() && !matches!(self.state, GhostState::Home | GhostState::LeavingHome) {
            self.update_frightened(map, ctx);
            return;
        }

        match self.state {
            GhostState::Idle => {}
            GhostState::Scatter => {
                self.target = self.ghost_type.scatter_target();
                self.update_roaming(map);
            }
            GhostState::Chase => {
                let input = TargetInput {
                    player_grid: view.player_grid,
                    player_facing: view.player_facing,
                    chaser_grid: view.chaser_grid,
                    own_grid: self.movement.grid(),
                    scatter_target: self.ghost_type.scatter_target(),
                };
                self.target = targeting::strategy(self.ghost_type)(&input);
                self.update_roaming(map);
            }
            GhostState::Dead => {
                if self.dead_timer > 0 {
                    self.dead_timer -= 1;
                } else {
                    self.set_state(GhostState::GoingHome, ctx);
                }
            }
            GhostState::GoingHome => self.update_going_home(map, ctx),
            GhostState::EnteringHome => self.update_entering_home(ctx),
            GhostState::Home => self.update_home(),
            GhostState::LeavingHome => self.update_leaving_home(ctx),
        }
    }

    fn advance_mode(&mut self, ctx: &SimContext) {
        let Some(mode) = self.mode.tick() else {
            return;
        };

        debug!(ghost = self.ghost_type.as_ref(), mode = mode.as_ref(), phase = self.mode.phase(), "Mode changed");
        self.next_state = mode;
        match self.state {
            GhostState::Scatter | GhostState::Chase => self.set_state(mode, ctx),
            GhostState::Home | GhostState::LeavingHome => self.flags.insert(GhostFlags::LEAVE_RIGHT),
            _ => {}
        }
    }

    /// Scatter and Chase movement: decide once per tile, then travel.
    fn update_roaming(&mut self, map: &TileMap) {
        self.update_tile_types(map);
        if self.at_decision_gate() {
            self.movement.desired = self.choose_direction(map);
        }
        let moves = self.advance_speed();
        self.travel(map, moves);
    }

    fn update_frightened(&mut self, map: &TileMap, ctx: &mut SimContext) {
        self.update_tile_types(map);
        if self.at_decision_gate() {
            self.movement.desired = self.random_direction(map, &mut ctx.rng);
        }
        let moves = self.advance_speed();
        self.travel(map, moves);
    }

    fn update_going_home(&mut self, map: &TileMap, ctx: &SimContext) {
        if self.movement.center() == HOUSE_EXIT {
            self.set_state(GhostState::EnteringHome, ctx);
            return;
        }

        self.target = HOUSE_ENTRANCE_TARGET;
        self.update_tile_types(map);
        if self.at_decision_gate() {
            self.movement.desired = self.choose_direction(map);
        }
        let moves = self.advance_speed();
        self.travel(map, moves);

        if self.movement.center() == HOUSE_EXIT {
            self.set_state(GhostState::EnteringHome, ctx);
        }
    }

    fn update_entering_home(&mut self, ctx: &SimContext) {
        let center = self.movement.center();
        let spawn = self.ghost_type.spawn();
        let resting_y = match self.ghost_type {
            GhostType::Chaser | GhostType::Ambusher => HOUSE_CENTER_Y,
            GhostType::Flanker | GhostType::Opportunist => spawn.y,
        };

        if center.y != resting_y {
            self.movement.current = Direction::Down;
            self.movement.move_towards_y(resting_y, 1);
        } else if matches!(self.ghost_type, GhostType::Flanker | GhostType::Opportunist) && center.x != spawn.x {
            self.movement.current = if spawn.x < center.x { Direction::Left } else { Direction::Right };
            self.movement.move_towards_x(spawn.x, 1);
        } else {
            self.set_state(GhostState::Home, ctx);
        }
        self.movement.desired = self.movement.current;
    }

    fn update_home(&mut self) {
        if self.advance_speed() {
            if self.bobbing_up {
                self.movement.move_towards_y(HOUSE_TOP_Y, 1);
                if self.movement.center().y == HOUSE_TOP_Y {
                    self.bobbing_up = false;
                    self.movement.desired = Direction::Down;
                }
            } else {
                self.movement.move_towards_y(HOUSE_BOTTOM_Y, 1);
                if self.movement.center().y == HOUSE_BOTTOM_Y {
                    self.bobbing_up = true;
                    self.movement.desired = Direction::Up;
                }
            }
        }
        self.movement.current = self.movement.desired;
    }

    fn update_leaving_home(&mut self, ctx: &SimContext) {
        if !self.advance_speed() {
            return;
        }

        let center = self.movement.center();
        if center.x != HOUSE_EXIT.x {
            self.movement.desired = if self.ghost_type == GhostType::Flanker {
                Direction::Right
            } else {
                Direction::Left
            };
            self.movement.move_towards_x(HOUSE_EXIT.x, 1);
        } else if center.y != HOUSE_EXIT.y {
            self.movement.desired = Direction::Up;
            self.movement.move_towards_y(HOUSE_EXIT.y, 1);
        } else {
            self.movement.desired = Direction::Left;
            self.consume_leave_right();
            let next = self.next_state;
            self.set_state(next, ctx);
        }
        self.movement.current = self.movement.desired;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_cycle_alternates_then_chases() {
        let mut cycle = ModeCycle::new(1);
        assert_eq!(cycle.current_mode(), GhostState::Scatter);

        let mut switches = Vec::new();
        for _ in 0..10_000 {
            if let Some(mode) = cycle.tick() {
                switches.push(mode);
            }
        }

        assert_eq!(
            switches,
            vec![
                GhostState::Chase,
                GhostState::Scatter,
                GhostState::Chase,
                GhostState::Scatter,
                GhostState::Chase,
                GhostState::Scatter,
                GhostState::Chase,
            ]
        );
        assert_eq!(cycle.tick(), None);
        assert_eq!(cycle.current_mode(), GhostState::Chase);
    }

    #[test]
    fn test_first_scatter_lasts_its_duration() {
        let mut cycle = ModeCycle::new(1);
        for _ in 0..419 {
            assert_eq!(cycle.tick(), None);
        }
        assert_eq!(cycle.tick(), Some(GhostState::Chase));
        assert_eq!(cycle.remaining(), 1200);
    }

    #[test]
    fn test_reset_rewinds() {
        let mut cycle = ModeCycle::new(2);
        for _ in 0..500 {
            cycle.tick();
        }
        cycle.reset();
        assert_eq!(cycle, ModeCycle::new(2));
    }

    #[test]
    fn test_state_predicates() {
        assert!(GhostState::GoingHome.is_returning());
        assert!(!GhostState::Home.is_returning());
        assert!(GhostState::LeavingHome.is_hunting());
        assert!(!GhostState::Dead.is_hunting());
    }
}
