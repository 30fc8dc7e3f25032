//! Deciding when caged ghosts leave the house.
//!
//! Ghosts are released by pellet counting. Normally each caged ghost has a personal
//! counter, and only the first one in release order counts. After the player dies, a
//! single global counter takes over for the rest of the round. Independently, a timer
//! forces the next ghost out when the player stops eating.

use smallvec::SmallVec;
use tracing::debug;

use crate::entity::ghost::{Ghost, GhostState, GhostType};
use crate::game::context::SimContext;
use crate::game::timing::{global_release_threshold, pellet_timer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseScheduler {
    global_active: bool,
    global_counter: u32,
    pellet_timer: u32,
    pellet_timer_start: u32,
}

impl ReleaseScheduler {
    pub fn new(round: u32) -> Self {
        let start = pellet_timer(round);
        Self {
            global_active: false,
            global_counter: 0,
            pellet_timer: start,
            pellet_timer_start: start,
        }
    }

    pub fn is_global_active(&self) -> bool {
        self.global_active
    }

    pub fn global_counter(&self) -> u32 {
        self.global_counter
    }

    pub fn pellet_timer(&self) -> u32 {
        self.pellet_timer
    }

    pub fn activate_global(&mut self) {
        if !self.global_active {
            debug!("Global pellet counter activated");
        }
        self.global_active = true;
    }

    pub fn deactivate_global(&mut self) {
        self.global_active = false;
    }

    pub fn reset_global_counter(&mut self) {
        self.global_counter = 0;
    }

    pub fn reload_timer(&mut self) {
        self.pellet_timer = self.pellet_timer_start;
    }

    /// Runs the release bookkeeping for one frame in which `pellets_eaten` pellets were eaten.
    ///
    /// `ghosts` is indexed by [`GhostType`] discriminant.
    ///
    /// # Returns
    ///
    /// The ghosts released on this frame.
    pub fn update(&mut self, pellets_eaten: u32, ghosts: &mut [Ghost; 4], ctx: &SimContext) -> SmallVec<[GhostType; 2]> {
        let mut released = SmallVec::new();

        if self.pellet_timer > 0 {
            self.pellet_timer -= 1;
        } else {
            if let Some(ghost_type) = first_caged(ghosts) {
                debug!(ghost = ghost_type.as_ref(), "Pellet timer expired");
                ghosts[ghost_type as usize].release(ctx);
                released.push(ghost_type);
            }
            self.reload_timer();
        }

        if pellets_eaten == 0 {
            return released;
        }
        self.reload_timer();

        if self.global_active {
            self.global_counter += pellets_eaten;
            for ghost_type in GhostType::RELEASE_ORDER {
                let ghost = &mut ghosts[ghost_type as usize];
                if ghost.state() == GhostState::Home && global_release_threshold(ghost_type) == Some(self.global_counter) {
                    debug!(ghost = ghost_type.as_ref(), counter = self.global_counter, "Global counter release");
                    ghost.release(ctx);
                    released.push(ghost_type);
                }
            }
        } else if let Some(ghost_type) = first_caged(ghosts) {
            let ghost = &mut ghosts[ghost_type as usize];
            if ghost.add_pellets(pellets_eaten) {
                ghost.release(ctx);
                released.push(ghost_type);
            }
        }

        released
    }
}

/// The first ghost in release order that is still in the house.
fn first_caged(ghosts: &[Ghost; 4]) -> Option<GhostType> {
    GhostType::RELEASE_ORDER
        .into_iter()
        .find(|&ghost_type| ghosts[ghost_type as usize].state() == GhostState::Home)
}
