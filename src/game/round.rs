//! The round controller: one fixed step per frame.
//!
//! A round owns the player, the four ghosts, the collectibles and the shared
//! [`SimContext`]. Each call to [`Round::update`] advances exactly one frame.

use std::sync::Arc;

use glam::IVec2;
use strum_macros::AsRefStr;
use tracing::{debug, info, trace};

use crate::config::SimConfig;
use crate::constants::animation::{ONE_UP_BLINK, POWER_PELLET_BLINK};
use crate::constants::points::GHOST;
use crate::constants::timing::{
    COMPLETE_FLASH_END, COMPLETE_FLASH_INTERVAL, COMPLETE_FLASH_START, COMPLETE_SIGNAL, DEATH_ANIMATION_INTERVAL,
    DEATH_HIDE_GHOSTS, DEATH_RESTART, GHOST_EATEN_FREEZE, GHOST_EATEN_FREEZE_LIMIT, PELLET_FREEZE, POWER_PELLET_FREEZE,
};
use crate::constants::TILE_SIZE;
use crate::entity::ghost::{ChaseView, Ghost, GhostState, GhostType};
use crate::entity::item::{Item, ItemType};
use crate::entity::player::{Player, PlayerState};
use crate::events::{AudioEvent, RoundSignal};
use crate::game::context::SimContext;
use crate::game::release::ReleaseScheduler;
use crate::game::render::{
    Drawable, FrightenedColor, GameSprite, GhostSprite, MazeFlash, PlayerSprite, Rect, RenderSnapshot, ENTITY_SPRITE_SIZE,
    POWER_PELLET_SPRITE_SIZE,
};
use crate::game::score::Scoreboard;
use crate::map::{Direction, TileMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
pub enum RoundState {
    /// The "ready" pause before play, also replayed after a death.
    Intro,
    Playing,
    PlayerDeath,
    /// Every collectible is gone; the maze flashes.
    Complete,
}

#[derive(Debug, Clone)]
pub struct Round {
    map: Arc<TileMap>,
    ctx: SimContext,
    player: Player,
    /// Indexed by [`GhostType`] discriminant, which is also the update order.
    ghosts: [Ghost; 4],
    pellets: Vec<Item>,
    power_pellets: Vec<Item>,
    scheduler: ReleaseScheduler,
    state: RoundState,
    /// Frames spent in the current state.
    state_frames: u32,
    intro_frames: u32,
    maze: MazeFlash,
    one_up_visible: bool,
    events: Vec<AudioEvent>,
}

impl Round {
    pub fn new(map: Arc<TileMap>, pellets: &[IVec2], power_pellets: &[IVec2], round: u32, config: &SimConfig) -> Self {
        let seed = config.rng_seed.wrapping_add(u64::from(round.saturating_sub(1)));
        info!(round, pellets = pellets.len() + power_pellets.len(), "Starting round");

        Self {
            map,
            ctx: SimContext::new(round, seed),
            player: Player::new(round),
            ghosts: GhostType::ALL.map(|ghost_type| Ghost::new(ghost_type, round)),
            pellets: pellets.iter().map(|&grid| Item::new(grid, ItemType::Pellet)).collect(),
            power_pellets: power_pellets
                .iter()
                .map(|&grid| Item::new(grid, ItemType::PowerPellet))
                .collect(),
            scheduler: ReleaseScheduler::new(round),
            state: RoundState::Intro,
            state_frames: 0,
            intro_frames: config.intro_frames,
            maze: MazeFlash::Normal,
            one_up_visible: true,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn round(&self) -> u32 {
        self.ctx.round
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn ghosts(&self) -> &[Ghost; 4] {
        &self.ghosts
    }

    pub fn ghost(&self, ghost_type: GhostType) -> &Ghost {
        &self.ghosts[ghost_type as usize]
    }

    pub fn ghost_mut(&mut self, ghost_type: GhostType) -> &mut Ghost {
        &mut self.ghosts[ghost_type as usize]
    }

    pub fn context(&self) -> &SimContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut SimContext {
        &mut self.ctx
    }

    pub fn scheduler(&self) -> &ReleaseScheduler {
        &self.scheduler
    }

    /// Regular pellets still on the board.
    pub fn pellets_remaining(&self) -> usize {
        self.pellets.len()
    }

    pub fn power_pellets_remaining(&self) -> usize {
        self.power_pellets.len()
    }

    pub fn set_desired_direction(&mut self, direction: Direction) {
        self.player.set_desired_direction(direction);
    }

    /// Hands over the audio cues collected since the last call.
    pub fn drain_events(&mut self) -> Vec<AudioEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advances the round by one frame.
    pub fn update(&mut self, scoreboard: &mut Scoreboard) -> RoundSignal {
        let elapsed = self.state_frames;
        self.state_frames = self.state_frames.saturating_add(1);

        let signal = match self.state {
            RoundState::Intro => {
                self.update_intro(elapsed);
                RoundSignal::Continue
            }
            RoundState::Playing => {
                self.update_playing(scoreboard);
                RoundSignal::Continue
            }
            RoundState::PlayerDeath => self.update_player_death(elapsed, scoreboard),
            RoundState::Complete => self.update_complete(elapsed),
        };

        self.update_blinking();
        self.ctx.frame += 1;
        signal
    }

    fn enter_state(&mut self, state: RoundState) {
        debug!(from = self.state.as_ref(), to = state.as_ref(), frame = self.ctx.frame, "Round state changed");
        self.state = state;
        self.state_frames = 0;
    }

    fn update_intro(&mut self, elapsed: u32) {
        if elapsed < self.intro_frames {
            return;
        }

        for ghost in &mut self.ghosts {
            let state = if ghost.ghost_type() == GhostType::Chaser {
                GhostState::Scatter
            } else {
                GhostState::Home
            };
            ghost.set_state(state, &self.ctx);
        }
        self.player.set_state(PlayerState::Moving);
        self.scheduler.reload_timer();
        self.enter_state(RoundState::Playing);
    }

    fn update_playing(&mut self, scoreboard: &mut Scoreboard) {
        self.player.update(&self.map, &mut self.ctx, false);
        self.player.update(&self.map, &mut self.ctx, true);

        for ghost_type in GhostType::ALL {
            self.check_collision(ghost_type, scoreboard);
        }

        let eaten = self.consume_items(scoreboard);
        let released = self.scheduler.update(eaten, &mut self.ghosts, &self.ctx);
        if !released.is_empty() {
            trace!(?released, "Ghosts released");
        }

        for ghost_type in GhostType::ALL {
            let view = self.chase_view();
            let ghost = &mut self.ghosts[ghost_type as usize];
            ghost.update(&self.map, &mut self.ctx, &view, false);
            ghost.update(&self.map, &mut self.ctx, &view, true);
            self.check_collision(ghost_type, scoreboard);
        }
    }

    fn chase_view(&self) -> ChaseView {
        ChaseView {
            player_grid: self.player.grid(),
            player_facing: self.player.current_direction(),
            chaser_grid: self.ghosts[GhostType::Chaser as usize].grid(),
        }
    }

    /// Resolves contact between the player and one ghost.
    fn check_collision(&mut self, ghost_type: GhostType, scoreboard: &mut Scoreboard) {
        if self.state != RoundState::Playing {
            return;
        }

        let ghost = &mut self.ghosts[ghost_type as usize];
        if ghost.grid() != self.player.grid() || ghost.state() == GhostState::Dead {
            return;
        }

        if ghost.is_frightened() {
            ghost.set_state(GhostState::Dead, &self.ctx);
            ghost.set_frightened(false, &self.ctx);

            let points = u64::from(self.ctx.multiplier) * GHOST;
            scoreboard.add_points(points);
            debug!(ghost = ghost_type.as_ref(), points, "Ghost eaten");
            self.ctx.double_multiplier();

            self.player.add_freeze_frames(GHOST_EATEN_FREEZE);
            if self.player.freeze_frames() >= GHOST_EATEN_FREEZE_LIMIT {
                self.player.set_freeze_frames(GHOST_EATEN_FREEZE);
            }
            for ghost in &mut self.ghosts {
                ghost.set_freeze_frames(GHOST_EATEN_FREEZE);
            }
            self.events.push(AudioEvent::GhostEaten);
        } else if ghost.state().is_hunting() {
            debug!(ghost = ghost_type.as_ref(), grid = ?self.player.grid(), "Player caught");
            self.scheduler.reset_global_counter();
            self.scheduler.activate_global();
            self.events.push(AudioEvent::PlayerDied);
            self.enter_state(RoundState::PlayerDeath);
        }
    }

    /// Eats whatever lies on the player's tile.
    ///
    /// # Returns
    ///
    /// How many collectibles were eaten.
    fn consume_items(&mut self, scoreboard: &mut Scoreboard) -> u32 {
        if self.state != RoundState::Playing {
            return 0;
        }

        let grid = self.player.grid();
        let mut eaten = 0;

        if let Some(index) = self.pellets.iter().position(|item| item.grid == grid) {
            let item = self.pellets.swap_remove(index);
            scoreboard.add_points(item.item_type.points());
            self.player.add_freeze_frames(PELLET_FREEZE);
            self.events.push(AudioEvent::PelletEaten);
            trace!(grid = ?grid, remaining = self.pellets.len(), "Pellet eaten");
            eaten += 1;
        }

        if let Some(index) = self.power_pellets.iter().position(|item| item.grid == grid) {
            let item = self.power_pellets.remove(index);
            scoreboard.add_points(item.item_type.points());
            self.player.energize(&mut self.ctx);
            for ghost in &mut self.ghosts {
                ghost.set_frightened(true, &self.ctx);
            }
            self.player.add_freeze_frames(POWER_PELLET_FREEZE);
            self.events.push(AudioEvent::PowerPelletEaten);
            debug!(grid = ?grid, "Power pellet eaten");
            eaten += 1;
        }

        if self.pellets.is_empty() && self.power_pellets.is_empty() {
            info!(round = self.ctx.round, "Round cleared");
            self.scheduler.deactivate_global();
            self.player.set_state(PlayerState::LevelComplete);
            self.enter_state(RoundState::Complete);
        }

        eaten
    }

    fn update_player_death(&mut self, elapsed: u32, scoreboard: &mut Scoreboard) -> RoundSignal {
        if elapsed == DEATH_HIDE_GHOSTS {
            for ghost in &mut self.ghosts {
                ghost.set_visible(false);
            }
            self.player.set_state(PlayerState::Dying);
        } else if elapsed > DEATH_HIDE_GHOSTS
            && elapsed < DEATH_RESTART
            && (elapsed - DEATH_HIDE_GHOSTS) % DEATH_ANIMATION_INTERVAL == 0
        {
            self.player.animate_death();
        }

        if elapsed == DEATH_RESTART {
            scoreboard.lose_life();
            info!(lives = scoreboard.lives(), "Life lost");
            if scoreboard.is_game_over() {
                return RoundSignal::GameOver;
            }
            self.reset_entities();
            self.enter_state(RoundState::Intro);
        }

        RoundSignal::Continue
    }

    fn update_complete(&mut self, elapsed: u32) -> RoundSignal {
        if elapsed == COMPLETE_FLASH_START {
            for ghost in &mut self.ghosts {
                ghost.set_visible(false);
            }
            self.maze = MazeFlash::White;
        } else if elapsed > COMPLETE_FLASH_START
            && elapsed <= COMPLETE_FLASH_END
            && (elapsed - COMPLETE_FLASH_START) % COMPLETE_FLASH_INTERVAL == 0
        {
            self.maze = if ((elapsed - COMPLETE_FLASH_START) / COMPLETE_FLASH_INTERVAL) % 2 == 1 {
                MazeFlash::Blue
            } else {
                MazeFlash::White
            };
        }

        if elapsed >= COMPLETE_SIGNAL {
            return RoundSignal::RoundComplete;
        }
        RoundSignal::Continue
    }

    fn update_blinking(&mut self) {
        if self.state != RoundState::Intro && self.ctx.frame % POWER_PELLET_BLINK == 0 {
            for item in &mut self.power_pellets {
                item.visible = !item.visible;
            }
        }
        if self.ctx.frame % ONE_UP_BLINK == 0 {
            self.one_up_visible = !self.one_up_visible;
        }
    }

    /// Puts every entity back at its spawn after a death. Collectibles and counters stay.
    fn reset_entities(&mut self) {
        self.player.reset();
        for ghost in &mut self.ghosts {
            ghost.reset();
        }
        self.ctx.fright_timer = 0;
        self.ctx.multiplier = 1;
        self.maze = MazeFlash::Normal;
        for item in &mut self.power_pellets {
            item.visible = true;
        }
    }

    /// Describes the current frame for a renderer.
    pub fn snapshot(&self, scoreboard: &Scoreboard) -> RenderSnapshot {
        let player_sprite = match self.player.state() {
            PlayerState::Dying => PlayerSprite::Dying(self.player.death_frame()),
            PlayerState::LevelComplete => PlayerSprite::Full,
            PlayerState::Idle | PlayerState::Moving => {
                PlayerSprite::Moving(self.player.current_direction(), self.player.frame())
            }
        };

        RenderSnapshot {
            player: Drawable {
                sprite: GameSprite::Player(player_sprite),
                visible: true,
                rect: Rect::centered(self.player.center(), ENTITY_SPRITE_SIZE),
            },
            ghosts: self.ghosts.each_ref().map(ghost_drawable),
            power_pellets: self
                .power_pellets
                .iter()
                .map(|item| Drawable {
                    sprite: GameSprite::PowerPellet,
                    visible: item.visible,
                    rect: Rect {
                        origin: item.grid * TILE_SIZE,
                        size: glam::UVec2::splat(POWER_PELLET_SPRITE_SIZE),
                    },
                })
                .collect(),
            pellets: self.pellets.iter().map(|item| item.grid).collect(),
            maze: self.maze,
            one_up_visible: self.one_up_visible,
            score: scoreboard.display_score(),
            high_score: scoreboard.display_high_score(),
            lives: scoreboard.lives(),
            round: self.ctx.round,
        }
    }
}

fn ghost_drawable(ghost: &Ghost) -> Drawable {
    let sprite = match ghost.state() {
        GhostState::Dead => GhostSprite::Score(ghost.score_index()),
        GhostState::GoingHome | GhostState::EnteringHome => GhostSprite::Eyes(ghost.current_direction()),
        _ if ghost.is_frightened() => {
            let color = if ghost.is_flashing_white() {
                FrightenedColor::White
            } else {
                FrightenedColor::Blue
            };
            GhostSprite::Frightened(color, ghost.body_frame())
        }
        _ => GhostSprite::Normal(ghost.ghost_type(), ghost.current_direction(), ghost.body_frame()),
    };

    Drawable {
        sprite: GameSprite::Ghost(sprite),
        visible: ghost.is_visible(),
        rect: Rect::centered(ghost.center(), ENTITY_SPRITE_SIZE),
    }
}
