//! Game state and core simulation types
//!
//! The whole session lives in one [`World`] owned by the state machine.
//! Entities are plain data; behaviour lives in the sibling modules.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{Bounded, Rect};
use super::rng::RandomSource;
use super::spawn;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first primary action
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Player fell off the bottom; frozen until restart
    GameOver,
}

/// The jetpack-wearing player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    /// Vertical term: positive pushes up, decays by gravity each tick
    pub gravity: f32,
    /// Primary action is held down
    pub jetpacking: bool,
    pub size: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            gravity: 0.0,
            jetpacking: false,
            size: PLAYER_SIZE,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }
}

/// A falling asteroid in a fixed pool slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub rect: Rect,
    /// Displacement per tick
    pub vel: Vec2,
    /// Degrees, cosmetic only
    pub rotation: f32,
}

impl Asteroid {
    /// Empty slot parked off screen
    pub fn inactive() -> Self {
        Self {
            rect: Rect::new(OFFSCREEN, OFFSCREEN, 0.0, 0.0),
            vel: Vec2::ZERO,
            rotation: 0.0,
        }
    }
}

impl Bounded for Asteroid {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn is_active(&self) -> bool {
        self.rect.has_area()
    }
}

/// Fuel refill or capacity upgrade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub rect: Rect,
    pub spawned: bool,
}

impl Pickup {
    pub fn despawned() -> Self {
        Self {
            rect: Rect::new(OFFSCREEN, OFFSCREEN, PICKUP_SIZE, PICKUP_SIZE),
            spawned: false,
        }
    }

    /// Place at a top-left corner and mark spawned
    pub fn place(&mut self, x: f32, y: f32) {
        self.rect = Rect::new(x, y, PICKUP_SIZE, PICKUP_SIZE);
        self.spawned = true;
    }
}

impl Bounded for Pickup {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn is_active(&self) -> bool {
        self.spawned
    }
}

/// Jetpack fuel tank
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelState {
    pub current: f32,
    pub maximum: u32,
}

impl FuelState {
    pub fn full(maximum: u32) -> Self {
        Self {
            current: maximum as f32,
            maximum,
        }
    }

    /// Remove fuel, never going below zero
    pub fn drain(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
    }

    /// Add fuel, capped at the maximum
    pub fn refill(&mut self, amount: f32) {
        self.current = (self.current + amount).min(self.maximum as f32);
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0.0
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Validated balance values (screen size included)
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    pub fuel: FuelState,
    /// Pool of `tuning.max_asteroids` slots; length never changes
    pub asteroids: Vec<Asteroid>,
    /// Slots `0..num_active` are iterated; the rest stay inactive
    pub num_active: usize,
    pub fuel_pickup: Pickup,
    pub upgrade: Pickup,
    pub score: u32,
    /// Score captured when the last session ended
    pub last_score: u32,
    /// Playing ticks since the session started
    pub time_ticks: u64,
}

impl World {
    /// Blank world; call [`World::reset`] before playing.
    /// `tuning` must already be validated.
    pub fn new(tuning: Tuning) -> Self {
        let player = Player::new(Self::center(&tuning));
        let fuel = FuelState::full(tuning.base_fuel);
        let asteroids = vec![Asteroid::inactive(); tuning.max_asteroids];
        Self {
            tuning,
            phase: GamePhase::Menu,
            player,
            fuel,
            asteroids,
            num_active: 0,
            fuel_pickup: Pickup::despawned(),
            upgrade: Pickup::despawned(),
            score: 0,
            last_score: 0,
            time_ticks: 0,
        }
    }

    fn center(tuning: &Tuning) -> Vec2 {
        Vec2::new(
            tuning.screen_width as f32 / 2.0,
            tuning.screen_height as f32 / 2.0,
        )
    }

    pub fn screen_width(&self) -> f32 {
        self.tuning.screen_width as f32
    }

    pub fn screen_height(&self) -> f32 {
        self.tuning.screen_height as f32
    }

    pub fn capacity(&self) -> usize {
        self.asteroids.len()
    }

    /// Start-of-session reset. Leaves `phase` and `last_score` alone.
    pub fn reset<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.player = Player::new(Self::center(&self.tuning));
        self.fuel = FuelState::full(self.tuning.base_fuel);

        spawn::place_initial_fuel_pickup(self, rng);
        self.upgrade = Pickup::despawned();

        self.score = 0;
        self.time_ticks = 0;

        self.num_active = 0;
        for asteroid in &mut self.asteroids {
            *asteroid = Asteroid::inactive();
        }
    }

    /// Player has dropped below the bottom edge
    pub fn player_fell(&self) -> bool {
        self.player.pos.y > self.screen_height()
    }
}
