//! Gameplay tuning
//!
//! Balance values kept apart from the simulation code so a driver can load
//! them from JSON. `Tuning::default()` is the stock game.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{BASE_FUEL, MAX_ASTEROIDS, MIN_SCREEN_DIM};
use crate::error::{Result, SimError};

/// Game balance and world dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    /// Screen width in world units (clamped to at least 100)
    pub screen_width: u32,
    /// Screen height in world units (clamped to at least 100)
    pub screen_height: u32,

    // === Player ===
    /// Horizontal speed per tick
    pub move_speed: f32,
    /// Horizontal speed per tick with the speed modifier held
    pub fast_move_speed: f32,
    /// Vertical term set while the jetpack fires
    pub thrust: f32,
    /// Subtracted from the vertical term every tick without thrust
    pub gravity_step: f32,
    /// Fuel burned per tick of thrust
    pub fuel_burn: f32,

    // === Fuel ===
    pub base_fuel: u32,
    /// Fuel restored by the fuel pickup (capped at maximum)
    pub fuel_pickup_value: f32,
    /// Maximum fuel added by the upgrade pickup
    pub upgrade_capacity_bonus: u32,
    /// Current fuel added by the upgrade pickup (not capped)
    pub upgrade_fuel_bonus: f32,
    /// Score interval at which the upgrade appears
    pub upgrade_score_interval: u32,

    // === Asteroids ===
    pub max_asteroids: usize,
    /// Spawn chance per tick, out of 100
    pub asteroid_spawn_chance: i32,
    /// No asteroids until the score reaches this
    pub asteroid_min_score: u32,
    /// Fall speed is this divided by asteroid width
    pub asteroid_speed_factor: f32,
    /// Damage is asteroid width divided by this
    pub asteroid_damage_divisor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,

            move_speed: 2.0,
            fast_move_speed: 4.0,
            thrust: 4.0,
            gravity_step: 0.17,
            fuel_burn: 0.5,

            base_fuel: BASE_FUEL,
            fuel_pickup_value: 15.0,
            upgrade_capacity_bonus: 10,
            upgrade_fuel_bonus: 5.0,
            upgrade_score_interval: 10,

            max_asteroids: MAX_ASTEROIDS,
            asteroid_spawn_chance: 10,
            asteroid_min_score: 3,
            asteroid_speed_factor: 80.0,
            asteroid_damage_divisor: 3.0,
        }
    }
}

impl Tuning {
    /// Stock tuning for a given screen size
    pub fn for_screen(screen_width: u32, screen_height: u32) -> Self {
        Self {
            screen_width,
            screen_height,
            ..Self::default()
        }
    }

    /// Parse tuning from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Clamp screen dimensions and reject an unusable asteroid pool
    pub fn validated(mut self) -> Result<Self> {
        if self.max_asteroids == 0 {
            return Err(SimError::EmptyAsteroidPool);
        }
        self.clamp_screen();
        Ok(self)
    }

    /// Raise screen dimensions below the minimum up to it
    pub fn clamp_screen(&mut self) {
        if self.screen_width < MIN_SCREEN_DIM || self.screen_height < MIN_SCREEN_DIM {
            log::warn!(
                "Screen {}x{} below minimum, clamping to {}",
                self.screen_width,
                self.screen_height,
                MIN_SCREEN_DIM
            );
        }
        self.screen_width = self.screen_width.max(MIN_SCREEN_DIM);
        self.screen_height = self.screen_height.max(MIN_SCREEN_DIM);
    }

    /// Speed per tick for the current modifier state
    pub fn horizontal_speed(&self, fast: bool) -> f32 {
        if fast { self.fast_move_speed } else { self.move_speed }
    }
}
