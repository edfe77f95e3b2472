//! Jetpack Fella - a fixed-timestep jetpack side-scroller
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, spawning, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `error`: Error type shared by the simulation and config loading
//!
//! Rendering, input devices and frame pacing belong to whoever drives
//! [`sim::Simulation::tick`]; nothing in this crate draws anything.

pub mod error;
pub mod sim;
pub mod tuning;

pub use error::SimError;
pub use sim::{GamePhase, Simulation, TickInput, WorldSnapshot};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Smallest allowed screen dimension; anything below is clamped up
    pub const MIN_SCREEN_DIM: u32 = 100;

    /// Asteroid pool capacity
    pub const MAX_ASTEROIDS: usize = 10;

    /// Fuel at session start (both current and maximum)
    pub const BASE_FUEL: u32 = 100;

    /// Player square side length
    pub const PLAYER_SIZE: f32 = 20.0;
    /// Pickup square side length
    pub const PICKUP_SIZE: f32 = 20.0;

    /// Parking coordinate for things that are not on screen
    pub const OFFSCREEN: f32 = -100.0;
}
