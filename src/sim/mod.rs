//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by pool slot)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geom;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, collect_pickups, sweep_asteroids};
pub use geom::{Bounded, Rect, overlaps};
pub use player::update_player;
pub use rng::{RandomSource, SeededRng};
pub use snapshot::{AsteroidView, PickupView, WorldSnapshot};
pub use state::{Asteroid, FuelState, GamePhase, Pickup, Player, World};
pub use tick::{Simulation, TickInput, step};
