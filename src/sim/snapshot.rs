//! Read-only view of the world handed to the renderer after each tick

use serde::Serialize;

use super::geom::{Bounded, Rect};
use super::state::{GamePhase, World};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AsteroidView {
    pub rect: Rect,
    /// Degrees
    pub rotation: f32,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PickupView {
    pub rect: Rect,
    pub visible: bool,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldSnapshot {
    pub phase: GamePhase,
    pub player: Rect,
    pub fuel_current: f32,
    pub fuel_maximum: u32,
    pub score: u32,
    /// Score of the most recently finished session
    pub last_score: u32,
    /// One entry per pool slot, in slot order
    pub asteroids: Vec<AsteroidView>,
    pub fuel_pickup: PickupView,
    pub upgrade: PickupView,
    pub time_ticks: u64,
}

impl WorldSnapshot {
    pub fn capture(world: &World) -> Self {
        Self {
            phase: world.phase,
            player: world.player.rect(),
            fuel_current: world.fuel.current,
            fuel_maximum: world.fuel.maximum,
            score: world.score,
            last_score: world.last_score,
            asteroids: world
                .asteroids
                .iter()
                .map(|a| AsteroidView {
                    rect: a.rect,
                    rotation: a.rotation,
                    visible: a.is_active(),
                })
                .collect(),
            fuel_pickup: PickupView {
                rect: world.fuel_pickup.rect,
                visible: world.fuel_pickup.spawned,
            },
            upgrade: PickupView {
                rect: world.upgrade.rect,
                visible: world.upgrade.spawned,
            },
            time_ticks: world.time_ticks,
        }
    }

    pub fn visible_asteroids(&self) -> impl Iterator<Item = &AsteroidView> {
        self.asteroids.iter().filter(|a| a.visible)
    }
}
