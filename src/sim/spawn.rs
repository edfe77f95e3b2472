//! Spawn policy for asteroids and pickups
//!
//! Asteroid size scales with the current score, so difficulty follows
//! progress rather than time. Every random draw goes through the
//! [`RandomSource`], in a fixed order, to keep runs reproducible.

use glam::Vec2;

use super::geom::Rect;
use super::rng::RandomSource;
use super::state::World;

/// Smallest asteroid side length
pub const ASTEROID_MIN_SIZE: i32 = 15;

/// Asteroids spawn this far from the right edge at most
const ASTEROID_RIGHT_MARGIN: i32 = 50;

fn screen_dims(world: &World) -> (i32, i32) {
    (
        i32::try_from(world.tuning.screen_width).unwrap_or(i32::MAX),
        i32::try_from(world.tuning.screen_height).unwrap_or(i32::MAX),
    )
}

/// (Re)spawn the asteroid in pool slot `index` at the top of the screen.
/// Larger scores allow larger (and slower) asteroids.
pub fn respawn_asteroid<R: RandomSource + ?Sized>(world: &mut World, index: usize, rng: &mut R) {
    let (screen_width, _) = screen_dims(world);
    let max_size = i32::try_from(world.score.saturating_mul(3))
        .unwrap_or(i32::MAX)
        .max(ASTEROID_MIN_SIZE + 1);

    let size = rng.range(ASTEROID_MIN_SIZE, max_size) as f32;
    let x = rng.range(0, (screen_width - ASTEROID_RIGHT_MARGIN).max(1)) as f32;
    let rotation = rng.range(0, 360) as f32;
    let speed = world.tuning.asteroid_speed_factor / size;

    let asteroid = &mut world.asteroids[index];
    asteroid.rect = Rect::new(x, 0.0, size, size);
    asteroid.vel = Vec2::new(0.0, speed);
    asteroid.rotation = rotation;
}

/// Per-tick asteroid trigger. Returns true if a new slot went live.
///
/// The spawn roll is drawn whenever the pool has room, even while the
/// score is still below the threshold.
pub fn maybe_spawn_asteroid<R: RandomSource + ?Sized>(world: &mut World, rng: &mut R) -> bool {
    if world.num_active >= world.capacity() {
        return false;
    }
    if rng.range(0, 100) >= world.tuning.asteroid_spawn_chance {
        return false;
    }
    if world.score < world.tuning.asteroid_min_score {
        return false;
    }

    let index = world.num_active;
    respawn_asteroid(world, index, rng);
    world.num_active += 1;
    log::debug!(
        "Asteroid {} spawned at x={} size={}",
        index,
        world.asteroids[index].rect.x,
        world.asteroids[index].rect.width
    );
    true
}

/// Session-start placement of the fuel pickup
pub fn place_initial_fuel_pickup<R: RandomSource + ?Sized>(world: &mut World, rng: &mut R) {
    let (w, h) = screen_dims(world);
    let x = rng.range(0, (w - 20).max(1)) as f32;
    let y = rng.range(0, (h - 20).max(1)) as f32;
    world.fuel_pickup.place(x, y);
}

/// Put the fuel pickup back as soon as it has been collected
pub fn respawn_fuel_pickup<R: RandomSource + ?Sized>(world: &mut World, rng: &mut R) {
    if world.fuel_pickup.spawned {
        return;
    }
    let (w, h) = screen_dims(world);
    let x = rng.range_inclusive(50, w - 20) as f32;
    let y = rng.range_inclusive(20, h - 50) as f32;
    world.fuel_pickup.place(x, y);
}

/// Show the upgrade on every multiple of the upgrade interval.
/// No-op while it is already out.
pub fn maybe_spawn_upgrade<R: RandomSource + ?Sized>(world: &mut World, rng: &mut R) -> bool {
    let interval = world.tuning.upgrade_score_interval;
    if world.upgrade.spawned || world.score == 0 || interval == 0 || world.score % interval != 0 {
        return false;
    }
    let (w, h) = screen_dims(world);
    let x = rng.range_inclusive(0, w - 20) as f32;
    let y = rng.range_inclusive(0, h - 20) as f32;
    world.upgrade.place(x, y);
    log::debug!("Upgrade spawned at ({}, {}) for score {}", x, y, world.score);
    true
}
