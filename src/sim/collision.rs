//! Collision resolution
//!
//! Everything is an axis-aligned box test against the player. Asteroids
//! damage and despawn on contact; pickups apply their effect and vanish.
//! All hits in a tick are applied, none of them exclude the others.

use super::geom::overlaps;
use super::rng::RandomSource;
use super::spawn::respawn_asteroid;
use super::state::World;

/// What the collision pass did this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Asteroids that hit the player
    pub asteroid_hits: u32,
    /// Total fuel removed by asteroid hits (before clamping)
    pub damage: f32,
    /// Asteroids recycled after leaving the bottom of the screen
    pub offscreen_respawns: u32,
    pub fuel_collected: bool,
    pub upgrade_collected: bool,
}

impl CollisionReport {
    pub fn any(&self) -> bool {
        self.asteroid_hits > 0 || self.fuel_collected || self.upgrade_collected
    }
}

/// Move every live asteroid, then resolve player hits and off-screen exits.
///
/// A hit slot is respawned in place at the top of the screen. Iteration is
/// strictly forward, so a respawned slot is not revisited this tick.
pub fn sweep_asteroids<R: RandomSource + ?Sized>(
    world: &mut World,
    rng: &mut R,
    report: &mut CollisionReport,
) {
    let screen_height = world.screen_height();
    let player_rect = world.player.rect();

    for i in 0..world.num_active {
        let vel = world.asteroids[i].vel;
        world.asteroids[i].rect.translate(vel);

        if overlaps(&player_rect, &world.asteroids[i]) {
            let damage = world.asteroids[i].rect.width / world.tuning.asteroid_damage_divisor;
            world.fuel.drain(damage);
            report.asteroid_hits += 1;
            report.damage += damage;
            log::debug!("Asteroid {} hit player for {:.2} fuel", i, damage);
            respawn_asteroid(world, i, rng);
        }

        if world.asteroids[i].rect.y > screen_height {
            report.offscreen_respawns += 1;
            respawn_asteroid(world, i, rng);
        }
    }
}

/// Apply fuel and upgrade pickups the player is touching
pub fn collect_pickups(world: &mut World, report: &mut CollisionReport) {
    let player_rect = world.player.rect();

    if overlaps(&player_rect, &world.fuel_pickup) {
        world.fuel.refill(world.tuning.fuel_pickup_value);
        world.fuel_pickup.spawned = false;
        world.score += 1;
        report.fuel_collected = true;
        log::debug!("Fuel collected, score {}", world.score);
    }

    if overlaps(&player_rect, &world.upgrade) {
        world.fuel.maximum += world.tuning.upgrade_capacity_bonus;
        // Deliberately not capped by the new maximum
        world.fuel.current += world.tuning.upgrade_fuel_bonus;
        world.score += 1;
        world.upgrade.spawned = false;
        report.upgrade_collected = true;
        log::debug!(
            "Upgrade collected, fuel {:.1}/{}, score {}",
            world.fuel.current,
            world.fuel.maximum,
            world.score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geom::{Bounded, Rect};
    use crate::sim::rng::SeededRng;
    use crate::sim::state::{Asteroid, FuelState};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn world() -> World {
        let mut world = World::new(Tuning::default());
        world.player.pos = Vec2::new(400.0, 300.0);
        world
    }

    fn asteroid_at(x: f32, y: f32, size: f32, vel: Vec2) -> Asteroid {
        Asteroid {
            rect: Rect::new(x, y, size, size),
            vel,
            rotation: 0.0,
        }
    }

    #[test]
    fn test_asteroid_hit_damages_and_respawns() {
        let mut world = world();
        world.asteroids[0] = asteroid_at(395.0, 295.0, 30.0, Vec2::ZERO);
        world.num_active = 1;
        let before = world.asteroids[0].rect;

        let mut report = CollisionReport::default();
        sweep_asteroids(&mut world, &mut SeededRng::new(1), &mut report);

        assert_eq!(report.asteroid_hits, 1);
        assert_eq!(report.damage, 10.0);
        assert_eq!(world.fuel.current, 90.0);
        assert_ne!(world.asteroids[0].rect, before);
        assert_eq!(world.asteroids[0].rect.y, 0.0);
        assert!(world.asteroids[0].is_active());
    }

    #[test]
    fn test_damage_clamps_fuel_at_zero() {
        let mut world = world();
        world.fuel.current = 4.0;
        world.asteroids[0] = asteroid_at(400.0, 300.0, 60.0, Vec2::ZERO);
        world.num_active = 1;
        let mut report = CollisionReport::default();
        sweep_asteroids(&mut world, &mut SeededRng::new(1), &mut report);
        assert_eq!(world.fuel.current, 0.0);
    }

    #[test]
    fn test_asteroids_move_by_velocity() {
        let mut world = world();
        world.asteroids[0] = asteroid_at(10.0, 10.0, 20.0, Vec2::new(0.0, 4.0));
        world.num_active = 1;
        let mut report = CollisionReport::default();
        sweep_asteroids(&mut world, &mut SeededRng::new(1), &mut report);
        assert_eq!(world.asteroids[0].rect.y, 14.0);
        assert!(!report.any());
    }

    #[test]
    fn test_offscreen_asteroid_respawns() {
        let mut world = world();
        world.asteroids[0] = asteroid_at(10.0, 599.0, 20.0, Vec2::new(0.0, 2.0));
        world.num_active = 1;
        let mut report = CollisionReport::default();
        sweep_asteroids(&mut world, &mut SeededRng::new(1), &mut report);
        assert_eq!(report.offscreen_respawns, 1);
        assert_eq!(world.asteroids[0].rect.y, 0.0);
    }

    #[test]
    fn test_slots_beyond_active_prefix_are_ignored() {
        let mut world = world();
        world.asteroids[3] = asteroid_at(400.0, 300.0, 30.0, Vec2::new(0.0, 1.0));
        world.num_active = 0;
        let mut report = CollisionReport::default();
        sweep_asteroids(&mut world, &mut SeededRng::new(1), &mut report);
        assert_eq!(world.fuel.current, 100.0);
        assert_eq!(world.asteroids[3].rect.y, 300.0);
    }

    #[test]
    fn test_multiple_hits_in_one_tick() {
        let mut world = world();
        world.asteroids[0] = asteroid_at(395.0, 295.0, 30.0, Vec2::ZERO);
        world.asteroids[1] = asteroid_at(405.0, 305.0, 15.0, Vec2::ZERO);
        world.num_active = 2;
        let mut report = CollisionReport::default();
        sweep_asteroids(&mut world, &mut SeededRng::new(1), &mut report);
        assert_eq!(report.asteroid_hits, 2);
        assert_eq!(world.fuel.current, 85.0);
    }

    #[test]
    fn test_respawned_slot_not_hit_twice() {
        // Player parked at the top where respawns land
        let mut world = world();
        world.player.pos = Vec2::new(0.0, 0.0);
        world.tuning.screen_width = 60;
        world.asteroids[0] = asteroid_at(0.0, 0.0, 15.0, Vec2::ZERO);
        world.num_active = 1;
        let mut report = CollisionReport::default();
        sweep_asteroids(&mut world, &mut SeededRng::new(9), &mut report);
        // The respawn overlaps the player again but is not re-checked
        assert!(world.player.rect().intersects(&world.asteroids[0].rect));
        assert_eq!(report.asteroid_hits, 1);
        assert_eq!(world.fuel.current, 95.0);
    }

    #[test]
    fn test_fuel_pickup_refills_and_scores() {
        let mut world = world();
        world.fuel.current = 50.0;
        world.fuel_pickup.place(405.0, 305.0);
        let mut report = CollisionReport::default();
        collect_pickups(&mut world, &mut report);
        assert!(report.fuel_collected);
        assert_eq!(world.fuel.current, 65.0);
        assert_eq!(world.score, 1);
        assert!(!world.fuel_pickup.spawned);
    }

    #[test]
    fn test_fuel_pickup_capped_at_maximum() {
        let mut world = world();
        world.fuel.current = 95.0;
        world.fuel_pickup.place(405.0, 305.0);
        collect_pickups(&mut world, &mut CollisionReport::default());
        assert_eq!(world.fuel.current, 100.0);
    }

    #[test]
    fn test_unspawned_pickup_is_ignored() {
        let mut world = world();
        world.fuel_pickup.place(405.0, 305.0);
        world.fuel_pickup.spawned = false;
        let mut report = CollisionReport::default();
        collect_pickups(&mut world, &mut report);
        assert!(!report.fuel_collected);
        assert_eq!(world.score, 0);
    }

    #[test]
    fn test_upgrade_adds_uncapped_fuel() {
        let mut world = world();
        world.fuel_pickup.place(0.0, 0.0);
        world.upgrade.place(400.0, 300.0);
        world.score = 10;
        collect_pickups(&mut world, &mut CollisionReport::default());
        // Current is bumped by 5 without a min() against the new maximum
        assert_eq!(
            world.fuel,
            FuelState {
                current: 105.0,
                maximum: 110
            }
        );
        assert_eq!(world.score, 11);
        assert!(!world.upgrade.spawned);
    }

    #[test]
    fn test_both_pickups_in_one_tick() {
        let mut world = world();
        world.fuel.current = 80.0;
        world.fuel_pickup.place(400.0, 300.0);
        world.upgrade.place(410.0, 310.0);
        let mut report = CollisionReport::default();
        collect_pickups(&mut world, &mut report);
        assert!(report.fuel_collected && report.upgrade_collected);
        assert_eq!(world.fuel.current, 100.0);
        assert_eq!(world.fuel.maximum, 110);
        assert_eq!(world.score, 2);
    }
}
