//! Fixed timestep simulation tick
//!
//! [`Simulation`] owns the world and the random source and runs the
//! Menu -> Playing -> GameOver state machine. One call to
//! [`Simulation::tick`] advances exactly one frame.

use super::collision::{self, CollisionReport};
use super::player::update_player;
use super::rng::{RandomSource, SeededRng};
use super::snapshot::WorldSnapshot;
use super::spawn;
use super::state::{GamePhase, World};
use crate::consts::*;
use crate::error::{Result, SimError};
use crate::tuning::Tuning;

/// Input intents sampled for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Jetpack key held
    pub boost: bool,
    /// Invert thrust to dive
    pub fast_fall: bool,
    /// Double horizontal speed
    pub speed_modifier: bool,
    /// Primary action went down since the last tick
    pub primary_pressed: bool,
    /// Primary action went up since the last tick
    pub primary_released: bool,
}

/// A single game instance
#[derive(Debug, Clone)]
pub struct Simulation<R: RandomSource = SeededRng> {
    world: World,
    rng: R,
}

impl Simulation<SeededRng> {
    /// Stock game on a screen of the given size, randomly seeded.
    /// Dimensions below 100 are clamped up.
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        Self::build(Self::screen_tuning(screen_width, screen_height), SeededRng::from_entropy())
    }

    /// Stock game with a fixed seed
    pub fn with_seed(screen_width: u32, screen_height: u32, seed: u64) -> Self {
        Self::build(Self::screen_tuning(screen_width, screen_height), SeededRng::new(seed))
    }

    /// Custom tuning with a fixed seed
    pub fn from_tuning(tuning: Tuning, seed: u64) -> Result<Self> {
        Self::with_rng(tuning, SeededRng::new(seed))
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    fn screen_tuning(screen_width: u32, screen_height: u32) -> Tuning {
        let mut tuning = Tuning::for_screen(screen_width, screen_height);
        tuning.clamp_screen();
        tuning
    }
}

impl<R: RandomSource> Simulation<R> {
    /// Custom tuning and random source. Fails on an empty asteroid pool.
    pub fn with_rng(tuning: Tuning, rng: R) -> Result<Self> {
        Ok(Self::build(tuning.validated()?, rng))
    }

    fn build(tuning: Tuning, mut rng: R) -> Self {
        log::info!(
            "New simulation: {}x{}, {} asteroid slots",
            tuning.screen_width,
            tuning.screen_height,
            tuning.max_asteroids
        );
        let mut world = World::new(tuning);
        world.reset(&mut rng);
        Self { world, rng }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct access for drivers and tests that need to stage a scene
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn phase(&self) -> GamePhase {
        self.world.phase
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::capture(&self.world)
    }

    /// Primary action down: start from Menu, restart from GameOver,
    /// and fire the jetpack in every case.
    pub fn on_primary_action_pressed(&mut self) {
        match self.world.phase {
            GamePhase::Menu => {
                self.world.phase = GamePhase::Playing;
                log::info!("Session started");
            }
            GamePhase::GameOver => {
                self.world.reset(&mut self.rng);
                self.world.phase = GamePhase::Playing;
                log::info!("Session restarted (last score {})", self.world.last_score);
            }
            GamePhase::Playing => {}
        }
        self.world.player.jetpacking = true;
    }

    /// Primary action up: stop the jetpack
    pub fn on_primary_action_released(&mut self) {
        self.world.player.jetpacking = false;
    }

    /// Advance one tick and return what the renderer should show.
    ///
    /// Edge events are applied first, so a start press is followed by a
    /// gameplay update in the same tick. Menu and GameOver ticks only
    /// produce a snapshot. A non-positive or non-finite `dt` is rejected
    /// without touching the world.
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> Result<WorldSnapshot> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::InvalidTimestep(dt));
        }

        if input.primary_pressed {
            self.on_primary_action_pressed();
        }
        if input.primary_released {
            self.on_primary_action_released();
        }

        if self.world.phase == GamePhase::Playing {
            let report = self.update(input);
            if report.any() {
                log::trace!("Tick {}: {:?}", self.world.time_ticks, report);
            }
        }

        Ok(self.snapshot())
    }

    /// One Playing tick: player, asteroid trigger, asteroid sweep,
    /// pickups, death check.
    fn update(&mut self, input: &TickInput) -> CollisionReport {
        let world = &mut self.world;
        let rng = &mut self.rng;
        world.time_ticks += 1;

        let screen_width = world.screen_width();
        update_player(
            &mut world.player,
            &mut world.fuel,
            input,
            &world.tuning,
            screen_width,
        );

        spawn::maybe_spawn_asteroid(world, rng);

        let mut report = CollisionReport::default();
        collision::sweep_asteroids(world, rng, &mut report);

        collision::collect_pickups(world, &mut report);
        spawn::respawn_fuel_pickup(world, rng);
        spawn::maybe_spawn_upgrade(world, rng);

        if world.player_fell() {
            world.last_score = world.score;
            world.phase = GamePhase::GameOver;
            log::info!(
                "Game over after {} ticks, score {}",
                world.time_ticks,
                world.score
            );
        }

        report
    }
}

/// Convenience for drivers that always step at the fixed rate
pub fn step<R: RandomSource>(sim: &mut Simulation<R>, input: &TickInput) -> Result<WorldSnapshot> {
    sim.tick(input, SIM_DT)
}
