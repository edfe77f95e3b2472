//! Jetpack Fella headless runner
//!
//! Drives the simulation with a simple autopilot and prints the final
//! snapshot as JSON. Useful for balance checks and reproducing seeds.
//!
//! Usage: `jetpack-fella [TUNING_JSON] [SEED]`

use jetpack_fella::consts::SIM_DT;
use jetpack_fella::{GamePhase, SimError, Simulation, TickInput, Tuning, WorldSnapshot};

/// Give up after five minutes of game time
const MAX_TICKS: u64 = 5 * 60 * 60;

/// Steer toward the fuel pickup and keep the jetpack roughly level with it
fn autopilot(snap: &WorldSnapshot) -> TickInput {
    let player_x = snap.player.x + snap.player.width / 2.0;
    let player_y = snap.player.y + snap.player.height / 2.0;
    let target = snap.fuel_pickup.rect;
    let target_x = target.x + target.width / 2.0;
    let target_y = target.y + target.height / 2.0;

    let dx = target_x - player_x;
    TickInput {
        move_left: dx < -2.0,
        move_right: dx > 2.0,
        speed_modifier: dx.abs() > 100.0,
        boost: player_y > target_y && snap.fuel_current > 0.0,
        ..Default::default()
    }
}

fn run() -> Result<(), SimError> {
    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);

    let mut sim = Simulation::from_tuning(tuning, seed)?;
    log::info!("Seed: {}", sim.seed());

    let start = TickInput {
        primary_pressed: true,
        primary_released: true,
        ..Default::default()
    };
    let mut snap = sim.tick(&start, SIM_DT)?;

    while snap.phase == GamePhase::Playing && snap.time_ticks < MAX_TICKS {
        let input = autopilot(&snap);
        snap = sim.tick(&input, SIM_DT)?;
    }

    match snap.phase {
        GamePhase::GameOver => log::info!(
            "Fell after {} ticks with score {}",
            snap.time_ticks,
            snap.last_score
        ),
        _ => log::info!(
            "Survived {} ticks with score {}",
            snap.time_ticks,
            snap.score
        ),
    }

    println!("{}", serde_json::to_string_pretty(&snap)?);
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Jetpack Fella (headless) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
