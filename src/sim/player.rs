//! Player movement: horizontal steering, jetpack thrust and gravity

use super::state::{FuelState, Player};
use super::tick::TickInput;
use crate::tuning::Tuning;

/// Advance the player by one tick.
///
/// Units are per tick; the timestep is fixed so nothing here scales by dt.
/// The bottom edge is not clamped, falling past it ends the session.
pub fn update_player(
    player: &mut Player,
    fuel: &mut FuelState,
    input: &TickInput,
    tuning: &Tuning,
    screen_width: f32,
) {
    let speed = tuning.horizontal_speed(input.speed_modifier);
    if input.move_left {
        player.pos.x -= speed;
    }
    if input.move_right {
        player.pos.x += speed;
    }

    let thrusting = (player.jetpacking || input.boost) && !fuel.is_empty();
    if thrusting {
        player.gravity = if input.fast_fall {
            -tuning.thrust
        } else {
            tuning.thrust
        };
        fuel.drain(tuning.fuel_burn);
    } else {
        // No terminal velocity
        player.gravity -= tuning.gravity_step;
    }

    // Screen y grows downward
    player.pos.y -= player.gravity;

    if player.pos.x > screen_width {
        player.pos.x = 0.0;
    } else if player.pos.x < 0.0 {
        player.pos.x = screen_width;
    }

    if player.pos.y < 0.0 {
        player.pos.y = 0.0;
    }
}
