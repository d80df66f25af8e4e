//! Falling pickups: powerups and currency descend at a constant rate.

use starfall_core::constants::{CURRENCY_FALL_SPEED, POWERUP_FALL_SPEED};

use crate::world::World;

pub fn run(world: &mut World, dt: f64) {
    for powerup in &mut world.powerups {
        powerup.pos.y += POWERUP_FALL_SPEED * dt;
    }
    for pickup in &mut world.currency_pickups {
        pickup.pos.y += CURRENCY_FALL_SPEED * dt;
    }
}
