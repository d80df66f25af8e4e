//! Cleanup: one retain pass per collection at the end of the step.
//!
//! Removes dead-marked enemies and anything that has left the field
//! (plus a margin). Boss-class enemies are exempt from off-field pruning
//! so their entry from above the field and edge sweeps never cull them.

use starfall_core::constants::{FIELD_HEIGHT, FIELD_WIDTH, OFF_FIELD_MARGIN};
use starfall_core::types::Vec2;

use crate::world::World;

fn in_field(pos: &Vec2) -> bool {
    pos.x > -OFF_FIELD_MARGIN
        && pos.x < FIELD_WIDTH + OFF_FIELD_MARGIN
        && pos.y > -OFF_FIELD_MARGIN
        && pos.y < FIELD_HEIGHT + OFF_FIELD_MARGIN
}

pub fn run(world: &mut World) {
    world.bullets.retain(|b| in_field(&b.pos));
    world.missiles.retain(|m| in_field(&m.pos));
    world.enemy_bullets.retain(|b| in_field(&b.pos));
    world.defense_bullets.retain(|b| in_field(&b.pos));
    world.powerups.retain(|p| p.pos.y < FIELD_HEIGHT + OFF_FIELD_MARGIN);
    world
        .currency_pickups
        .retain(|c| c.pos.y < FIELD_HEIGHT + OFF_FIELD_MARGIN);
    world
        .enemies
        .retain(|e| !e.dead && (e.kind().is_boss_class() || in_field(&e.pos)));
}
