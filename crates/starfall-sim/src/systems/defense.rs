//! Point-defense turret: once owned, fires one interceptor per cooldown
//! at the nearest enemy bullet within range of the player.

use starfall_core::constants::*;
use starfall_core::entities::{cooldown_ready, DefenseBullet, PersistentProgress};
use starfall_core::types::Vec2;

use crate::world::World;

pub fn run(world: &mut World, progress: &PersistentProgress, now_ms: f64) {
    if !progress.auto_defense {
        return;
    }
    if !cooldown_ready(world.player.last_defense_ms, now_ms, DEFENSE_COOLDOWN_MS) {
        return;
    }

    let origin = world.player.pos;
    let target = world
        .enemy_bullets
        .iter()
        .map(|b| (b.pos, origin.distance_to(&b.pos)))
        .filter(|(_, d)| *d < DEFENSE_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1));

    if let Some((target_pos, _)) = target {
        world.player.last_defense_ms = Some(now_ms);
        let angle = origin.angle_to(&target_pos);
        world.defense_bullets.push(DefenseBullet {
            pos: origin,
            vel: Vec2::new(
                angle.cos() * DEFENSE_BULLET_SPEED,
                angle.sin() * DEFENSE_BULLET_SPEED,
            ),
        });
    }
}
