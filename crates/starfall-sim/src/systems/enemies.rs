//! Enemy system: applies each living enemy's behavior rule and
//! materializes the resulting shot specs as enemy bullets.

use starfall_core::entities::EnemyBullet;
use starfall_core::events::AudioEvent;

use starfall_ai::{update_enemy, BehaviorContext, EnemyShot};

use crate::world::World;

pub fn run(world: &mut World, now_ms: f64, dt: f64, audio: &mut Vec<AudioEvent>) {
    let ctx = BehaviorContext {
        player_x: world.player.pos.x,
        player_y: world.player.pos.y,
        now_ms,
        dt,
    };

    let mut shots: Vec<EnemyShot> = Vec::new();
    for enemy in world.enemies.iter_mut().filter(|e| !e.dead) {
        update_enemy(enemy, &ctx, &mut shots);
    }

    if !shots.is_empty() {
        audio.push(AudioEvent::EnemyShoot);
    }
    world.enemy_bullets.extend(shots.into_iter().map(|s| EnemyBullet {
        pos: s.pos,
        vel: s.vel,
    }));
}
