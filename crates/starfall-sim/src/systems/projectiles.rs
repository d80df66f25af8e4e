//! Projectile integration: bullets fly straight, missiles home.
//!
//! A missile's target id is a weak reference: it is re-validated every
//! step and re-acquired against the nearest living enemy when stale.
//! With no enemies on the field the missile keeps its last velocity.

use starfall_core::constants::MISSILE_SPEED;
use starfall_core::types::Vec2;

use crate::world::World;

pub fn run(world: &mut World, dt: f64) {
    for bullet in &mut world.bullets {
        bullet.pos.x += bullet.vel.x * dt;
        bullet.pos.y += bullet.vel.y * dt;
    }

    let World {
        missiles, enemies, ..
    } = world;
    for missile in missiles.iter_mut() {
        let current = missile
            .target
            .and_then(|id| enemies.iter().find(|e| e.id == id && !e.dead));
        let target = current.or_else(|| {
            enemies
                .iter()
                .filter(|e| !e.dead)
                .map(|e| (e, missile.pos.distance_to(&e.pos)))
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(e, _)| e)
        });

        match target {
            Some(enemy) => {
                missile.target = Some(enemy.id);
                let angle = missile.pos.angle_to(&enemy.pos);
                missile.vel = Vec2::new(angle.cos() * MISSILE_SPEED, angle.sin() * MISSILE_SPEED);
            }
            None => missile.target = None,
        }
        missile.pos.x += missile.vel.x * dt;
        missile.pos.y += missile.vel.y * dt;
    }

    for shot in &mut world.enemy_bullets {
        shot.pos.x += shot.vel.x * dt;
        shot.pos.y += shot.vel.y * dt;
    }
    for shot in &mut world.defense_bullets {
        shot.pos.x += shot.vel.x * dt;
        shot.pos.y += shot.vel.y * dt;
    }
}
