//! Player system: movement from held input, then weapon fire gating.
//!
//! The active powerup selects the weapon mode. The missile powerup
//! replaces the primary gun entirely; the secondary trigger is only
//! meaningful while it is active.

use starfall_core::constants::*;
use starfall_core::entities::{cooldown_ready, Bullet, Missile, PersistentProgress};
use starfall_core::enums::PowerupKind;
use starfall_core::events::AudioEvent;
use starfall_core::input::InputState;
use starfall_core::types::Vec2;

use crate::session::SessionState;
use crate::world::World;

pub fn run(
    world: &mut World,
    session: &SessionState,
    progress: &PersistentProgress,
    input: &InputState,
    now_ms: f64,
    dt: f64,
    audio: &mut Vec<AudioEvent>,
) {
    let player = &mut world.player;

    if input.left {
        player.pos.x -= player.speed * dt;
    }
    if input.right {
        player.pos.x += player.speed * dt;
    }
    let half_w = player.width / 2.0;
    player.pos.x = player.pos.x.clamp(half_w, FIELD_WIDTH - half_w);

    let muzzle = Vec2::new(player.pos.x, player.pos.y - player.height / 2.0);

    if session.powerup == Some(PowerupKind::Missile) {
        // Both triggers launch missiles while the powerup is active.
        if (input.fire || input.fire_alt)
            && cooldown_ready(player.last_missile_ms, now_ms, MISSILE_INTERVAL_MS)
        {
            player.last_missile_ms = Some(now_ms);
            world.missiles.push(Missile {
                pos: muzzle,
                vel: Vec2::new(0.0, -MISSILE_LAUNCH_SPEED),
                target: None,
            });
            audio.push(AudioEvent::ShootMissile);
        }
        return;
    }

    if !input.fire || !cooldown_ready(player.last_shot_ms, now_ms, FIRE_INTERVAL_MS) {
        return;
    }
    player.last_shot_ms = Some(now_ms);

    match session.powerup {
        Some(PowerupKind::Shotgun) => {
            for i in -SHOTGUN_SPREAD..=SHOTGUN_SPREAD {
                world.bullets.push(Bullet {
                    pos: muzzle,
                    vel: Vec2::new(i as f64 * TIER_FAN_SPACING, -BULLET_SPEED),
                    width: BULLET_WIDTH,
                    height: BULLET_HEIGHT,
                    damage: BULLET_DAMAGE,
                });
            }
            audio.push(AudioEvent::ShootShotgun);
        }
        Some(PowerupKind::Laser) => {
            world.bullets.push(Bullet {
                pos: muzzle,
                vel: Vec2::new(0.0, -LASER_BOLT_SPEED),
                width: LASER_BOLT_WIDTH,
                height: LASER_BOLT_HEIGHT,
                damage: LASER_BOLT_DAMAGE,
            });
            audio.push(AudioEvent::ShootLaser);
        }
        _ => {
            // Tier N fires an N-bullet fan centered on straight up.
            let tier = progress.weapon_tier.max(1);
            for i in 0..tier {
                let offset = i as f64 - (tier - 1) as f64 / 2.0;
                world.bullets.push(Bullet {
                    pos: muzzle,
                    vel: Vec2::new(offset * TIER_FAN_SPACING, -BULLET_SPEED),
                    width: BULLET_WIDTH,
                    height: BULLET_HEIGHT,
                    damage: BULLET_DAMAGE,
                });
            }
            audio.push(AudioEvent::Shoot);
        }
    }
}
