//! Collision and damage resolution, in a fixed order per step.
//!
//! Everything is a center-anchored AABB test except missile and
//! interceptor hits (circular proximity) and the boss lasers (edge-band
//! test with a hit cooldown). Lethal hits mark the enemy `dead` but leave
//! it in the collection until cleanup, and a dead-marked enemy takes no
//! further damage, so kill rewards are paid exactly once.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::constants::*;
use starfall_core::entities::{
    cooldown_ready, CurrencyPickup, Enemy, PersistentProgress, Powerup,
};
use starfall_core::enums::PowerupKind;
use starfall_core::events::AudioEvent;
use starfall_core::types::aabb_overlap;

use starfall_ai::profiles::get_profile;

use crate::session::SessionState;
use crate::world::World;

pub struct CollisionOutcome {
    pub player_died: bool,
    /// Persistent currency changed this step and needs a save.
    pub progress_dirty: bool,
}

/// Drops produced by kills this step; appended to the world after all
/// enemy iteration is done.
#[derive(Default)]
struct Drops {
    currency: Vec<CurrencyPickup>,
    powerups: Vec<Powerup>,
}

const DROPPABLE_POWERUPS: [PowerupKind; 3] = [
    PowerupKind::Shotgun,
    PowerupKind::Missile,
    PowerupKind::Laser,
];

/// Apply damage to an enemy, paying out kill rewards on the lethal hit.
/// Already-dead enemies absorb nothing.
fn damage_enemy(
    enemy: &mut Enemy,
    amount: i32,
    session: &mut SessionState,
    rng: &mut ChaCha8Rng,
    drops: &mut Drops,
    audio: &mut Vec<AudioEvent>,
) {
    if enemy.dead {
        return;
    }
    enemy.health -= amount;
    if enemy.health > 0 {
        audio.push(AudioEvent::EnemyHit);
        return;
    }

    enemy.dead = true;
    let profile = get_profile(enemy.kind());
    session.score += profile.points;
    audio.push(AudioEvent::Explosion);

    drops.currency.push(CurrencyPickup {
        pos: enemy.pos,
        amount: (profile.points + 9) / 10,
    });
    if rng.gen_bool(POWERUP_DROP_CHANCE) {
        let kind = DROPPABLE_POWERUPS[rng.gen_range(0..DROPPABLE_POWERUPS.len())];
        drops.powerups.push(Powerup {
            pos: enemy.pos,
            kind,
        });
    }
}

pub fn run(
    world: &mut World,
    session: &mut SessionState,
    progress: &mut PersistentProgress,
    rng: &mut ChaCha8Rng,
    now_ms: f64,
    audio: &mut Vec<AudioEvent>,
) -> CollisionOutcome {
    let mut drops = Drops::default();
    let mut progress_dirty = false;

    // 1. Player bullets vs enemies. A bullet is spent on its first hit.
    {
        let World {
            bullets, enemies, ..
        } = &mut *world;
        bullets.retain(|bullet| {
            for enemy in enemies.iter_mut() {
                if !enemy.dead
                    && aabb_overlap(
                        bullet.pos,
                        bullet.width,
                        bullet.height,
                        enemy.pos,
                        enemy.width,
                        enemy.height,
                    )
                {
                    damage_enemy(enemy, bullet.damage, session, rng, &mut drops, audio);
                    return false;
                }
            }
            true
        });
    }

    // 2. Missiles vs enemies: proximity fuse against any living enemy,
    // not just the homing target.
    {
        let World {
            missiles, enemies, ..
        } = &mut *world;
        missiles.retain(|missile| {
            for enemy in enemies.iter_mut() {
                if !enemy.dead
                    && missile.pos.distance_to(&enemy.pos)
                        < enemy.width / 2.0 + MISSILE_HIT_RADIUS
                {
                    damage_enemy(enemy, MISSILE_DAMAGE, session, rng, &mut drops, audio);
                    return false;
                }
            }
            true
        });
    }

    // 3. Player vs enemies (contact). Ramming destroys regular enemies
    // outright with no rewards; boss-class enemies survive and deal
    // cooldown-gated contact damage instead.
    {
        let World {
            player, enemies, ..
        } = &mut *world;
        for enemy in enemies.iter_mut() {
            if enemy.dead
                || !aabb_overlap(
                    player.pos,
                    player.width,
                    player.height,
                    enemy.pos,
                    enemy.width,
                    enemy.height,
                )
            {
                continue;
            }
            if enemy.kind().is_boss_class() {
                if cooldown_ready(player.last_contact_hit_ms, now_ms, CONTACT_HIT_COOLDOWN_MS) {
                    player.last_contact_hit_ms = Some(now_ms);
                    session.apply_damage(CONTACT_DAMAGE);
                    audio.push(AudioEvent::Hit);
                }
            } else {
                enemy.dead = true;
                session.apply_damage(CONTACT_DAMAGE);
                audio.push(AudioEvent::Hit);
            }
        }
    }

    // 4. Player vs powerups.
    {
        let World {
            player, powerups, ..
        } = &mut *world;
        powerups.retain(|powerup| {
            if aabb_overlap(
                player.pos,
                player.width,
                player.height,
                powerup.pos,
                POWERUP_SIZE,
                POWERUP_SIZE,
            ) {
                session.activate_powerup(powerup.kind, now_ms);
                audio.push(AudioEvent::Powerup);
                false
            } else {
                true
            }
        });
    }

    // 5. Player vs currency.
    {
        let World {
            player,
            currency_pickups,
            ..
        } = &mut *world;
        currency_pickups.retain(|pickup| {
            if aabb_overlap(
                player.pos,
                player.width,
                player.height,
                pickup.pos,
                CURRENCY_SIZE,
                CURRENCY_SIZE,
            ) {
                progress.currency += pickup.amount;
                progress_dirty = true;
                false
            } else {
                true
            }
        });
    }

    // 6. Interceptors vs enemy bullets: mutual destruction, one for one.
    {
        let World {
            defense_bullets,
            enemy_bullets,
            ..
        } = &mut *world;
        let mut intercepted = vec![false; enemy_bullets.len()];
        defense_bullets.retain(|interceptor| {
            for (i, shot) in enemy_bullets.iter().enumerate() {
                if !intercepted[i]
                    && interceptor.pos.distance_to(&shot.pos) < DEFENSE_INTERCEPT_RADIUS
                {
                    intercepted[i] = true;
                    return false;
                }
            }
            true
        });
        let mut i = 0;
        enemy_bullets.retain(|_| {
            let keep = !intercepted[i];
            i += 1;
            keep
        });
    }

    // 7. Enemy bullets vs player.
    {
        let World {
            player,
            enemy_bullets,
            ..
        } = &mut *world;
        enemy_bullets.retain(|shot| {
            if aabb_overlap(
                player.pos,
                player.width,
                player.height,
                shot.pos,
                ENEMY_BULLET_SIZE,
                ENEMY_BULLET_SIZE,
            ) {
                session.apply_damage(ENEMY_BULLET_DAMAGE);
                audio.push(AudioEvent::Hit);
                false
            } else {
                true
            }
        });
    }

    // 8. Boss lasers vs player: two fixed-width edge bands at the
    // emitter's altitude, with a hit cooldown so continuous overlap deals
    // damage at a fixed rate.
    {
        let World {
            player, enemies, ..
        } = &mut *world;
        let in_left_band = player.pos.x - player.width / 2.0 < LASER_ZONE_WIDTH;
        let in_right_band = player.pos.x + player.width / 2.0 > FIELD_WIDTH - LASER_ZONE_WIDTH;
        if in_left_band || in_right_band {
            for enemy in enemies.iter().filter(|e| !e.dead && e.laser_active()) {
                let vertical_hit = (player.pos.y - enemy.pos.y).abs()
                    < LASER_BAND_HALF_HEIGHT + player.height / 2.0;
                if vertical_hit
                    && cooldown_ready(player.last_laser_hit_ms, now_ms, LASER_HIT_COOLDOWN_MS)
                {
                    player.last_laser_hit_ms = Some(now_ms);
                    session.apply_damage(LASER_DAMAGE);
                    audio.push(AudioEvent::Hit);
                }
            }
        }
    }

    world.currency_pickups.extend(drops.currency);
    world.powerups.extend(drops.powerups);

    session.health = session.health.max(0);
    CollisionOutcome {
        player_died: session.is_dead(),
        progress_dirty,
    }
}
