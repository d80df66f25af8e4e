//! Per-variant movement and attack rules.
//!
//! `update_enemy` dispatches on the enemy's behavior variant. Each rule is
//! a function of the enemy, the elapsed step time, and a read-only world
//! context; it mutates only the enemy and pushes shot specs. Attack
//! cooldowns compare elapsed milliseconds, never step counts, so firing
//! cadence is independent of the host's frame rate.

use starfall_core::constants::*;
use starfall_core::entities::{cooldown_ready, Enemy, EnemyBehavior};
use starfall_core::types::Vec2;

use crate::boss;

/// Read-only world context for one behavior evaluation.
pub struct BehaviorContext {
    pub player_x: f64,
    pub player_y: f64,
    /// Elapsed simulation time (ms).
    pub now_ms: f64,
    /// Step length as a fraction of the nominal frame (dt_ms / FRAME_MS).
    pub dt: f64,
}

/// A bullet the engine should spawn on behalf of an enemy.
#[derive(Debug, Clone, Copy)]
pub struct EnemyShot {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl EnemyShot {
    /// Shot from `pos` at `angle` (radians) with the given speed.
    pub fn at_angle(pos: Vec2, angle: f64, speed: f64) -> Self {
        Self {
            pos,
            vel: Vec2::new(angle.cos() * speed, angle.sin() * speed),
        }
    }
}

/// Apply one step of the enemy's behavior rule.
pub fn update_enemy(enemy: &mut Enemy, ctx: &BehaviorContext, shots: &mut Vec<EnemyShot>) {
    // Boss-class rules take the whole enemy; dispatch on the tag first.
    match enemy.kind() {
        starfall_core::enums::EnemyKind::Guardian => return update_guardian(enemy, ctx, shots),
        starfall_core::enums::EnemyKind::Devastator => {
            return boss::update_devastator(enemy, ctx, shots)
        }
        _ => {}
    }

    match &mut enemy.behavior {
        EnemyBehavior::Straight => {
            enemy.pos.y += ENEMY_SPEED * ctx.dt;
        }
        EnemyBehavior::Tank => {
            enemy.pos.y += ENEMY_SPEED * 0.5 * ctx.dt;
        }
        EnemyBehavior::Heavy => {
            // Pulsing descent: speed oscillates between 0 and full.
            let pulse = 0.5 + 0.5 * (ctx.now_ms / 500.0).sin();
            enemy.pos.y += ENEMY_SPEED * pulse * ctx.dt;
        }
        EnemyBehavior::Zigzag => {
            enemy.pos.y += ENEMY_SPEED * ctx.dt;
            // Horizontal drift is a function of accumulated y, so the
            // path is deterministic given the descent.
            enemy.pos.x += (enemy.pos.y / 30.0).sin() * 3.0 * ctx.dt;
        }
        EnemyBehavior::Diver { diving, dive_x } => {
            if !*diving {
                enemy.pos.y += ENEMY_SPEED * 0.5 * ctx.dt;
                if (enemy.pos.x - ctx.player_x).abs() < 50.0 && enemy.pos.y < FIELD_HEIGHT / 2.0 {
                    *diving = true;
                    // Target x is frozen here; the dive does not re-home.
                    *dive_x = ctx.player_x;
                }
            } else {
                let angle = (FIELD_HEIGHT - enemy.pos.y).atan2(*dive_x - enemy.pos.x);
                enemy.pos.x += angle.cos() * 4.0 * ctx.dt;
                enemy.pos.y += angle.sin() * 4.0 * ctx.dt;
            }
        }
        EnemyBehavior::Shooter { last_shot_ms } => {
            // Descend to a hold line above mid-screen and stop.
            if enemy.pos.y < FIELD_HEIGHT / 2.0 - 50.0 {
                enemy.pos.y += ENEMY_SPEED * 0.7 * ctx.dt;
            }

            if cooldown_ready(*last_shot_ms, ctx.now_ms, 2000.0) {
                *last_shot_ms = Some(ctx.now_ms);
                let aim = enemy
                    .pos
                    .angle_to(&Vec2::new(ctx.player_x, ctx.player_y));
                for i in -1..=1 {
                    shots.push(EnemyShot::at_angle(enemy.pos, aim + i as f64 * 0.3, 3.0));
                }
            }
        }
        EnemyBehavior::Sidewinder {
            direction,
            last_shot_ms,
        } => {
            enemy.pos.x += *direction * 3.0 * ctx.dt;

            if cooldown_ready(*last_shot_ms, ctx.now_ms, 500.0) {
                *last_shot_ms = Some(ctx.now_ms);
                shots.push(EnemyShot {
                    pos: enemy.pos,
                    vel: Vec2::new(0.0, 4.0),
                });
            }
        }
        EnemyBehavior::Orbiter {
            center,
            angle,
            last_shot_ms,
        } => {
            // The orbit center is wherever the enemy happens to be the
            // first time this rule runs, not where it spawned.
            let c = *center.get_or_insert(enemy.pos);

            *angle += 0.05 * ctx.dt;
            enemy.pos.x = c.x + angle.cos() * 40.0;
            enemy.pos.y = c.y + angle.sin() * 40.0;

            if cooldown_ready(*last_shot_ms, ctx.now_ms, 1500.0) {
                *last_shot_ms = Some(ctx.now_ms);
                for i in 0..4 {
                    let a = std::f64::consts::FRAC_PI_2 * i as f64;
                    shots.push(EnemyShot::at_angle(enemy.pos, a, 3.0));
                }
            }
        }
        EnemyBehavior::Guardian { .. } | EnemyBehavior::Devastator { .. } => {}
    }
}

/// Guardian mini-boss: settle into the top third, sweep side to side,
/// cycle the edge lasers, and fire downward bullet fans.
fn update_guardian(enemy: &mut Enemy, ctx: &BehaviorContext, shots: &mut Vec<EnemyShot>) {
    if enemy.pos.y < FIELD_HEIGHT / 3.0 {
        enemy.pos.y += 1.0 * ctx.dt;
    }

    let EnemyBehavior::Guardian {
        move_dir,
        laser_active,
        last_laser_ms,
        laser_started_ms,
        last_spread_ms,
    } = &mut enemy.behavior
    else {
        return;
    };

    enemy.pos.x += *move_dir * 1.5 * ctx.dt;
    if enemy.pos.x < 50.0 || enemy.pos.x > FIELD_WIDTH - 50.0 {
        *move_dir = -*move_dir;
    }

    // The laser window cycles independently of the bullet cooldowns.
    if cooldown_ready(*last_laser_ms, ctx.now_ms, GUARDIAN_LASER_INTERVAL_MS) {
        *last_laser_ms = Some(ctx.now_ms);
        *laser_active = true;
        *laser_started_ms = ctx.now_ms;
    }
    if *laser_active && ctx.now_ms - *laser_started_ms > GUARDIAN_LASER_DURATION_MS {
        *laser_active = false;
    }

    if cooldown_ready(*last_spread_ms, ctx.now_ms, 3000.0) {
        *last_spread_ms = Some(ctx.now_ms);
        let muzzle = Vec2::new(enemy.pos.x, enemy.pos.y + enemy.height / 2.0);
        for i in -2..=2 {
            let a = std::f64::consts::FRAC_PI_2 + i as f64 * 0.4;
            shots.push(EnemyShot::at_angle(muzzle, a, 3.5));
        }
    }
}
