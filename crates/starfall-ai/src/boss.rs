//! Devastator boss: a three-phase machine driven by remaining health.
//!
//! Each phase owns a disjoint movement pattern and a disjoint attack
//! pattern. Phase transitions are one-directional because health only
//! ever decreases.

use starfall_core::constants::*;
use starfall_core::entities::{cooldown_ready, Enemy, EnemyBehavior};
use starfall_core::types::Vec2;

use crate::behavior::{BehaviorContext, EnemyShot};

/// Health-driven phase index: 0 while health is in the top third of
/// maximum, 1 in the middle third, 2 in the bottom third.
pub fn boss_phase(health: i32, max_health: i32) -> u8 {
    let upper = (2 * max_health + 2) / 3;
    let lower = (max_health + 2) / 3;
    if health > upper {
        0
    } else if health > lower {
        1
    } else {
        2
    }
}

/// Apply one step of the devastator's movement and attack patterns.
pub fn update_devastator(enemy: &mut Enemy, ctx: &BehaviorContext, shots: &mut Vec<EnemyShot>) {
    let current_phase = boss_phase(enemy.health, enemy.max_health);
    let pos = enemy.pos;
    let half_height = enemy.height / 2.0;

    let EnemyBehavior::Devastator {
        phase,
        phase_changed_ms,
        move_dir,
        orbit_angle,
        laser_active,
        last_laser_ms,
        laser_started_ms,
        last_spread_ms,
        last_spiral_ms,
        spiral_angle,
        last_burst_ms,
        last_aimed_ms,
    } = &mut enemy.behavior
    else {
        return;
    };

    if current_phase != *phase {
        *phase = current_phase;
        *phase_changed_ms = ctx.now_ms;
        // Attack patterns are disjoint per phase; kill any leftover beam.
        *laser_active = false;
    }

    let mut new_pos = pos;

    match current_phase {
        0 => {
            // Sweep: settle to a hold line, then patrol horizontally.
            if new_pos.y < 100.0 {
                new_pos.y += 1.0 * ctx.dt;
            }
            new_pos.x += *move_dir * 2.0 * ctx.dt;
            if new_pos.x < 80.0 || new_pos.x > FIELD_WIDTH - 80.0 {
                *move_dir = -*move_dir;
            }

            if cooldown_ready(*last_spread_ms, ctx.now_ms, 2500.0) {
                *last_spread_ms = Some(ctx.now_ms);
                let muzzle = Vec2::new(new_pos.x, new_pos.y + half_height);
                for i in -2..=2 {
                    let a = std::f64::consts::FRAC_PI_2 + i as f64 * 0.35;
                    shots.push(EnemyShot::at_angle(muzzle, a, 3.5));
                }
            }
        }
        1 => {
            // Erratic drift: a sum of incommensurate sines of time since
            // the phase change, so the path never settles into a loop.
            let t = ctx.now_ms - *phase_changed_ms;
            new_pos.x += ((t / 213.0).sin() * 4.0 + (t / 97.0).sin() * 2.0) * ctx.dt;
            new_pos.y += (t / 149.0).sin() * 1.5 * ctx.dt;
            new_pos.x = new_pos.x.clamp(80.0, FIELD_WIDTH - 80.0);
            new_pos.y = new_pos.y.clamp(60.0, 250.0);

            if cooldown_ready(*last_laser_ms, ctx.now_ms, DEVASTATOR_LASER_INTERVAL_MS) {
                *last_laser_ms = Some(ctx.now_ms);
                *laser_active = true;
                *laser_started_ms = ctx.now_ms;
            }
            if *laser_active && ctx.now_ms - *laser_started_ms > DEVASTATOR_LASER_DURATION_MS {
                *laser_active = false;
            }

            // Spiral stream: one bullet per cooldown at a rotating angle.
            if cooldown_ready(*last_spiral_ms, ctx.now_ms, 150.0) {
                *last_spiral_ms = Some(ctx.now_ms);
                *spiral_angle += 0.35;
                shots.push(EnemyShot::at_angle(new_pos, *spiral_angle, 3.0));
            }
        }
        _ => {
            // Circular: orbit a fixed point near the top of the field.
            *orbit_angle += 0.03 * ctx.dt;
            new_pos.x = FIELD_WIDTH / 2.0 + orbit_angle.cos() * 100.0;
            new_pos.y = 150.0 + orbit_angle.sin() * 60.0;

            if cooldown_ready(*last_burst_ms, ctx.now_ms, 2000.0) {
                *last_burst_ms = Some(ctx.now_ms);
                for i in 0..12 {
                    let a = std::f64::consts::TAU * i as f64 / 12.0;
                    shots.push(EnemyShot::at_angle(new_pos, a, 3.0));
                }
            }

            if cooldown_ready(*last_aimed_ms, ctx.now_ms, 700.0) {
                *last_aimed_ms = Some(ctx.now_ms);
                let aim = new_pos.angle_to(&Vec2::new(ctx.player_x, ctx.player_y));
                shots.push(EnemyShot::at_angle(new_pos, aim, 4.5));
            }
        }
    }

    enemy.pos = new_pos;
}
