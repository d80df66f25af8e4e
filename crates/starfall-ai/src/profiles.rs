//! Per-kind stat profiles.
//!
//! Consolidates the health, score value, and hitbox parameters for each
//! enemy variant in one lookup.

use starfall_core::constants::*;
use starfall_core::enums::EnemyKind;

/// Static stats for an enemy variant.
pub struct EnemyProfile {
    pub health: i32,
    /// Score awarded on kill; the currency drop is ceil(points / 10).
    pub points: u32,
    pub width: f64,
    pub height: f64,
}

/// Get the profile for a given kind.
pub fn get_profile(kind: EnemyKind) -> EnemyProfile {
    match kind {
        EnemyKind::Straight => EnemyProfile {
            health: 1,
            points: 10,
            width: ENEMY_SIZE,
            height: ENEMY_SIZE,
        },
        EnemyKind::Tank => EnemyProfile {
            health: 5,
            points: 25,
            width: ENEMY_SIZE,
            height: ENEMY_SIZE,
        },
        EnemyKind::Heavy => EnemyProfile {
            health: 6,
            points: 60,
            width: ENEMY_SIZE * 1.6,
            height: ENEMY_SIZE * 1.6,
        },
        EnemyKind::Zigzag => EnemyProfile {
            health: 2,
            points: 20,
            width: ENEMY_SIZE,
            height: ENEMY_SIZE,
        },
        EnemyKind::Diver => EnemyProfile {
            health: 1,
            points: 30,
            width: ENEMY_SIZE,
            height: ENEMY_SIZE,
        },
        EnemyKind::Shooter => EnemyProfile {
            health: 2,
            points: 40,
            width: ENEMY_SIZE,
            height: ENEMY_SIZE,
        },
        EnemyKind::Sidewinder => EnemyProfile {
            health: 1,
            points: 35,
            width: ENEMY_SIZE,
            height: ENEMY_SIZE,
        },
        EnemyKind::Orbiter => EnemyProfile {
            health: 2,
            points: 50,
            width: ENEMY_SIZE,
            height: ENEMY_SIZE,
        },
        EnemyKind::Guardian => EnemyProfile {
            health: 20,
            points: 200,
            width: GUARDIAN_SIZE,
            height: GUARDIAN_SIZE,
        },
        EnemyKind::Devastator => EnemyProfile {
            health: 100,
            points: 1000,
            width: DEVASTATOR_SIZE,
            height: DEVASTATOR_SIZE,
        },
    }
}

/// The regular (non-boss) kinds eligible for timed random spawns.
pub const REGULAR_KINDS: [EnemyKind; 8] = [
    EnemyKind::Straight,
    EnemyKind::Tank,
    EnemyKind::Heavy,
    EnemyKind::Zigzag,
    EnemyKind::Diver,
    EnemyKind::Shooter,
    EnemyKind::Sidewinder,
    EnemyKind::Orbiter,
];
