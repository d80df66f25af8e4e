//! Spawn director: interval timers for regular enemies, the guardian
//! mini-boss, and the devastator boss.
//!
//! Mutual exclusion: at most one devastator is alive at a time, and
//! guardian spawns are suppressed while any boss-class enemy is alive.
//! A suppressed spawn skips its whole cycle rather than queueing.

use rand_chacha::ChaCha8Rng;
use rand::Rng;

use starfall_core::constants::*;
use starfall_core::entities::cooldown_ready;
use starfall_core::enums::EnemyKind;

use starfall_ai::profiles::REGULAR_KINDS;

use crate::world::World;

pub struct SpawnDirector {
    last_enemy_ms: Option<f64>,
    last_guardian_ms: Option<f64>,
    last_devastator_ms: Option<f64>,
}

impl SpawnDirector {
    /// Timers anchored at session start, so the first spawn of each class
    /// waits a full interval.
    pub fn new() -> Self {
        Self {
            last_enemy_ms: Some(0.0),
            last_guardian_ms: Some(0.0),
            last_devastator_ms: Some(0.0),
        }
    }

    pub fn run(&mut self, world: &mut World, rng: &mut ChaCha8Rng, now_ms: f64) {
        if cooldown_ready(self.last_enemy_ms, now_ms, ENEMY_SPAWN_INTERVAL_MS) {
            self.last_enemy_ms = Some(now_ms);
            let kind = REGULAR_KINDS[rng.gen_range(0..REGULAR_KINDS.len())];
            world.spawn_enemy(kind, rng);
        }

        // Devastator first: one spawned this step already suppresses the
        // guardian check below.
        if cooldown_ready(self.last_devastator_ms, now_ms, DEVASTATOR_SPAWN_INTERVAL_MS) {
            self.last_devastator_ms = Some(now_ms);
            let devastator_alive = world
                .enemies
                .iter()
                .any(|e| !e.dead && e.kind() == EnemyKind::Devastator);
            if !devastator_alive {
                world.spawn_enemy(EnemyKind::Devastator, rng);
            }
        }

        if cooldown_ready(self.last_guardian_ms, now_ms, GUARDIAN_SPAWN_INTERVAL_MS) {
            self.last_guardian_ms = Some(now_ms);
            if !world.boss_class_alive() {
                world.spawn_enemy(EnemyKind::Guardian, rng);
            }
        }
    }
}

impl Default for SpawnDirector {
    fn default() -> Self {
        Self::new()
    }
}
