//! The simulation world: one fixed-role collection per entity class.
//!
//! No generic entity store; each role has its own `Vec` and its own
//! lifecycle rules. Enemies get stable ids so homing references can be
//! re-resolved after removals.

use rand::Rng;

use starfall_core::constants::*;
use starfall_core::entities::{
    Bullet, CurrencyPickup, DefenseBullet, Enemy, EnemyBehavior, EnemyBullet, EnemyId, Missile,
    Player, Powerup,
};
use starfall_core::enums::EnemyKind;
use starfall_core::types::Vec2;

use starfall_ai::profiles::get_profile;

/// All live entities, owned by the engine.
pub struct World {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub missiles: Vec<Missile>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub defense_bullets: Vec<DefenseBullet>,
    pub enemies: Vec<Enemy>,
    pub powerups: Vec<Powerup>,
    pub currency_pickups: Vec<CurrencyPickup>,
    pub(crate) next_enemy_id: EnemyId,
}

impl World {
    pub fn new() -> Self {
        Self {
            player: Player::new(Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT - 50.0)),
            bullets: Vec::new(),
            missiles: Vec::new(),
            enemy_bullets: Vec::new(),
            defense_bullets: Vec::new(),
            enemies: Vec::new(),
            powerups: Vec::new(),
            currency_pickups: Vec::new(),
            next_enemy_id: 0,
        }
    }

    /// Spawn an enemy of the given kind at its entry position and return
    /// its id. Regular kinds enter from the top edge at a random x;
    /// sidewinders enter from a random side edge; bosses enter centered.
    pub fn spawn_enemy(&mut self, kind: EnemyKind, rng: &mut impl Rng) -> EnemyId {
        let profile = get_profile(kind);
        let half_w = profile.width / 2.0;
        let half_h = profile.height / 2.0;

        let (pos, direction) = match kind {
            EnemyKind::Sidewinder => {
                let from_left = rng.gen_bool(0.5);
                let x = if from_left {
                    -half_w
                } else {
                    FIELD_WIDTH + half_w
                };
                let y = rng.gen_range(60.0..250.0);
                (Vec2::new(x, y), if from_left { 1.0 } else { -1.0 })
            }
            EnemyKind::Guardian | EnemyKind::Devastator => {
                let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
                (Vec2::new(FIELD_WIDTH / 2.0, -half_h), direction)
            }
            _ => {
                let x = rng.gen_range(half_w..FIELD_WIDTH - half_w);
                (Vec2::new(x, -half_h), 1.0)
            }
        };

        let id = self.next_enemy_id;
        self.next_enemy_id += 1;
        self.enemies.push(Enemy {
            id,
            pos,
            width: profile.width,
            height: profile.height,
            health: profile.health,
            max_health: profile.health,
            dead: false,
            behavior: EnemyBehavior::for_kind(kind, direction),
        });
        id
    }

    /// Look up a living enemy by id. Dead-marked enemies are invisible to
    /// homing references.
    pub fn living_enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id && !e.dead)
    }

    /// Nearest living enemy to a point, if any.
    pub fn nearest_living_enemy(&self, pos: &Vec2) -> Option<&Enemy> {
        self.enemies
            .iter()
            .filter(|e| !e.dead)
            .map(|e| (e, pos.distance_to(&e.pos)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(e, _)| e)
    }

    /// Whether any boss-class enemy (guardian or devastator) is alive.
    pub fn boss_class_alive(&self) -> bool {
        self.enemies
            .iter()
            .any(|e| !e.dead && e.kind().is_boss_class())
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
