//! Entity data for the fixed-role collections.
//!
//! Entities are plain data structs with no behavior; movement and attack
//! logic lives in `starfall-ai` and the sim systems. Timer fields are
//! explicit parts of each variant's state shape, keyed off elapsed
//! simulation milliseconds rather than step counts.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, PowerupKind};
use crate::types::Vec2;

/// Stable identifier for an enemy, used as a weak homing reference.
/// Never an ownership edge — holders must re-resolve it every step and
/// tolerate the referent's absence.
pub type EnemyId = u32;

/// Fire-rate gate: a timed action is a no-op unless the interval has
/// elapsed since it last fired. `None` means it has never fired.
pub fn cooldown_ready(last_ms: Option<f64>, now_ms: f64, interval_ms: f64) -> bool {
    last_ms.map_or(true, |t| now_ms - t > interval_ms)
}

/// The player ship. Singleton; created at session start, reset on restart,
/// never destroyed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub width: f64,
    pub height: f64,
    pub speed: f64,
    /// Last primary-gun fire timestamp (ms).
    pub last_shot_ms: Option<f64>,
    /// Last missile fire timestamp (ms).
    pub last_missile_ms: Option<f64>,
    /// Last laser-band damage tick (ms).
    pub last_laser_hit_ms: Option<f64>,
    /// Last boss-contact damage tick (ms).
    pub last_contact_hit_ms: Option<f64>,
    /// Last point-defense interceptor fire timestamp (ms).
    pub last_defense_ms: Option<f64>,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            width: crate::constants::PLAYER_SIZE,
            height: crate::constants::PLAYER_SIZE,
            speed: crate::constants::PLAYER_SPEED,
            last_shot_ms: None,
            last_missile_ms: None,
            last_laser_hit_ms: None,
            last_contact_hit_ms: None,
            last_defense_ms: None,
        }
    }
}

/// A player bullet (primary gun, shotgun pellet, or laser bolt).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f64,
    pub height: f64,
    pub damage: i32,
}

/// A homing missile. The target is re-validated (and re-acquired if dead
/// or absent) every step; with no enemies present it keeps its last
/// velocity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Missile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub target: Option<EnemyId>,
}

/// A bullet fired by an enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyBullet {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// A point-defense interceptor. Aimed at fire time; destroyed on
/// intercept or on leaving the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefenseBullet {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Per-variant behavior state. The variant tag selects the movement and
/// attack rule; the payload carries that rule's transient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EnemyBehavior {
    Straight,
    Tank,
    Heavy,
    Zigzag,
    Diver {
        diving: bool,
        /// Target x frozen at dive start; the dive does not re-home.
        dive_x: f64,
    },
    Shooter {
        last_shot_ms: Option<f64>,
    },
    Sidewinder {
        /// Horizontal travel direction: +1 (from left) or -1 (from right).
        direction: f64,
        last_shot_ms: Option<f64>,
    },
    Orbiter {
        /// Captured on first update, wherever the enemy happens to be.
        center: Option<Vec2>,
        angle: f64,
        last_shot_ms: Option<f64>,
    },
    Guardian {
        move_dir: f64,
        laser_active: bool,
        last_laser_ms: Option<f64>,
        laser_started_ms: f64,
        last_spread_ms: Option<f64>,
    },
    Devastator {
        /// Health-driven phase index 0..=2. Only ever increases.
        phase: u8,
        /// Timestamp of the most recent phase transition (ms).
        phase_changed_ms: f64,
        move_dir: f64,
        orbit_angle: f64,
        laser_active: bool,
        last_laser_ms: Option<f64>,
        laser_started_ms: f64,
        last_spread_ms: Option<f64>,
        last_spiral_ms: Option<f64>,
        spiral_angle: f64,
        last_burst_ms: Option<f64>,
        last_aimed_ms: Option<f64>,
    },
}

impl EnemyBehavior {
    /// Fresh behavior state for a kind. `direction` seeds the sidewinder's
    /// travel direction and the bosses' initial sweep direction.
    pub fn for_kind(kind: EnemyKind, direction: f64) -> Self {
        match kind {
            EnemyKind::Straight => Self::Straight,
            EnemyKind::Tank => Self::Tank,
            EnemyKind::Heavy => Self::Heavy,
            EnemyKind::Zigzag => Self::Zigzag,
            EnemyKind::Diver => Self::Diver {
                diving: false,
                dive_x: 0.0,
            },
            EnemyKind::Shooter => Self::Shooter { last_shot_ms: None },
            EnemyKind::Sidewinder => Self::Sidewinder {
                direction,
                last_shot_ms: None,
            },
            EnemyKind::Orbiter => Self::Orbiter {
                center: None,
                angle: 0.0,
                last_shot_ms: None,
            },
            EnemyKind::Guardian => Self::Guardian {
                move_dir: direction,
                laser_active: false,
                last_laser_ms: None,
                laser_started_ms: 0.0,
                last_spread_ms: None,
            },
            EnemyKind::Devastator => Self::Devastator {
                phase: 0,
                phase_changed_ms: 0.0,
                move_dir: direction,
                orbit_angle: 0.0,
                laser_active: false,
                last_laser_ms: None,
                laser_started_ms: 0.0,
                last_spread_ms: None,
                last_spiral_ms: None,
                spiral_angle: 0.0,
                last_burst_ms: None,
                last_aimed_ms: None,
            },
        }
    }

    pub fn kind(&self) -> EnemyKind {
        match self {
            Self::Straight => EnemyKind::Straight,
            Self::Tank => EnemyKind::Tank,
            Self::Heavy => EnemyKind::Heavy,
            Self::Zigzag => EnemyKind::Zigzag,
            Self::Diver { .. } => EnemyKind::Diver,
            Self::Shooter { .. } => EnemyKind::Shooter,
            Self::Sidewinder { .. } => EnemyKind::Sidewinder,
            Self::Orbiter { .. } => EnemyKind::Orbiter,
            Self::Guardian { .. } => EnemyKind::Guardian,
            Self::Devastator { .. } => EnemyKind::Devastator,
        }
    }
}

/// An enemy ship.
///
/// `health` only ever decreases, via damage application. The step health
/// first reaches ≤0 the enemy is marked `dead` and stays in the collection
/// until end-of-step cleanup, so all same-step passes still see the marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub pos: Vec2,
    pub width: f64,
    pub height: f64,
    pub health: i32,
    pub max_health: i32,
    pub dead: bool,
    pub behavior: EnemyBehavior,
}

impl Enemy {
    pub fn kind(&self) -> EnemyKind {
        self.behavior.kind()
    }

    /// Whether this enemy's edge laser is currently firing.
    pub fn laser_active(&self) -> bool {
        match &self.behavior {
            EnemyBehavior::Guardian { laser_active, .. } => *laser_active,
            EnemyBehavior::Devastator { laser_active, .. } => *laser_active,
            _ => false,
        }
    }
}

/// A falling weapon powerup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Powerup {
    pub pos: Vec2,
    pub kind: PowerupKind,
}

/// A falling currency drop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyPickup {
    pub pos: Vec2,
    pub amount: u32,
}

/// Cross-session upgrade state. Mutated only by successful shop purchases
/// and currency pickups; persisted through the `ProgressStore` collaborator
/// immediately after each mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistentProgress {
    pub currency: u32,
    /// Weapon tier, ≥1 and unbounded upward.
    pub weapon_tier: u32,
    /// Max shield capacity, always an even number.
    pub max_shields: i32,
    pub auto_defense: bool,
}

impl Default for PersistentProgress {
    fn default() -> Self {
        Self {
            currency: 0,
            weapon_tier: 1,
            max_shields: 0,
            auto_defense: false,
        }
    }
}
