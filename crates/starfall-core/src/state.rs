//! Game state snapshot — the complete visible state published after each
//! step. Rendering and UI collaborators consume this read-only; they
//! never reach into the simulation.

use serde::{Deserialize, Serialize};

use crate::entities::EnemyId;
use crate::enums::{EnemyKind, GamePhase, PowerupKind};
use crate::events::AudioEvent;
use crate::types::{SimTime, Vec2};

/// Complete game state broadcast after each step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub session: SessionView,
    pub progress: ProgressView,
    pub shop: ShopView,
    pub player: PlayerView,
    pub bullets: Vec<BulletView>,
    pub missiles: Vec<MissileView>,
    pub enemy_bullets: Vec<ShotView>,
    pub defense_bullets: Vec<ShotView>,
    pub enemies: Vec<EnemyView>,
    pub powerups: Vec<PowerupView>,
    pub currency_pickups: Vec<PickupView>,
    pub audio_events: Vec<AudioEvent>,
}

/// Per-session scores and resources for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionView {
    pub score: u32,
    pub health: i32,
    pub shields: i32,
    pub powerup: Option<PowerupKind>,
    /// Remaining powerup time (ms); 0 when no powerup is active.
    pub powerup_remaining_ms: f64,
}

/// Persistent progress for the HUD and shop screens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressView {
    pub currency: u32,
    pub weapon_tier: u32,
    pub max_shields: i32,
    pub auto_defense: bool,
}

/// Shop state: current costs and whether each purchase would succeed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopView {
    /// Score at which the next shop visit triggers.
    pub next_threshold: u32,
    pub weapon_tier_cost: u32,
    pub shield_cost: u32,
    pub auto_defense_cost: u32,
    pub can_buy_weapon_tier: bool,
    pub can_buy_shield: bool,
    pub can_buy_auto_defense: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileView {
    pub pos: Vec2,
    pub vel: Vec2,
    pub target: Option<EnemyId>,
}

/// A small round projectile (enemy bullet or interceptor).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotView {
    pub pos: Vec2,
    pub vel: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub width: f64,
    pub height: f64,
    pub health: i32,
    pub max_health: i32,
    /// Whether an edge laser is firing (guardian/devastator only).
    pub laser_active: bool,
    /// Boss phase index (devastator only).
    pub boss_phase: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerupView {
    pub pos: Vec2,
    pub kind: PowerupKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub pos: Vec2,
    pub amount: u32,
}
