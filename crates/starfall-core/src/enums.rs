//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session phase (top-level state machine).
///
/// Idle → Running → Paused ⇄ Running → ShopOpen → Running → GameOver → Idle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Pre-start / post-game-over menu state.
    #[default]
    Idle,
    /// Simulation advancing.
    Running,
    /// Explicitly paused; no systems run.
    Paused,
    /// Shop overlay open; a pause variant entered on a score threshold.
    ShopOpen,
    /// Health reached zero. Terminal until an external restart.
    GameOver,
}

/// Enemy behavior variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Constant descent.
    Straight,
    /// Slow descent, high health.
    Tank,
    /// Time-modulated (pulsing) descent, high health.
    Heavy,
    /// Descent with a sinusoidal horizontal offset driven by accumulated y.
    Zigzag,
    /// Cruises, then dives at a frozen target x once near the player.
    Diver,
    /// Descends to a hold line and fires aimed spreads.
    Shooter,
    /// Crosses the field horizontally, dropping bullets.
    Sidewinder,
    /// Orbits a lazily captured center, firing radial volleys.
    Orbiter,
    /// Mini-boss: sweeping movement, edge lasers, bullet fans.
    Guardian,
    /// Boss: three health-driven phases with disjoint patterns.
    Devastator,
}

impl EnemyKind {
    /// Mini-bosses and the boss are exempt from off-screen pruning and
    /// survive player contact.
    pub fn is_boss_class(&self) -> bool {
        matches!(self, EnemyKind::Guardian | EnemyKind::Devastator)
    }
}

/// Temporary weapon-mode override granted by a pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerupKind {
    /// 5-bullet spread per trigger pull.
    Shotgun,
    /// Homing missiles replace the primary gun.
    Missile,
    /// Wide high-damage bolt.
    Laser,
}

/// Purchasable permanent upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShopItem {
    /// Raises weapon tier by one (cost scales with current tier).
    WeaponTier,
    /// Raises max shield capacity by two (cost scales with capacity).
    ShieldCapacity,
    /// One-time point-defense turret that intercepts enemy bullets.
    AutoDefense,
}
