//! Events emitted by the simulation for audio feedback.

use serde::{Deserialize, Serialize};

/// Fire-and-forget sound cues for the host audio system. The engine
/// emits these on defined events and never awaits a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Primary gun fired.
    Shoot,
    /// Shotgun spread fired.
    ShootShotgun,
    /// Laser bolt fired.
    ShootLaser,
    /// Missile launched.
    ShootMissile,
    /// An enemy was destroyed.
    Explosion,
    /// The player took damage.
    Hit,
    /// A powerup was collected.
    Powerup,
    /// An enemy took non-lethal damage.
    EnemyHit,
    /// An enemy fired.
    EnemyShoot,
}
