//! Per-session state: score, health, shields, and the active powerup.
//!
//! Fully reset at session start; only health, shields, and the powerup
//! timer decay during play.

use starfall_core::constants::*;
use starfall_core::entities::PersistentProgress;
use starfall_core::enums::PowerupKind;

pub struct SessionState {
    pub score: u32,
    pub health: i32,
    pub shields: i32,
    pub powerup: Option<PowerupKind>,
    /// Simulation timestamp at which the active powerup expires (ms).
    pub powerup_expires_ms: f64,
    /// Score at which the next shop visit triggers.
    pub next_shop_threshold: u32,
}

impl SessionState {
    /// Fresh session. Shields are seeded from the persistent capacity;
    /// everything else starts from fixed values.
    pub fn new(progress: &PersistentProgress) -> Self {
        Self {
            score: 0,
            health: PLAYER_START_HEALTH,
            shields: progress.max_shields,
            powerup: None,
            powerup_expires_ms: 0.0,
            next_shop_threshold: SHOP_SCORE_THRESHOLD,
        }
    }

    /// Route damage shields-first: shields absorb what they can, the
    /// overflow comes off health exactly once.
    pub fn apply_damage(&mut self, amount: i32) {
        let absorbed = amount.min(self.shields);
        self.shields -= absorbed;
        self.health -= amount - absorbed;
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Activate a powerup with a full fresh duration. A powerup already
    /// active is overwritten, never stacked or queued.
    pub fn activate_powerup(&mut self, kind: PowerupKind, now_ms: f64) {
        self.powerup = Some(kind);
        self.powerup_expires_ms = now_ms + POWERUP_DURATION_MS;
    }

    /// Clear the active powerup once its duration has elapsed.
    pub fn expire_powerup(&mut self, now_ms: f64) {
        if self.powerup.is_some() && now_ms >= self.powerup_expires_ms {
            self.powerup = None;
        }
    }

    pub fn powerup_remaining_ms(&self, now_ms: f64) -> f64 {
        if self.powerup.is_some() {
            (self.powerup_expires_ms - now_ms).max(0.0)
        } else {
            0.0
        }
    }

    /// Add shield points from an in-shop capacity purchase.
    pub fn grant_shields(&mut self, amount: i32) {
        self.shields += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SessionState {
        SessionState::new(&PersistentProgress::default())
    }

    #[test]
    fn damage_consumes_shields_before_health() {
        let mut s = session();
        s.shields = 3;
        s.apply_damage(1);
        assert_eq!(s.shields, 2);
        assert_eq!(s.health, PLAYER_START_HEALTH);
    }

    #[test]
    fn damage_overflow_hits_health_once() {
        let mut s = session();
        s.shields = 2;
        s.health = 5;
        s.apply_damage(5);
        assert_eq!(s.shields, 0);
        // Shields absorbed 2 of 5; the overflow of 3 comes off health.
        assert_eq!(s.health, 2);
    }

    #[test]
    fn damage_with_no_shields_hits_health_directly() {
        let mut s = session();
        s.apply_damage(2);
        assert_eq!(s.health, PLAYER_START_HEALTH - 2);
        assert_eq!(s.shields, 0);
    }

    #[test]
    fn powerup_overwrites_with_fresh_duration() {
        let mut s = session();
        s.activate_powerup(PowerupKind::Shotgun, 0.0);
        s.activate_powerup(PowerupKind::Laser, 5000.0);
        assert_eq!(s.powerup, Some(PowerupKind::Laser));
        assert_eq!(s.powerup_remaining_ms(5000.0), POWERUP_DURATION_MS);

        // The old powerup's expiry no longer applies.
        s.expire_powerup(POWERUP_DURATION_MS + 1.0);
        assert_eq!(s.powerup, Some(PowerupKind::Laser));
        s.expire_powerup(5000.0 + POWERUP_DURATION_MS);
        assert_eq!(s.powerup, None);
    }

    #[test]
    fn shields_seeded_from_progress() {
        let progress = PersistentProgress {
            max_shields: 4,
            ..Default::default()
        };
        let s = SessionState::new(&progress);
        assert_eq!(s.shields, 4);
    }
}
