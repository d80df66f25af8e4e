#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::entities::{cooldown_ready, EnemyBehavior, PersistentProgress};
    use crate::enums::*;
    use crate::events::AudioEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{aabb_overlap, SimTime, Vec2};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_enemy_kind_serde() {
        let variants = vec![
            EnemyKind::Straight,
            EnemyKind::Tank,
            EnemyKind::Heavy,
            EnemyKind::Zigzag,
            EnemyKind::Diver,
            EnemyKind::Shooter,
            EnemyKind::Sidewinder,
            EnemyKind::Orbiter,
            EnemyKind::Guardian,
            EnemyKind::Devastator,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Idle,
            GamePhase::Running,
            GamePhase::Paused,
            GamePhase::ShopOpen,
            GamePhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartGame,
            PlayerCommand::TogglePause,
            PlayerCommand::CloseShop,
            PlayerCommand::Buy {
                item: ShopItem::WeaponTier,
            },
            PlayerCommand::Buy {
                item: ShopItem::AutoDefense,
            },
            PlayerCommand::ReturnToMenu,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_audio_event_serde() {
        let events = vec![
            AudioEvent::Shoot,
            AudioEvent::ShootShotgun,
            AudioEvent::ShootLaser,
            AudioEvent::ShootMissile,
            AudioEvent::Explosion,
            AudioEvent::Hit,
            AudioEvent::Powerup,
            AudioEvent::EnemyHit,
            AudioEvent::EnemyShoot,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: AudioEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
    }

    /// Missing fields in a stored progress record fall back to defaults.
    #[test]
    fn test_progress_defaults_on_partial_record() {
        let progress: PersistentProgress = serde_json::from_str("{\"currency\": 120}").unwrap();
        assert_eq!(progress.currency, 120);
        assert_eq!(progress.weapon_tier, 1);
        assert_eq!(progress.max_shields, 0);
        assert!(!progress.auto_defense);
    }

    #[test]
    fn test_default_progress_starts_at_tier_one() {
        let progress = PersistentProgress::default();
        assert_eq!(progress.weapon_tier, 1);
        assert_eq!(progress.currency, 0);
    }

    #[test]
    fn test_vec2_geometry() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);

        let right = Vec2::new(10.0, 0.0);
        assert!((a.angle_to(&right) - 0.0).abs() < 1e-10);
        let down = Vec2::new(0.0, 10.0);
        assert!((a.angle_to(&down) - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Vec2::new(100.0, 100.0);
        // Touching edges do not overlap
        assert!(!aabb_overlap(a, 10.0, 10.0, Vec2::new(110.0, 100.0), 10.0, 10.0));
        assert!(aabb_overlap(a, 10.0, 10.0, Vec2::new(109.0, 100.0), 10.0, 10.0));
        assert!(!aabb_overlap(a, 10.0, 10.0, Vec2::new(100.0, 120.0), 10.0, 10.0));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);

        for _ in 0..60 {
            time.advance(1000.0 / 60.0);
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_ms - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_cooldown_gate() {
        // Never fired: always ready.
        assert!(cooldown_ready(None, 0.0, 150.0));
        // Within the interval: gated.
        assert!(!cooldown_ready(Some(100.0), 200.0, 150.0));
        // Past the interval: ready again.
        assert!(cooldown_ready(Some(100.0), 251.0, 150.0));
    }

    #[test]
    fn test_behavior_kind_round_trip() {
        for kind in [
            EnemyKind::Straight,
            EnemyKind::Tank,
            EnemyKind::Heavy,
            EnemyKind::Zigzag,
            EnemyKind::Diver,
            EnemyKind::Shooter,
            EnemyKind::Sidewinder,
            EnemyKind::Orbiter,
            EnemyKind::Guardian,
            EnemyKind::Devastator,
        ] {
            let behavior = EnemyBehavior::for_kind(kind, 1.0);
            assert_eq!(behavior.kind(), kind);
        }
    }

    #[test]
    fn test_boss_class() {
        assert!(EnemyKind::Guardian.is_boss_class());
        assert!(EnemyKind::Devastator.is_boss_class());
        assert!(!EnemyKind::Straight.is_boss_class());
        assert!(!EnemyKind::Orbiter.is_boss_class());
    }
}
