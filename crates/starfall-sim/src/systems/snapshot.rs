//! Snapshot system: projects the world into a `GameStateSnapshot`.
//!
//! Read-only over the simulation; runs even while paused so the host
//! always has a current view.

use starfall_core::constants::AUTO_DEFENSE_COST;
use starfall_core::entities::PersistentProgress;
use starfall_core::enums::{EnemyKind, GamePhase, ShopItem};
use starfall_core::events::AudioEvent;
use starfall_core::state::{
    BulletView, EnemyView, GameStateSnapshot, MissileView, PickupView, PlayerView, PowerupView,
    ProgressView, SessionView, ShopView, ShotView,
};
use starfall_core::types::SimTime;

use starfall_ai::boss::boss_phase;
use starfall_progress::shop;

use crate::session::SessionState;
use crate::world::World;

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    session: &SessionState,
    progress: &PersistentProgress,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        session: SessionView {
            score: session.score,
            health: session.health,
            shields: session.shields,
            powerup: session.powerup,
            powerup_remaining_ms: session.powerup_remaining_ms(time.elapsed_ms),
        },
        progress: ProgressView {
            currency: progress.currency,
            weapon_tier: progress.weapon_tier,
            max_shields: progress.max_shields,
            auto_defense: progress.auto_defense,
        },
        shop: ShopView {
            next_threshold: session.next_shop_threshold,
            weapon_tier_cost: shop::weapon_tier_cost(progress.weapon_tier),
            shield_cost: shop::shield_cost(progress.max_shields),
            auto_defense_cost: AUTO_DEFENSE_COST,
            can_buy_weapon_tier: shop::can_buy(ShopItem::WeaponTier, progress),
            can_buy_shield: shop::can_buy(ShopItem::ShieldCapacity, progress),
            can_buy_auto_defense: shop::can_buy(ShopItem::AutoDefense, progress),
        },
        player: PlayerView {
            pos: world.player.pos,
            width: world.player.width,
            height: world.player.height,
        },
        bullets: world
            .bullets
            .iter()
            .map(|b| BulletView {
                pos: b.pos,
                vel: b.vel,
                width: b.width,
                height: b.height,
            })
            .collect(),
        missiles: world
            .missiles
            .iter()
            .map(|m| MissileView {
                pos: m.pos,
                vel: m.vel,
                target: m.target,
            })
            .collect(),
        enemy_bullets: world
            .enemy_bullets
            .iter()
            .map(|s| ShotView {
                pos: s.pos,
                vel: s.vel,
            })
            .collect(),
        defense_bullets: world
            .defense_bullets
            .iter()
            .map(|s| ShotView {
                pos: s.pos,
                vel: s.vel,
            })
            .collect(),
        enemies: world
            .enemies
            .iter()
            .map(|e| EnemyView {
                id: e.id,
                kind: e.kind(),
                pos: e.pos,
                width: e.width,
                height: e.height,
                health: e.health,
                max_health: e.max_health,
                laser_active: e.laser_active(),
                boss_phase: (e.kind() == EnemyKind::Devastator)
                    .then(|| boss_phase(e.health, e.max_health)),
            })
            .collect(),
        powerups: world
            .powerups
            .iter()
            .map(|p| PowerupView {
                pos: p.pos,
                kind: p.kind,
            })
            .collect(),
        currency_pickups: world
            .currency_pickups
            .iter()
            .map(|c| PickupView {
                pos: c.pos,
                amount: c.amount,
            })
            .collect(),
        audio_events,
    }
}
