//! Shop purchases against the persistent progress record.
//!
//! Every purchase is validated before any mutation: insufficient funds or
//! a repeat purchase of a one-time upgrade returns `Err` and leaves the
//! record untouched. A successful purchase debits currency and applies the
//! upgrade; the caller persists the record immediately afterward.

use starfall_core::constants::*;
use starfall_core::entities::PersistentProgress;
use starfall_core::enums::ShopItem;

/// Cost of the next weapon tier at the given current tier.
pub fn weapon_tier_cost(current_tier: u32) -> u32 {
    WEAPON_TIER_COST_SCALE * current_tier
}

/// Cost of the next shield capacity step at the given current capacity.
pub fn shield_cost(current_capacity: i32) -> u32 {
    SHIELD_COST_BASE + SHIELD_COST_SCALE * current_capacity.max(0) as u32
}

/// Current cost of an item, or None if it can never be bought again.
pub fn item_cost(item: ShopItem, progress: &PersistentProgress) -> Option<u32> {
    match item {
        ShopItem::WeaponTier => Some(weapon_tier_cost(progress.weapon_tier)),
        ShopItem::ShieldCapacity => Some(shield_cost(progress.max_shields)),
        ShopItem::AutoDefense => (!progress.auto_defense).then_some(AUTO_DEFENSE_COST),
    }
}

/// Whether a purchase of `item` would currently succeed.
pub fn can_buy(item: ShopItem, progress: &PersistentProgress) -> bool {
    item_cost(item, progress).is_some_and(|cost| progress.currency >= cost)
}

/// Result of a successful purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseEffect {
    pub cost: u32,
    /// Shield points to add to the live session (equal to the capacity
    /// gained; zero for non-shield purchases).
    pub shield_refill: i32,
}

/// Attempt a purchase. Returns the effect, or an error with the record
/// unchanged.
pub fn purchase(
    item: ShopItem,
    progress: &mut PersistentProgress,
) -> Result<PurchaseEffect, String> {
    let cost = item_cost(item, progress).ok_or_else(|| "Already owned".to_string())?;
    if progress.currency < cost {
        return Err(format!(
            "Insufficient currency: have {}, need {}",
            progress.currency, cost
        ));
    }

    progress.currency -= cost;
    let shield_refill = match item {
        ShopItem::WeaponTier => {
            progress.weapon_tier += 1;
            0
        }
        ShopItem::ShieldCapacity => {
            progress.max_shields += SHIELD_CAPACITY_STEP;
            SHIELD_CAPACITY_STEP
        }
        ShopItem::AutoDefense => {
            progress.auto_defense = true;
            0
        }
    };

    Ok(PurchaseEffect {
        cost,
        shield_refill,
    })
}
