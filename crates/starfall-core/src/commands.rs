//! Player commands sent from the host shell to the simulation.
//!
//! Commands are discrete, edge-triggered actions (one event per key
//! press or button click). They are queued and processed at the next
//! step boundary, never mid-step. Continuous controls (movement, held
//! fire) travel separately as [`crate::input::InputState`].

use serde::{Deserialize, Serialize};

use crate::enums::ShopItem;

/// All possible discrete player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new session from the idle menu. Resets all session-scoped
    /// state but never persistent progress.
    StartGame,
    /// Toggle Running ⇄ Paused.
    TogglePause,
    /// Close the shop, resume play, and advance the next shop threshold.
    CloseShop,
    /// Attempt a shop purchase. Invalid purchases are no-ops.
    Buy { item: ShopItem },
    /// Return to the idle menu from GameOver.
    ReturnToMenu,
}
