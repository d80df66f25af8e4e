//! Level-triggered input state.
//!
//! The host's event system updates this mapping asynchronously; the
//! simulation reads it once per step at a defined point, so no key
//! change is ever observed mid-step.

use serde::{Deserialize, Serialize};

/// Current pressed/released state of the logical keys.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    /// Primary trigger. Held for continuous fire.
    pub fire: bool,
    /// Secondary trigger: fires missiles while the missile powerup is
    /// active; otherwise a no-op.
    pub fire_alt: bool,
}
