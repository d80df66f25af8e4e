//! Enemy behavior rules.
//!
//! Pure per-variant transition rules applied once per step: each rule
//! mutates one enemy's position/internal state and may push shot specs
//! for the engine to materialize as enemy bullets. No dependency on the
//! engine or its collections — operates on plain data.

pub mod behavior;
pub mod boss;
pub mod profiles;

pub use behavior::{update_enemy, BehaviorContext, EnemyShot};
