//! Systems that operate on the simulation world each step.
//!
//! Each system is a free function over `&mut World` plus whatever session
//! state it reads or mutates. The engine calls them in a fixed order; no
//! system owns state of its own except the spawn director.

pub mod cleanup;
pub mod collision;
pub mod defense;
pub mod enemies;
pub mod player;
pub mod powerups;
pub mod projectiles;
pub mod snapshot;
pub mod spawner;
