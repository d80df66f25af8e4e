//! Starfall host shell.
//!
//! Runs the simulation engine on a dedicated thread and exposes a
//! polling handle for a frontend to send commands and read snapshots.

pub mod game_loop;
pub mod state;

pub use starfall_core as core;
pub use game_loop::spawn_game_loop;
