//! Simulation engine for Starfall.
//!
//! Owns the world's entity collections, runs systems once per step,
//! and produces GameStateSnapshots for the host shell.

pub mod engine;
pub mod session;
pub mod systems;
pub mod world;

pub use starfall_core as core;
pub use engine::{SimConfig, SimulationEngine};

#[cfg(test)]
mod tests;
