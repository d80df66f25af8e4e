//! Core types and definitions for the STARFALL simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entities, commands, state snapshots, events, input, and constants.
//! It has no dependency on any runtime framework.

pub mod commands;
pub mod constants;
pub mod entities;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
