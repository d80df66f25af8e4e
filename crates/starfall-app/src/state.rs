//! Shared state between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use starfall_core::commands::PlayerCommand;
use starfall_core::input::InputState;
use starfall_core::state::GameStateSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A discrete player command to forward to the engine.
    Player(PlayerCommand),
    /// Replacement level-triggered input state.
    Input(InputState),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running game loop thread.
///
/// Snapshots are published by the loop after every tick; `snapshot`
/// returns the most recent one without blocking the simulation.
pub struct GameHandle {
    pub(crate) command_tx: mpsc::Sender<GameLoopCommand>,
    pub(crate) latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub(crate) thread: JoinHandle<()>,
}

impl GameHandle {
    /// Forward a player command to the engine.
    pub fn send_player(&self, command: PlayerCommand) -> Result<(), String> {
        self.command_tx
            .send(GameLoopCommand::Player(command))
            .map_err(|_| "Game loop thread is gone".to_string())
    }

    /// Replace the held-key input state.
    pub fn set_input(&self, input: InputState) -> Result<(), String> {
        self.command_tx
            .send(GameLoopCommand::Input(input))
            .map_err(|_| "Game loop thread is gone".to_string())
    }

    /// Latest published snapshot, if any tick has completed yet.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }

    /// Stop the loop and wait for the thread to finish.
    pub fn shutdown(self) {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        let _ = self.thread.join();
    }
}
