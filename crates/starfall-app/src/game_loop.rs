//! Game loop thread — runs the simulation engine at a nominal 60 Hz.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; snapshots are stored
//! in shared state for synchronous polling. Each iteration passes the
//! real measured elapsed time to `tick`, so the simulation stays
//! correct when the host stalls or the scheduler is coarse.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use starfall_core::constants::FRAME_MS;
use starfall_core::state::GameStateSnapshot;
use starfall_progress::ProgressStore;
use starfall_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{GameHandle, GameLoopCommand};

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos((FRAME_MS * 1_000_000.0) as u64);

/// Longest single step fed to the engine (ms). A stall beyond this is
/// absorbed as slow-motion instead of one giant step.
const MAX_STEP_MS: f64 = 100.0;

/// Spawns the game loop in a new thread and returns its handle.
pub fn spawn_game_loop(store: Box<dyn ProgressStore>) -> GameHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot: Arc<Mutex<Option<_>>> = Arc::new(Mutex::new(None));

    let snapshot_slot = Arc::clone(&latest_snapshot);
    let thread = std::thread::Builder::new()
        .name("starfall-game-loop".into())
        .spawn(move || {
            run_game_loop(store, cmd_rx, &snapshot_slot);
        })
        .expect("Failed to spawn game loop thread");

    GameHandle {
        command_tx: cmd_tx,
        latest_snapshot,
        thread,
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    store: Box<dyn ProgressStore>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(SimConfig::default(), store);
    let mut next_tick_time = Instant::now();
    let mut last_tick = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Input(input)) => engine.set_input(input),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance by the real elapsed time, capped against stalls
        let now = Instant::now();
        let dt_ms = (now - last_tick).as_secs_f64() * 1000.0;
        last_tick = now;
        let snapshot = engine.tick(dt_ms.min(MAX_STEP_MS));

        for message in engine.take_persistence_errors() {
            log::error!("Progress save failed: {}", message);
        }

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next frame
        next_tick_time += FRAME_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > FRAME_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
