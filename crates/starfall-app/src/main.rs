use std::path::PathBuf;
use std::time::Duration;

use starfall_app::game_loop::spawn_game_loop;
use starfall_core::commands::PlayerCommand;
use starfall_core::enums::GamePhase;
use starfall_core::input::InputState;
use starfall_progress::JsonFileStore;

/// Headless demo session: start the loop, hold the trigger, and report
/// progress until the ship is destroyed or time runs out.
fn main() {
    env_logger::init();

    let save_path = PathBuf::from("starfall-progress.json");
    let handle = spawn_game_loop(Box::new(JsonFileStore::new(save_path)));
    log::info!("Game loop started");

    handle
        .send_player(PlayerCommand::StartGame)
        .expect("game loop unavailable");
    handle
        .set_input(InputState {
            fire: true,
            ..Default::default()
        })
        .expect("game loop unavailable");

    for _ in 0..60 {
        std::thread::sleep(Duration::from_millis(500));
        let Some(snap) = handle.snapshot() else {
            continue;
        };
        log::info!(
            "t={:5.1}s score={:5} health={} shields={} enemies={:2} currency={}",
            snap.time.elapsed_ms / 1000.0,
            snap.session.score,
            snap.session.health,
            snap.session.shields,
            snap.enemies.len(),
            snap.progress.currency,
        );
        if snap.phase == GamePhase::GameOver {
            log::info!("Game over with score {}", snap.session.score);
            break;
        }
    }

    handle.shutdown();
    log::info!("Game loop stopped");
}
