//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the world, processes player commands, runs all
//! systems, and produces `GameStateSnapshot`s. Completely headless, so a
//! test can drive whole sessions deterministically.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starfall_core::commands::PlayerCommand;
use starfall_core::constants::{FRAME_MS, SHOP_THRESHOLD_INCREMENT};
use starfall_core::entities::PersistentProgress;
use starfall_core::enums::GamePhase;
use starfall_core::events::AudioEvent;
use starfall_core::input::InputState;
use starfall_core::state::GameStateSnapshot;
use starfall_core::types::SimTime;

use starfall_progress::{purchase, ProgressStore};

use crate::session::SessionState;
use crate::systems;
use crate::systems::spawner::SpawnDirector;
use crate::world::World;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    session: SessionState,
    progress: PersistentProgress,
    store: Box<dyn ProgressStore>,
    rng: ChaCha8Rng,
    input: InputState,
    command_queue: VecDeque<PlayerCommand>,
    audio_events: Vec<AudioEvent>,
    spawner: SpawnDirector,
    /// Failed save messages, drained by the host for logging. The sim
    /// itself never aborts on a persistence failure.
    persistence_errors: Vec<String>,
}

impl SimulationEngine {
    /// Create a new engine, loading persistent progress from the store.
    pub fn new(config: SimConfig, store: Box<dyn ProgressStore>) -> Self {
        let progress = store.load();
        let session = SessionState::new(&progress);
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            session,
            progress,
            store,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            input: InputState::default(),
            command_queue: VecDeque::new(),
            audio_events: Vec::new(),
            spawner: SpawnDirector::new(),
            persistence_errors: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next step boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Replace the level-triggered input state. Read once per step.
    pub fn set_input(&mut self, input: InputState) {
        self.input = input;
    }

    /// Advance the simulation by `dt_ms` milliseconds and return the
    /// resulting snapshot. Paused, shop, and menu phases gate all systems.
    pub fn tick(&mut self, dt_ms: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_systems(dt_ms);
            self.time.advance(dt_ms);
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.session,
            &self.progress,
            audio_events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Drain accumulated persistence failure messages.
    pub fn take_persistence_errors(&mut self) -> Vec<String> {
        std::mem::take(&mut self.persistence_errors)
    }

    /// Get a read-only reference to the world.
    #[cfg(test)]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the world (for test setups).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get a read-only reference to the session state.
    #[cfg(test)]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Get a mutable reference to the session state (for test setups).
    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    /// Get a read-only reference to the persistent progress.
    #[cfg(test)]
    pub fn progress(&self) -> &PersistentProgress {
        &self.progress
    }

    fn persist_progress(&mut self) {
        if let Err(message) = self.store.save(&self.progress) {
            self.persistence_errors.push(message);
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                // GameOver must go through ReturnToMenu first.
                if self.phase == GamePhase::Idle {
                    self.start_session();
                }
            }
            PlayerCommand::TogglePause => match self.phase {
                GamePhase::Running => self.phase = GamePhase::Paused,
                GamePhase::Paused => self.phase = GamePhase::Running,
                _ => {}
            },
            PlayerCommand::CloseShop => {
                if self.phase == GamePhase::ShopOpen {
                    self.phase = GamePhase::Running;
                    self.session.next_shop_threshold += SHOP_THRESHOLD_INCREMENT;
                }
            }
            PlayerCommand::Buy { item } => {
                if self.phase == GamePhase::ShopOpen {
                    // Invalid purchases are no-ops; the shop view already
                    // carries affordability flags.
                    if let Ok(effect) = purchase(item, &mut self.progress) {
                        self.session.grant_shields(effect.shield_refill);
                        self.persist_progress();
                    }
                }
            }
            PlayerCommand::ReturnToMenu => {
                if self.phase == GamePhase::GameOver {
                    self.phase = GamePhase::Idle;
                }
            }
        }
    }

    /// Reset all session-scoped state. Persistent progress survives.
    fn start_session(&mut self) {
        self.world = World::new();
        self.session = SessionState::new(&self.progress);
        self.spawner = SpawnDirector::new();
        self.time = SimTime::default();
        self.audio_events.clear();
        self.phase = GamePhase::Running;
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt_ms: f64) {
        let dt = dt_ms / FRAME_MS;
        let now_ms = self.time.elapsed_ms;

        // 1. Player movement and fire gating
        systems::player::run(
            &mut self.world,
            &self.session,
            &self.progress,
            &self.input,
            now_ms,
            dt,
            &mut self.audio_events,
        );
        // 2. Projectile integration (missiles re-home here)
        systems::projectiles::run(&mut self.world, dt);
        // 3. Enemy behavior rules
        systems::enemies::run(&mut self.world, now_ms, dt, &mut self.audio_events);
        // 4. Spawn director
        self.spawner.run(&mut self.world, &mut self.rng, now_ms);
        // 5. Point defense
        systems::defense::run(&mut self.world, &self.progress, now_ms);
        // 6. Falling pickups
        systems::powerups::run(&mut self.world, dt);
        // 7. Collision and damage
        let outcome = systems::collision::run(
            &mut self.world,
            &mut self.session,
            &mut self.progress,
            &mut self.rng,
            now_ms,
            &mut self.audio_events,
        );
        if outcome.progress_dirty {
            self.persist_progress();
        }
        // 8. Session upkeep: death, powerup expiry, shop trigger
        if outcome.player_died {
            self.phase = GamePhase::GameOver;
        } else {
            self.session.expire_powerup(now_ms);
            if self.session.score >= self.session.next_shop_threshold {
                self.phase = GamePhase::ShopOpen;
            }
        }
        // 9. Cleanup (dead enemies, off-field entities)
        systems::cleanup::run(&mut self.world);
    }
}
