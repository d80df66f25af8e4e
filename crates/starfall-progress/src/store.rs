//! Persistence for the progress record.
//!
//! The engine talks to a `ProgressStore` trait object so tests can swap
//! in an in-memory store and inspect what was written.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use starfall_core::entities::PersistentProgress;

/// Backing store for the persistent progress record.
///
/// `load` is infallible by contract: a missing or corrupt record yields
/// the default starting progress rather than an error.
pub trait ProgressStore: Send {
    fn load(&self) -> PersistentProgress;
    fn save(&self, progress: &PersistentProgress) -> Result<(), String>;
}

/// Progress record stored as pretty-printed JSON at a fixed path.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&self) -> PersistentProgress {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    fn save(&self, progress: &PersistentProgress) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create save directory: {}", e))?;
        }
        let json = serde_json::to_string_pretty(progress)
            .map_err(|e| format!("Failed to serialize progress: {}", e))?;
        fs::write(&self.path, json).map_err(|e| format!("Failed to write progress file: {}", e))
    }
}

/// In-memory store for tests. Clones share the same record, so a test
/// can hand one clone to the engine and keep another to observe saves.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<PersistentProgress>>,
}

impl MemoryStore {
    pub fn with_progress(progress: PersistentProgress) -> Self {
        Self {
            inner: Arc::new(Mutex::new(progress)),
        }
    }

    pub fn snapshot(&self) -> PersistentProgress {
        self.inner.lock().unwrap().clone()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> PersistentProgress {
        self.inner.lock().unwrap().clone()
    }

    fn save(&self, progress: &PersistentProgress) -> Result<(), String> {
        *self.inner.lock().unwrap() = progress.clone();
        Ok(())
    }
}
