//! Progression and economy: permanent upgrades, shop transaction
//! validation, and the persistent-progress store.

pub mod shop;
pub mod store;

pub use shop::{purchase, PurchaseEffect};
pub use store::{JsonFileStore, MemoryStore, ProgressStore};
