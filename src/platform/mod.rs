//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory elsewhere)
//! - Wall-clock labels for leaderboard entries

pub mod storage;
pub mod time;

pub use storage::{KeyValueStore, MemoryStorage, StorageError};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
