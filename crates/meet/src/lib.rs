//! Swimming meet engine: registration, heat and lane seeding, time keeping,
//! and medal and points scoring over an in-memory store.

pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

#[cfg(test)]
mod testing;

use std::path::Path;

use parking_lot::Mutex;
use tracing::{debug, warn};

pub use config::ScoringConfig;
pub use error::{MeetError, Result};
pub use repository::MeetStore;

/// Shared handle to the meet data.
///
/// All access goes through one lock, so operations never interleave. A
/// transaction works on a copy of the store and only replaces the committed
/// state when the closure succeeds.
#[derive(Debug, Default)]
pub struct Database {
    store: Mutex<MeetStore>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_store(store: MeetStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Loads a snapshot written by [`Database::save_snapshot`].
    pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let store: MeetStore = serde_json::from_str(&json)?;
        Ok(Self::from_store(store))
    }

    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(&*self.store.lock())?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn read<T>(&self, f: impl FnOnce(&MeetStore) -> T) -> T {
        f(&self.store.lock())
    }

    pub fn transaction<T>(&self, f: impl FnOnce(&mut MeetStore) -> Result<T>) -> Result<T> {
        let mut committed = self.store.lock();
        let mut working = committed.clone();

        match f(&mut working) {
            Ok(value) => {
                *committed = working;
                debug!("Transaction committed");
                Ok(value)
            }
            Err(e) => {
                warn!("Transaction rolled back: {}", e);
                Err(e)
            }
        }
    }
}
