//! Player preferences
//!
//! Persisted separately from the ranking in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::SETTINGS_KEY;
use crate::platform::storage::{self, KeyValueStore, StorageError};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Click sound volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence the click sound entirely
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults
    pub fn load(store: &impl KeyValueStore) -> Self {
        match storage::load_json(store, SETTINGS_KEY) {
            Some(settings) => {
                log::info!("Loaded settings from LocalStorage");
                settings
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StorageError> {
        storage::save_json(store, SETTINGS_KEY, self)?;
        log::info!("Settings saved");
        Ok(())
    }
}
