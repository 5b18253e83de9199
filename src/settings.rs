//! Game settings and preferences
//!
//! Persisted as JSON next to the high score.

use serde::{Deserialize, Serialize};

use crate::consts::SETTINGS_KEY;
use crate::platform::KeyValueStore;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Never start the music
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_volume: 0.5,
            muted: false,
        }
    }
}

impl Settings {
    /// Set music volume, clamped to 0.0 - 1.0
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Flip mute and return the new value
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Load settings, falling back to defaults on a missing or bad document
    pub fn load(store: &dyn KeyValueStore) -> Self {
        if let Some(json) = store.get_item(SETTINGS_KEY) {
            match serde_json::from_str::<Settings>(&json) {
                Ok(mut settings) => {
                    settings.set_music_volume(settings.music_volume);
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::info!("Ignoring malformed settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        match serde_json::to_string(self) {
            Ok(json) => {
                store.set_item(SETTINGS_KEY, &json);
                log::info!("Settings saved");
            }
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }
}
