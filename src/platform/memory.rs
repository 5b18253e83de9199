//! In-process collaborators for tests and the native build

use std::collections::HashMap;

use super::{HudSink, HudText, KeyValueStore, MusicSink, Panel};

/// HashMap-backed store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }
}

/// Remembers the last value written to every HUD field
#[derive(Debug, Clone, Default)]
pub struct RecordingHud {
    pub texts: HashMap<HudText, String>,
    pub visible: HashMap<Panel, bool>,
}

impl RecordingHud {
    pub fn text(&self, field: HudText) -> Option<&str> {
        self.texts.get(&field).map(String::as_str)
    }

    /// Panels never touched count as hidden
    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible.get(&panel).copied().unwrap_or(false)
    }
}

impl HudSink for RecordingHud {
    fn set_text(&mut self, field: HudText, text: &str) {
        self.texts.insert(field, text.to_string());
    }

    fn set_visible(&mut self, panel: Panel, visible: bool) {
        self.visible.insert(panel, visible);
    }
}

/// Tracks play/pause commands instead of making noise
#[derive(Debug, Clone, Default)]
pub struct RecordingMusic {
    pub playing: bool,
    /// Times playback actually (re)started
    pub starts: u32,
    pub pauses: u32,
    pub volume: f32,
}

impl MusicSink for RecordingMusic {
    fn ensure_playing(&mut self) {
        if !self.playing {
            self.playing = true;
            self.starts += 1;
        }
    }

    fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            self.pauses += 1;
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }
}
