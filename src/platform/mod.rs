//! Platform abstraction layer
//!
//! The game talks to the outside world through three small collaborators:
//! - Key/value storage (LocalStorage on web)
//! - HUD text and panel visibility (DOM on web)
//! - Background music playback
//!
//! `memory` holds in-process implementations used by tests and the native
//! headless build; `web` holds the browser ones.

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use memory::{MemoryStore, RecordingHud, RecordingMusic};

/// Persistent string store with get/set-by-key semantics
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
}

/// HUD text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HudText {
    Score,
    HighScore,
    FinalScore,
    Version,
}

/// HUD elements that are shown or hidden as the run state changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    StartButton,
    RestartButton,
    GameOver,
    NewRecord,
    IdlePrompt,
}

/// Fire-and-forget display updates
pub trait HudSink {
    fn set_text(&mut self, field: HudText, text: &str);
    fn set_visible(&mut self, panel: Panel, visible: bool);
}

/// Background music control
pub trait MusicSink {
    /// Start the looping track if it is not already playing
    fn ensure_playing(&mut self);
    fn pause(&mut self);
    fn set_volume(&mut self, volume: f32);
}
