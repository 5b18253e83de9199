//! Browser collaborators: LocalStorage and DOM HUD

use web_sys::{Document, Storage};

use super::{HudSink, HudText, KeyValueStore, Panel};

/// LocalStorage-backed store; silently degrades when storage is unavailable
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable - scores will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                log::debug!("LocalStorage write failed for {}", key);
            }
        }
    }
}

/// Writes HUD updates straight into the page
pub struct DomHud {
    document: Option<Document>,
}

impl DomHud {
    pub fn new() -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
        }
    }

    fn text_id(field: HudText) -> &'static str {
        match field {
            HudText::Score => "score",
            HudText::HighScore => "high-score",
            HudText::FinalScore => "finalScore",
            HudText::Version => "version",
        }
    }

    fn panel_id(panel: Panel) -> &'static str {
        match panel {
            Panel::StartButton => "startBtn",
            Panel::RestartButton => "restartBtn",
            Panel::GameOver => "gameOver",
            Panel::NewRecord => "newRecord",
            Panel::IdlePrompt => "idlePrompt",
        }
    }
}

impl Default for DomHud {
    fn default() -> Self {
        Self::new()
    }
}

impl HudSink for DomHud {
    fn set_text(&mut self, field: HudText, text: &str) {
        let Some(document) = &self.document else { return };
        if let Some(el) = document.get_element_by_id(Self::text_id(field)) {
            el.set_text_content(Some(text));
        }
    }

    fn set_visible(&mut self, panel: Panel, visible: bool) {
        let Some(document) = &self.document else { return };
        if let Some(el) = document.get_element_by_id(Self::panel_id(panel)) {
            let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
        }
    }
}
