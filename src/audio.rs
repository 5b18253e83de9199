//! Background music using an HTML audio element
//!
//! The element is created lazily on the first user gesture: browsers refuse
//! to start playback before one.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::HtmlAudioElement;

use crate::consts::MUSIC_TRACK;
use crate::platform::MusicSink;

/// Looping background track
pub struct BackgroundMusic {
    track: Option<HtmlAudioElement>,
    volume: f32,
    /// Set after the first playback failure so the console is not spammed
    warned: Rc<Cell<bool>>,
}

impl BackgroundMusic {
    pub fn new(volume: f32) -> Self {
        Self {
            track: None,
            volume: volume.clamp(0.0, 1.0),
            warned: Rc::new(Cell::new(false)),
        }
    }

    fn warn_once(warned: &Cell<bool>, err: &JsValue) {
        if !warned.replace(true) {
            log::warn!("Music play error: {:?}", err);
        }
    }

    fn track(&mut self) -> Option<&HtmlAudioElement> {
        if self.track.is_none() {
            match HtmlAudioElement::new_with_src(MUSIC_TRACK) {
                Ok(track) => {
                    track.set_loop(true);
                    track.set_volume(self.volume as f64);
                    self.track = Some(track);
                }
                Err(e) => {
                    Self::warn_once(&self.warned, &e);
                    return None;
                }
            }
        }
        self.track.as_ref()
    }
}

impl MusicSink for BackgroundMusic {
    fn ensure_playing(&mut self) {
        let warned = self.warned.clone();
        let Some(track) = self.track() else { return };
        if !track.paused() {
            return;
        }

        track.set_current_time(0.0);
        match track.play() {
            Ok(promise) => {
                // Autoplay policy rejections arrive asynchronously
                let on_reject = Closure::once(move |err: JsValue| {
                    Self::warn_once(&warned, &err);
                });
                let _ = promise.catch(&on_reject);
                on_reject.forget();
            }
            Err(e) => Self::warn_once(&warned, &e),
        }
    }

    fn pause(&mut self) {
        if let Some(track) = &self.track {
            if !track.paused() {
                let _ = track.pause();
            }
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(track) = &self.track {
            track.set_volume(self.volume as f64);
        }
    }
}
