//! Frame driver
//!
//! Owns the simulation state and the collaborators, applies recorded input
//! once per frame and turns simulation events into HUD, storage and music
//! updates. Rendering reads `state` separately and never writes to it.

use crate::highscores::HighScore;
use crate::platform::{HudSink, HudText, KeyValueStore, MusicSink, Panel};
use crate::settings::Settings;
use crate::sim::{Action, GameEvent, GameState, TickInput, tick};
use crate::version;

/// Game instance holding all state
pub struct Game<S, H, M> {
    pub state: GameState,
    input: TickInput,
    high_score: HighScore,
    /// Set when the last finished run beat the previous best
    new_record: bool,
    settings: Settings,
    store: S,
    hud: H,
    music: M,
}

impl<S, H, M> Game<S, H, M>
where
    S: KeyValueStore,
    H: HudSink,
    M: MusicSink,
{
    pub fn new(seed: u64, store: S, hud: H, mut music: M) -> Self {
        let high_score = HighScore::load(&store);
        let settings = Settings::load(&store);
        music.set_volume(settings.music_volume);

        let mut game = Self {
            state: GameState::new(seed),
            input: TickInput::default(),
            high_score,
            new_record: false,
            settings,
            store,
            hud,
            music,
        };
        game.show_idle_hud();
        game
    }

    fn show_idle_hud(&mut self) {
        self.hud.set_text(HudText::Score, "0");
        self.hud
            .set_text(HudText::HighScore, &self.high_score.best.to_string());
        self.hud.set_visible(Panel::StartButton, true);
        self.hud.set_visible(Panel::IdlePrompt, true);
        self.hud.set_visible(Panel::RestartButton, false);
        self.hud.set_visible(Panel::GameOver, false);
        self.hud.set_visible(Panel::NewRecord, false);
    }

    /// Record a user action for the next frame. Every action is a user
    /// gesture, so it is also the moment music is allowed to start.
    pub fn trigger(&mut self, action: Action) {
        if !self.settings.muted {
            self.music.ensure_playing();
        }
        self.input.record(action);
    }

    /// Toggle mute, persist it and return the new state
    pub fn toggle_mute(&mut self) -> bool {
        let muted = self.settings.toggle_mute();
        if muted {
            self.music.pause();
        }
        self.settings.save(&mut self.store);
        log::info!("Music {}", if muted { "muted" } else { "unmuted" });
        muted
    }

    pub fn set_version(&mut self, version: &str) {
        self.hud.set_text(HudText::Version, &version::label(version));
    }

    /// One simulation step plus the HUD side effects it caused
    pub fn frame(&mut self) {
        let input = std::mem::take(&mut self.input);
        tick(&mut self.state, &input);

        for event in self.state.drain_events() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::RunStarted => {
                self.new_record = false;
                self.hud.set_text(HudText::Score, "0");
                self.hud.set_visible(Panel::StartButton, false);
                self.hud.set_visible(Panel::IdlePrompt, false);
                self.hud.set_visible(Panel::GameOver, false);
                self.hud.set_visible(Panel::RestartButton, false);
                self.hud.set_visible(Panel::NewRecord, false);
            }
            GameEvent::ScoreChanged(score) => {
                self.hud.set_text(HudText::Score, &score.to_string());
            }
            GameEvent::Jumped => {}
            GameEvent::RunEnded { score } => {
                self.music.pause();
                self.new_record = self.high_score.record(score, &mut self.store);

                self.hud.set_visible(Panel::NewRecord, self.new_record);
                self.hud.set_text(HudText::FinalScore, &score.to_string());
                self.hud.set_visible(Panel::GameOver, true);
                self.hud.set_visible(Panel::RestartButton, true);
                self.hud
                    .set_text(HudText::HighScore, &self.high_score.best.to_string());
            }
        }
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best
    }

    pub fn is_new_record(&self) -> bool {
        self.new_record
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }

    pub fn music(&self) -> &M {
        &self.music
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
