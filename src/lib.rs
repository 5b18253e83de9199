//! Geometry Jump - An endless-runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, run state)
//! - `renderer`: Scene tessellation and the WebGPU pipeline
//! - `platform`: Storage/HUD/music collaborators (web and in-memory)
//! - `game`: Frame driver tying the simulation to its collaborators

pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod version;

#[cfg(target_arch = "wasm32")]
pub mod audio;

pub use game::Game;
pub use highscores::HighScore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (y grows downward)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Ground line and the band drawn below it
    pub const GROUND_Y: f32 = 350.0;
    pub const GROUND_HEIGHT: f32 = 50.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 300.0;
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const JUMP_POWER: f32 = -12.0;
    pub const GRAVITY: f32 = 0.6;
    /// Radians of tilt per unit of vertical velocity while airborne
    pub const ROTATION_PER_VELOCITY: f32 = 0.1;

    /// Obstacle defaults
    pub const OBSTACLE_SIZE: f32 = 30.0;
    pub const OBSTACLE_SCORE: u64 = 10;

    /// Difficulty ramp
    pub const BASE_SPEED: f64 = 2.0;
    pub const SPEED_INCREMENT: f64 = 0.002;
    pub const SPAWN_INTERVAL_START: f64 = 150.0;
    pub const SPAWN_INTERVAL_STEP: f64 = 0.5;
    pub const SPAWN_INTERVAL_FLOOR: f64 = 80.0;

    /// Jump burst
    pub const BURST_COUNT: usize = 5;
    pub const PARTICLE_LIFE: u32 = 30;
    pub const PARTICLE_GRAVITY: f32 = 0.1;

    /// Background clouds
    pub const CLOUD_COUNT: usize = 5;

    /// LocalStorage keys
    pub const HIGH_SCORE_KEY: &str = "geometryJumpHighScore";
    pub const SETTINGS_KEY: &str = "geometryJumpSettings";

    /// Assets
    pub const MUSIC_TRACK: &str = "background-music.mp3";
    pub const VERSION_URL: &str = "/version.json";
    pub const DEFAULT_VERSION: &str = "1.0.0";
}
