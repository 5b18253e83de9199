//! Game state and core simulation types
//!
//! Per-run state is rebuilt by `reset_run`; clouds and the RNG live for the
//! whole session.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Nothing started yet, idle prompt showing
    Idle,
    /// Active run
    Running,
    /// Run ended by a collision, waiting for restart
    Ended,
}

/// Things that happened during a tick, drained by the frame driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A run was (re)started and all per-run state reset
    RunStarted,
    /// Player left the ground
    Jumped,
    /// Score changed (obstacle cleared)
    ScoreChanged(u64),
    /// Player hit an obstacle
    RunEnded { score: u64 },
}

/// The player's square
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner; x never changes
    pub pos: Vec2,
    pub vel_y: f32,
    pub size: f32,
    /// Set by a jump, cleared on ground contact
    pub airborne: bool,
    /// Visual tilt in radians (cosmetic only)
    pub rotation: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, PLAYER_START_Y),
            vel_y: 0.0,
            size: PLAYER_SIZE,
            airborne: false,
            rotation: 0.0,
        }
    }
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    /// Bottom edge y coordinate
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    /// Point particles are emitted from (centre of the bottom edge)
    pub fn base(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size / 2.0, self.bottom())
    }

    /// Gravity step, ground clamp and derived rotation
    pub fn integrate(&mut self, gravity: f32, ground_y: f32) {
        self.vel_y += gravity;
        self.pos.y += self.vel_y;

        if self.bottom() >= ground_y {
            self.pos.y = ground_y - self.size;
            self.vel_y = 0.0;
            self.airborne = false;
        }

        self.rotation = if self.airborne {
            self.vel_y * ROTATION_PER_VELOCITY
        } else {
            0.0
        };
    }

    /// Start a jump. Returns false (and changes nothing) when already airborne.
    pub fn jump(&mut self, power: f32) -> bool {
        if self.airborne {
            return false;
        }
        self.vel_y = power;
        self.airborne = true;
        true
    }
}

/// A spike scrolling toward the player
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: f32,
}

impl Obstacle {
    /// New obstacle resting on the ground at the field's right edge
    pub fn at_right_edge() -> Self {
        Self {
            pos: Vec2::new(FIELD_WIDTH, GROUND_Y - OBSTACLE_SIZE),
            size: OBSTACLE_SIZE,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    /// Right edge has passed the left edge of the field
    pub fn is_off_field(&self) -> bool {
        self.pos.x + self.size < 0.0
    }
}

/// A jump-dust particle
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Ticks remaining
    pub life: u32,
    pub max_life: u32,
    /// Hue in degrees (saturation/lightness are fixed)
    pub hue: f32,
}

impl Particle {
    /// Fade factor: 1.0 when fresh, approaching 0.0 at death
    pub fn alpha(&self) -> f32 {
        if self.max_life == 0 {
            return 0.0;
        }
        self.life as f32 / self.max_life as f32
    }
}

/// Decorative background cloud
#[derive(Debug, Clone)]
pub struct Cloud {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Cloud {
    pub fn random(rng: &mut Pcg32) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..FIELD_WIDTH),
                Self::random_altitude(rng),
            ),
            width: rng.random_range(40.0..100.0),
            height: rng.random_range(20.0..50.0),
            speed: rng.random_range(0.2..0.7),
        }
    }

    pub fn random_altitude(rng: &mut Pcg32) -> f32 {
        rng.random_range(50.0..200.0)
    }

    /// Drift left; wrap back to the right edge once fully off-screen
    pub fn drift(&mut self, rng: &mut Pcg32) {
        self.pos.x -= self.speed;
        if self.pos.x + self.width < 0.0 {
            self.pos.x = FIELD_WIDTH;
            self.pos.y = Self::random_altitude(rng);
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: RunPhase,
    /// A run has been started at least once this session
    pub started: bool,
    pub score: u64,
    /// Current scroll speed (units per tick, accumulated in f64)
    pub speed: f64,
    /// Ticks since the last spawn
    pub spawn_timer: u32,
    /// Ticks between spawns (shrinks toward the floor)
    pub spawn_interval: f64,
    /// Running ticks in the current run
    pub run_ticks: u64,
    pub player: Player,
    /// Append-ordered
    pub obstacles: Vec<Obstacle>,
    pub particles: Vec<Particle>,
    pub clouds: Vec<Cloud>,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create an idle session with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let clouds = (0..CLOUD_COUNT).map(|_| Cloud::random(&mut rng)).collect();

        Self {
            seed,
            rng,
            phase: RunPhase::Idle,
            started: false,
            score: 0,
            speed: BASE_SPEED,
            spawn_timer: 0,
            spawn_interval: SPAWN_INTERVAL_START,
            run_ticks: 0,
            player: Player::default(),
            obstacles: Vec::new(),
            particles: Vec::new(),
            clouds,
            events: Vec::new(),
        }
    }

    /// Reinitialize all per-run state and enter `Running`
    pub fn reset_run(&mut self) {
        self.phase = RunPhase::Running;
        self.started = true;
        self.score = 0;
        self.speed = BASE_SPEED;
        self.spawn_timer = 0;
        self.spawn_interval = SPAWN_INTERVAL_START;
        self.run_ticks = 0;
        self.player = Player::default();
        self.obstacles.clear();
        self.particles.clear();
        self.events.push(GameEvent::RunStarted);
    }

    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
