//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - Seeded RNG only
//! - Stable (append) order for obstacles and particles
//! - No rendering or platform dependencies

pub mod collision;
pub mod particles;
pub mod state;
pub mod tick;

pub use collision::{Rect, first_overlap};
pub use state::{Cloud, GameEvent, GameState, Obstacle, Particle, Player, RunPhase};
pub use tick::{Action, TickInput, apply_action, tick};
