//! Jump-dust particles
//!
//! Purely visual, but ticked inside the simulation so lifetimes are exact
//! tick counts.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Particle;
use crate::consts::{BURST_COUNT, PARTICLE_GRAVITY, PARTICLE_LIFE};

/// Warm hue range in degrees (orange through yellow-green)
const HUE_MIN: f32 = 30.0;
const HUE_MAX: f32 = 90.0;

/// Spawn a burst of dust particles at `origin`
pub fn spawn_burst(particles: &mut Vec<Particle>, origin: Vec2, rng: &mut Pcg32) {
    particles.reserve(BURST_COUNT);
    for _ in 0..BURST_COUNT {
        particles.push(Particle {
            pos: origin,
            vel: Vec2::new(rng.random_range(-2.0..2.0), rng.random_range(1.0..3.0)),
            size: rng.random_range(2.0..5.0),
            life: PARTICLE_LIFE,
            max_life: PARTICLE_LIFE,
            hue: rng.random_range(HUE_MIN..HUE_MAX),
        });
    }
}

/// Advance every particle one tick and drop the expired ones
pub fn update(particles: &mut Vec<Particle>) {
    for p in particles.iter_mut() {
        p.pos += p.vel;
        p.vel.y += PARTICLE_GRAVITY;
        p.life = p.life.saturating_sub(1);
    }
    particles.retain(|p| p.life > 0);
}
