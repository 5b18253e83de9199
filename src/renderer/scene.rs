//! Scene tessellation
//!
//! Turns a `GameState` into one triangle list, painter's order:
//! background (clouds, ground) -> entities (player, obstacles) -> effects
//! (particles). Pure function of the state.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{Cloud, GameState, Particle, Player};

const BORDER_WIDTH: f32 = 2.0;
const GRASS_WIDTH: f32 = 3.0;
const CLOUD_SEGMENTS: u32 = 20;
const PARTICLE_SEGMENTS: u32 = 12;
/// Dust color: fixed saturation and lightness, per-particle hue
const DUST_SATURATION: f32 = 0.7;
const DUST_LIGHTNESS: f32 = 0.6;

/// Build the full frame
pub fn build_scene(state: &GameState) -> Vec<Vertex> {
    let mut vertices = background(state);
    if state.started {
        vertices.extend(entities(state));
        vertices.extend(effects(state));
    } else {
        vertices.extend(idle_banner());
    }
    vertices
}

/// Clouds and ground, drawn in every phase
pub fn background(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for cloud in &state.clouds {
        vertices.extend(cloud_shape(cloud));
    }
    vertices.extend(ground());
    vertices
}

/// Player then obstacles
pub fn entities(state: &GameState) -> Vec<Vertex> {
    let mut vertices = player_shape(&state.player);
    for obstacle in &state.obstacles {
        vertices.extend(shapes::spike(
            obstacle.pos,
            obstacle.size,
            colors::OBSTACLE_TOP,
            colors::OBSTACLE_BOTTOM,
        ));
        let points = shapes::spike_points(obstacle.pos, obstacle.size);
        vertices.extend(shapes::outline(&points, BORDER_WIDTH, colors::WHITE));
    }
    vertices
}

/// Fading dust particles
pub fn effects(state: &GameState) -> Vec<Vertex> {
    state.particles.iter().flat_map(particle_shape).collect()
}

fn player_shape(player: &Player) -> Vec<Vertex> {
    let center = player.rect().center();
    let mut vertices = shapes::rotated_square(
        center,
        player.size,
        player.rotation,
        colors::PLAYER_TOP,
        colors::PLAYER_BOTTOM,
    );
    let corners = shapes::rotated_square_corners(center, player.size, player.rotation);
    vertices.extend(shapes::outline(&corners, BORDER_WIDTH, colors::WHITE));
    vertices
}

pub fn particle_color(particle: &Particle) -> [f32; 4] {
    colors::hsla(particle.hue, DUST_SATURATION, DUST_LIGHTNESS, particle.alpha())
}

fn particle_shape(particle: &Particle) -> Vec<Vertex> {
    shapes::circle(
        particle.pos,
        particle.size,
        particle_color(particle),
        PARTICLE_SEGMENTS,
    )
}

/// Three overlapping puffs. Pre-blended over the sky so overlaps stay flat.
fn cloud_shape(cloud: &Cloud) -> Vec<Vertex> {
    let color = colors::mix(colors::SKY, colors::WHITE, 0.8);
    let w = cloud.width;
    [(0.0, 0.3), (0.3, 0.35), (0.6, 0.3)]
        .iter()
        .flat_map(|&(dx, r)| {
            shapes::circle(
                Vec2::new(cloud.pos.x + w * dx, cloud.pos.y),
                w * r,
                color,
                CLOUD_SEGMENTS,
            )
        })
        .collect()
}

fn ground() -> Vec<Vertex> {
    let mut vertices = shapes::rect_vertical_gradient(
        Vec2::new(0.0, GROUND_Y),
        Vec2::new(FIELD_WIDTH, GROUND_HEIGHT),
        colors::GROUND_TOP,
        colors::GROUND_BOTTOM,
    );
    vertices.extend(shapes::line(
        Vec2::new(0.0, GROUND_Y),
        Vec2::new(FIELD_WIDTH, GROUND_Y),
        GRASS_WIDTH,
        colors::GRASS,
    ));
    vertices
}

/// Backdrop for the start prompt; the text itself is a DOM overlay
fn idle_banner() -> Vec<Vertex> {
    let size = Vec2::new(360.0, 56.0);
    let min = Vec2::new(FIELD_WIDTH, FIELD_HEIGHT) / 2.0 - size / 2.0;
    shapes::rect_vertical_gradient(min, size, colors::PROMPT_BANNER, colors::PROMPT_BANNER)
}
