//! Shape generation for 2D primitives
//!
//! All shapes are triangle lists in field coordinates (y grows downward).
//! Gradients come for free from per-vertex colors.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};

/// Two triangles covering the quad `a b c d` (corners in winding order)
fn quad(corners: [(Vec2, [f32; 4]); 4]) -> Vec<Vertex> {
    let [a, b, c, d] = corners.map(|(p, color)| Vertex::new(p.x, p.y, color));
    vec![a, b, d, b, c, d]
}

/// Axis-aligned rectangle with a vertical gradient
pub fn rect_vertical_gradient(min: Vec2, size: Vec2, top: [f32; 4], bottom: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    quad([
        (min, top),
        (Vec2::new(max.x, min.y), top),
        (max, bottom),
        (Vec2::new(min.x, max.y), bottom),
    ])
}

/// Square rotated about its centre, with a diagonal gradient from the
/// top-left corner (`from`) to the bottom-right corner (`to`)
pub fn rotated_square(center: Vec2, size: f32, rotation: f32, from: [f32; 4], to: [f32; 4]) -> Vec<Vertex> {
    let half = size / 2.0;
    let rot = Vec2::from_angle(rotation);
    let mid = colors::mix(from, to, 0.5);
    let corner = |x: f32, y: f32| center + rot.rotate(Vec2::new(x, y));
    quad([
        (corner(-half, -half), from),
        (corner(half, -half), mid),
        (corner(half, half), to),
        (corner(-half, half), mid),
    ])
}

/// Corners of a square rotated about its centre (for outlining)
pub fn rotated_square_corners(center: Vec2, size: f32, rotation: f32) -> [Vec2; 4] {
    let half = size / 2.0;
    let rot = Vec2::from_angle(rotation);
    [(-half, -half), (half, -half), (half, half), (-half, half)]
        .map(|(x, y)| center + rot.rotate(Vec2::new(x, y)))
}

/// Filled triangle with a color per corner
pub fn triangle(points: [Vec2; 3], colors: [[f32; 4]; 3]) -> Vec<Vertex> {
    points
        .iter()
        .zip(colors.iter())
        .map(|(p, c)| Vertex::new(p.x, p.y, *c))
        .collect()
}

/// Upward spike filling the box `min..min + size`, vertical gradient
pub fn spike(min: Vec2, size: f32, top: [f32; 4], bottom: [f32; 4]) -> Vec<Vertex> {
    let [apex, left, right] = spike_points(min, size);
    triangle([apex, left, right], [top, bottom, bottom])
}

/// Apex, bottom-left and bottom-right of a spike
pub fn spike_points(min: Vec2, size: f32) -> [Vec2; 3] {
    [
        Vec2::new(min.x + size / 2.0, min.y),
        Vec2::new(min.x, min.y + size),
        Vec2::new(min.x + size, min.y + size),
    ]
}

/// Thick line segment
pub fn line(a: Vec2, b: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (b - a).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = dir.perp() * (width / 2.0);
    quad([(a + perp, color), (b + perp, color), (b - perp, color), (a - perp, color)])
}

/// Closed outline through `points`; segments are extended by half the width
/// so corners are filled
pub fn outline(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(points.len() * 6);
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        let dir = (b - a).normalize_or_zero() * (width / 2.0);
        vertices.extend(line(a - dir, b + dir, width, color));
    }
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

    #[test]
    fn test_rect_gradient() {
        let v = rect_vertical_gradient(Vec2::new(0.0, 350.0), Vec2::new(800.0, 50.0), RED, BLUE);
        assert_eq!(v.len(), 6);
        for vertex in &v {
            let expected = if vertex.position[1] == 350.0 { RED } else { BLUE };
            assert_eq!(vertex.color, expected);
        }
    }

    #[test]
    fn test_unrotated_square_corners() {
        let corners = rotated_square_corners(Vec2::new(115.0, 335.0), 30.0, 0.0);
        assert!((corners[0] - Vec2::new(100.0, 320.0)).length() < 1e-4);
        assert!((corners[2] - Vec2::new(130.0, 350.0)).length() < 1e-4);
    }

    #[test]
    fn test_rotation_keeps_centre_and_size() {
        let center = Vec2::new(50.0, 50.0);
        let corners = rotated_square_corners(center, 20.0, 0.7);
        for c in corners {
            assert!(((c - center).length() - 200.0_f32.sqrt()).abs() < 1e-3);
        }
        let v = rotated_square(center, 20.0, 0.7, RED, BLUE);
        assert_eq!(v.len(), 6);
    }

    #[test]
    fn test_spike_shape() {
        let [apex, left, right] = spike_points(Vec2::new(400.0, 320.0), 30.0);
        assert_eq!(apex, Vec2::new(415.0, 320.0));
        assert_eq!(left, Vec2::new(400.0, 350.0));
        assert_eq!(right, Vec2::new(430.0, 350.0));
        let v = spike(Vec2::new(400.0, 320.0), 30.0, RED, BLUE);
        assert_eq!(v[0].color, RED);
        assert_eq!(v[1].color, BLUE);
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        assert!(line(Vec2::ONE, Vec2::ONE, 2.0, RED).is_empty());
        assert_eq!(line(Vec2::ZERO, Vec2::X, 2.0, RED).len(), 6);
    }

    #[test]
    fn test_outline_segments() {
        let square = [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y];
        assert_eq!(outline(&square, 0.1, RED).len(), 24);
    }

    #[test]
    fn test_circle_vertex_count() {
        assert_eq!(circle(Vec2::ZERO, 3.0, RED, 12).len(), 36);
    }
}
