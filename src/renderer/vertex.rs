//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements (sRGB, straight alpha)
pub mod colors {
    /// `0xRRGGBB` to an opaque color
    pub const fn hex(rgb: u32) -> [f32; 4] {
        [
            ((rgb >> 16) & 0xFF) as f32 / 255.0,
            ((rgb >> 8) & 0xFF) as f32 / 255.0,
            (rgb & 0xFF) as f32 / 255.0,
            1.0,
        ]
    }

    /// Linear blend from `a` (t = 0) to `b` (t = 1)
    pub fn mix(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
        [
            a[0] + (b[0] - a[0]) * t,
            a[1] + (b[1] - a[1]) * t,
            a[2] + (b[2] - a[2]) * t,
            a[3] + (b[3] - a[3]) * t,
        ]
    }

    /// HSL (hue in degrees, saturation/lightness 0-1) to RGBA
    pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> [f32; 4] {
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let h = hue.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = lightness - c / 2.0;
        [r + m, g + m, b + m, alpha]
    }

    pub const SKY: [f32; 4] = hex(0x87CEEB);
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PLAYER_TOP: [f32; 4] = hex(0x4ECDC4);
    pub const PLAYER_BOTTOM: [f32; 4] = hex(0x45B7B8);
    pub const OBSTACLE_TOP: [f32; 4] = hex(0xFF6B6B);
    pub const OBSTACLE_BOTTOM: [f32; 4] = hex(0xFF8E8E);
    pub const GROUND_TOP: [f32; 4] = hex(0x8B4513);
    pub const GROUND_BOTTOM: [f32; 4] = hex(0xA0522D);
    pub const GRASS: [f32; 4] = hex(0x228B22);
    pub const PROMPT_BANNER: [f32; 4] = [1.0, 1.0, 1.0, 0.6];

}
