//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
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

/// Colors for game elements
pub mod colors {
    /// Road surface (#efefef)
    pub const BACKGROUND: [f32; 4] = [0.937, 0.937, 0.937, 1.0];
    /// Letterbox outside the scene
    pub const BORDER: [f32; 4] = [0.08, 0.08, 0.1, 1.0];
    pub const CAR_BODY: [f32; 4] = [0.85, 0.1, 0.1, 1.0];
    /// Headlight yellow (#ffc41d)
    pub const HEADLIGHT: [f32; 4] = [1.0, 0.768, 0.114, 1.0];
    pub const WHEEL: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const WINDOW: [f32; 4] = [1.0, 1.0, 1.0, 0.9];
    pub const WINDOW_TINT: [f32; 4] = [0.0, 0.0, 0.0, 0.1];
    pub const REVERSE_LIGHT: [f32; 4] = [1.0, 1.0, 1.0, 0.9];
    pub const REVERSE_LIGHT_DIM: [f32; 4] = [1.0, 1.0, 1.0, 0.6];
    pub const OBSTACLE: [f32; 4] = [0.25, 0.28, 0.25, 1.0];
    pub const COIN: [f32; 4] = [0.94, 0.78, 0.15, 1.0];
}
