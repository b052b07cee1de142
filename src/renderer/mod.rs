//! WebGPU rendering module
//!
//! Consumes a read-only [`crate::sim::GameState`] snapshot and turns it
//! into colored triangles. All rotation happens here; the collision math
//! never sees these transforms.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::scene_vertices;
