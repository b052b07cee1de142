//! Coin Cruiser - a top-down driving game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion model, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Keyboard input state abstraction
//! - `settings`: Key bindings and preferences

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{KeyBindings, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Scene dimensions
    pub const SCENE_WIDTH: f32 = 800.0;
    pub const SCENE_HEIGHT: f32 = 600.0;

    /// Car body dimensions
    pub const CAR_WIDTH: f32 = 30.0;
    pub const CAR_HEIGHT: f32 = 50.0;

    /// Car tuning defaults
    pub const CAR_ACCELERATION: f32 = 1.08;
    pub const CAR_BRAKE_POWER: f32 = 0.05;
    pub const CAR_INITIAL_SPEED: f32 = 0.5;
    pub const CAR_MAX_SPEED: f32 = 12.0;
    pub const CAR_MAX_BACK_SPEED: f32 = 2.0;
    pub const CAR_SPEED_DECAY: f32 = 0.96;
    /// Max degrees turned per tick at full speed
    pub const CAR_ROTATION_STEP: f32 = 8.0;

    /// Coin dimensions and visual spin rate (degrees per tick)
    pub const COIN_SIZE: f32 = 12.0;
    pub const COIN_SPIN_STEP: f32 = 6.0;

    /// Default scene population
    pub const LEVEL_OBSTACLES: usize = 8;
    pub const LEVEL_COINS: usize = 20;
}

/// Per-tick displacement for a heading (degrees) at the given speed.
///
/// Screen coordinates: y grows downward, so heading 0 points up-screen
/// and moves toward -y.
#[inline]
pub fn heading_axis(rotation_deg: f32, speed: f32) -> Vec2 {
    let rad = rotation_deg.to_radians();
    Vec2::new(rad.sin() * speed, -rad.cos() * speed)
}
