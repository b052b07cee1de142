//! Platform abstraction layer
//!
//! The simulation core never touches the browser or the window system
//! directly. The platform side owns the key-state table (written by
//! asynchronous key events, sampled once per tick) and the frame callback
//! that drives the scene driver.

pub mod input;

pub use input::KeyState;
