//! Keyboard input state
//!
//! Key-down/key-up notifications may arrive at any point between ticks and
//! only ever flip booleans here. The scene driver samples the table once
//! per tick, so a transition between ticks is fully absorbed by the next
//! sample - last state wins, no queuing, no debouncing.

use std::collections::HashMap;

use crate::settings::KeyBindings;
use crate::sim::TickInput;

/// Persistent boolean-per-key table, keyed by key name (`"ArrowLeft"`,
/// `"a"`, ... - the browser's `KeyboardEvent.key` values).
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    pressed: HashMap<String, bool>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.pressed.insert(key.to_owned(), true);
    }

    pub fn release(&mut self, key: &str) {
        self.pressed.insert(key.to_owned(), false);
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.get(key).copied().unwrap_or(false)
    }

    /// Translate the current table into one tick's intents.
    pub fn sample(&self, bindings: &KeyBindings) -> TickInput {
        TickInput {
            steer_left: self.is_pressed(&bindings.steer_left),
            steer_right: self.is_pressed(&bindings.steer_right),
            accelerate: self.is_pressed(&bindings.accelerate),
            decelerate: self.is_pressed(&bindings.decelerate),
        }
    }
}
