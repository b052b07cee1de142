//! Game settings and key bindings

use serde::{Deserialize, Serialize};

/// Which key drives which intent. Key names follow the browser's
/// `KeyboardEvent.key` values, so bindings work unchanged on web.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    pub steer_left: String,
    pub steer_right: String,
    pub accelerate: String,
    pub decelerate: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            steer_left: "ArrowLeft".into(),
            steer_right: "ArrowRight".into(),
            accelerate: "ArrowUp".into(),
            decelerate: "ArrowDown".into(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub bindings: KeyBindings,
    /// Show the FPS counter in the HUD
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bindings: KeyBindings::default(),
            show_fps: true,
        }
    }
}
