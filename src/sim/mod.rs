//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collider;
pub mod collision;
pub mod driver;
pub mod level;
pub mod state;
pub mod tick;

pub use collider::Collider;
pub use collision::{overlapping_collectibles, overlaps_solid, resolve, Verdict};
pub use driver::SceneDriver;
pub use level::{generate_layout, RectSpawn, SceneLayout};
pub use state::{Car, Category, Entity, EntityId, GameState, Player, Registry};
pub use tick::{tick, TickInput};
