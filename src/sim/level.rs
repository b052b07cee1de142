//! Scene layouts
//!
//! A scene is authored as data - bounds, car spawn, obstacle rectangles and
//! coin positions - either parsed from JSON or scattered procedurally from
//! a seed. Generation is deterministic: same seed, same scene.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collider::Collider;
use super::state::{Category, GameState};
use crate::consts::*;

/// Placement retries per object before giving up on it
const MAX_PLACEMENT_ATTEMPTS: usize = 50;
/// Free margin kept around the car spawn
const SPAWN_CLEARANCE: f32 = 60.0;

/// An axis-aligned rectangle in layout data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectSpawn {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectSpawn {
    fn collider(&self) -> Collider {
        Collider::new(Vec2::new(self.x, self.y), self.width, self.height)
    }
}

/// A complete scene description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLayout {
    pub width: f32,
    pub height: f32,
    /// Car spawn (top-left)
    pub car: Vec2,
    pub obstacles: Vec<RectSpawn>,
    /// Coin positions (top-left); coins are COIN_SIZE square
    pub coins: Vec<Vec2>,
}

impl SceneLayout {
    /// Parse an authored layout.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl GameState {
    /// Pre-populate a scene's registry from a layout. Registration order
    /// (car, obstacles, coins) is draw order.
    pub fn from_layout(layout: &SceneLayout) -> Self {
        let mut state = GameState::new(Vec2::new(layout.width, layout.height), layout.car);
        for rect in &layout.obstacles {
            state.registry.insert(Category::Obstacle, rect.collider());
        }
        for pos in &layout.coins {
            state
                .registry
                .insert(Category::Collectible, Collider::new(*pos, COIN_SIZE, COIN_SIZE));
        }
        log::info!(
            "scene ready: {} obstacles, {} coins",
            layout.obstacles.len(),
            layout.coins.len()
        );
        state
    }
}

/// Scatter obstacles and coins over the default scene with a seeded RNG.
///
/// Candidates overlapping anything already placed (including a clearance
/// zone around the car spawn) are re-rolled; an object whose retries run
/// out is skipped, so crowded parameters degrade gracefully.
pub fn generate_layout(seed: u64, obstacles: usize, coins: usize) -> SceneLayout {
    let mut rng = Pcg32::seed_from_u64(seed);
    let car = Vec2::new(
        (SCENE_WIDTH - CAR_WIDTH) / 2.0,
        (SCENE_HEIGHT - CAR_HEIGHT) / 2.0,
    );

    let clearance = Collider::new(
        car - Vec2::splat(SPAWN_CLEARANCE),
        CAR_WIDTH + 2.0 * SPAWN_CLEARANCE,
        CAR_HEIGHT + 2.0 * SPAWN_CLEARANCE,
    );
    let mut placed = vec![clearance];

    let mut layout = SceneLayout {
        width: SCENE_WIDTH,
        height: SCENE_HEIGHT,
        car,
        obstacles: Vec::with_capacity(obstacles),
        coins: Vec::with_capacity(coins),
    };

    for _ in 0..obstacles {
        let spawn = place(&mut rng, &mut placed, |rng| {
            let width = rng.random_range(30.0..90.0);
            let height = rng.random_range(30.0..90.0);
            (rng_pos(rng, width, height), width, height)
        });
        match spawn {
            Some(c) => layout.obstacles.push(RectSpawn {
                x: c.pos.x,
                y: c.pos.y,
                width: c.width,
                height: c.height,
            }),
            None => log::warn!("obstacle placement exhausted after {MAX_PLACEMENT_ATTEMPTS} tries"),
        }
    }

    for _ in 0..coins {
        let spawn = place(&mut rng, &mut placed, |rng| {
            (rng_pos(rng, COIN_SIZE, COIN_SIZE), COIN_SIZE, COIN_SIZE)
        });
        match spawn {
            Some(c) => layout.coins.push(c.pos),
            None => log::warn!("coin placement exhausted after {MAX_PLACEMENT_ATTEMPTS} tries"),
        }
    }

    layout
}

fn rng_pos(rng: &mut Pcg32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        rng.random_range(0.0..SCENE_WIDTH - width),
        rng.random_range(0.0..SCENE_HEIGHT - height),
    )
}

/// Roll candidates until one fits or the retries run out.
fn place(
    rng: &mut Pcg32,
    placed: &mut Vec<Collider>,
    mut candidate: impl FnMut(&mut Pcg32) -> (Vec2, f32, f32),
) -> Option<Collider> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let (pos, width, height) = candidate(rng);
        let collider = Collider::new(pos, width, height);
        if placed.iter().all(|p| !p.overlaps(&collider)) {
            placed.push(collider.clone());
            return Some(collider);
        }
    }
    None
}
