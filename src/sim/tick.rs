//! Fixed timestep simulation tick
//!
//! One tick applies the sampled input intents, resolves collisions, moves
//! the car, and runs every registered object's update hook in registry
//! order.

use super::collision;
use super::state::GameState;
use crate::heading_axis;

/// Input intents for a single tick, sampled once from the key-state table.
///
/// Steering and throttle are orthogonal; any combination may be set at
/// once. Last key state wins - there is no queuing or debouncing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub steer_left: bool,
    pub steer_right: bool,
    pub accelerate: bool,
    pub decelerate: bool,
}

/// Advance the game state by one fixed timestep.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;
    apply_intents(state, input);
    update_car(state);
    for entity in state.registry.iter_mut() {
        entity.update();
    }
}

/// Translate this tick's intents into steering and throttle. Steering
/// flags are cleared when the key is up so the renderer always sees the
/// last-applied input.
fn apply_intents(state: &mut GameState, input: &TickInput) {
    let car = &mut state.car;
    if let Some(entity) = state.registry.get_mut(car.entity) {
        let body = &mut entity.collider;
        if input.steer_left {
            car.steer_left(body);
        } else {
            car.stop_steer_left();
        }
        if input.steer_right {
            car.steer_right(body);
        } else {
            car.stop_steer_right();
        }
    }
    if input.accelerate {
        car.accelerate();
    }
    if input.decelerate {
        car.decelerate();
    }
}

/// Collision response, coin consumption and position integration.
fn update_car(state: &mut GameState) {
    let verdict = collision::resolve(&state.registry, state.car.entity);

    // Solid overlap inverts speed; otherwise dead-zone snap or decay
    state.car.respond(verdict.hit_solid);

    // Consumed collectibles leave the registry, one point each. Several
    // can go in the same tick.
    for id in &verdict.collectibles {
        state.registry.remove(*id);
        state.player.increment_score();
    }
    if !verdict.collectibles.is_empty() {
        log::debug!(
            "collected {} coin(s), score {}",
            verdict.collectibles.len(),
            state.player.score
        );
    }

    // Heading displacement, then the bounds clamp last, so the rendered
    // frame reflects post-collision, post-displacement state
    let speed = state.car.speed;
    let bounds = state.bounds;
    if let Some(entity) = state.registry.get_mut(state.car.entity) {
        let body = &mut entity.collider;
        body.pos += heading_axis(body.rotation, speed);
        body.clamp_to(bounds);
    }
}
