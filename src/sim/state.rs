//! Game state and core simulation types
//!
//! Entities are composition, not hierarchy: an [`Entity`] is a collider plus
//! a [`Category`] tag, and behavior dispatches on the tag. The car's motion
//! state lives in [`Car`] while its collider sits in the shared [`Registry`]
//! like every other object's, so the collision resolver treats the vehicle
//! as just another registered, category-tagged body.

use glam::Vec2;

use super::collider::Collider;
use crate::consts::*;

/// Stable entity handle. Ids are allocated monotonically and never reused.
pub type EntityId = u32;

/// What a registered object is, and how the collision resolver treats it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Vehicle,
    Obstacle,
    Collectible,
}

impl Category {
    /// Only genuinely solid scenery bounces the car; vehicles and
    /// collectibles never count as solid.
    #[inline]
    pub fn is_solid(self) -> bool {
        matches!(self, Category::Obstacle)
    }

    #[inline]
    pub fn is_collectible(self) -> bool {
        matches!(self, Category::Collectible)
    }
}

/// A registered collidable object.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub category: Category,
    pub collider: Collider,
    /// Visual spin phase in degrees. Advanced for collectibles only;
    /// rendering reads it, collision never does.
    pub spin: f32,
}

impl Entity {
    /// Per-tick update hook, invoked in registry order. Obstacles are
    /// inert; collectibles advance their spin phase.
    pub fn update(&mut self) {
        if self.category.is_collectible() {
            self.spin = (self.spin + COIN_SPIN_STEP) % 360.0;
        }
    }
}

/// The shared object registry: one dense, ordered collection of every live
/// collidable in the scene. Insertion order is draw order and nothing else;
/// removal compacts in place without reordering survivors.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entities: Vec<Entity>,
    next_id: EntityId,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new entity, returning its handle.
    pub fn insert(&mut self, category: Category, collider: Collider) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        self.entities.push(Entity {
            id,
            category,
            collider,
            spin: 0.0,
        });
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Remove an entity. Order-preserving compaction, no allocation.
    pub fn remove(&mut self, id: EntityId) {
        self.entities.retain(|e| e.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Live entities of one category.
    pub fn count(&self, category: Category) -> usize {
        self.entities.iter().filter(|e| e.category == category).count()
    }
}

/// Score accumulator for the owning player.
#[derive(Debug, Clone, Default)]
pub struct Player {
    pub score: u32,
}

impl Player {
    pub fn increment_score(&mut self) {
        self.score += 1;
    }
}

/// The player car's motion state.
///
/// `speed` is signed: positive is forward. The band
/// `(-initial_speed, initial_speed)` is a dead zone - the car is treated as
/// stopped inside it and the per-tick update collapses it to exactly 0.
#[derive(Debug, Clone)]
pub struct Car {
    /// Registry handle of the car's collider
    pub entity: EntityId,
    pub speed: f32,
    /// Multiplicative forward gain per accelerate call (> 1)
    pub acceleration: f32,
    /// Fixed step used for linear braking
    pub brake_power: f32,
    /// Dead-zone threshold; also the speed jumped to from a standstill
    pub initial_speed: f32,
    pub max_speed: f32,
    pub max_back_speed: f32,
    /// Multiplicative per-tick falloff when coasting (0..1)
    pub speed_decay: f32,
    /// Max degrees turned per tick at full speed
    pub rotation_step: f32,
    /// Last-applied steering input, read only by the renderer for the
    /// front wheel angle
    pub steering_left: bool,
    pub steering_right: bool,
}

impl Car {
    pub fn new(entity: EntityId) -> Self {
        Self {
            entity,
            speed: 0.0,
            acceleration: CAR_ACCELERATION,
            brake_power: CAR_BRAKE_POWER,
            initial_speed: CAR_INITIAL_SPEED,
            max_speed: CAR_MAX_SPEED,
            max_back_speed: CAR_MAX_BACK_SPEED,
            speed_decay: CAR_SPEED_DECAY,
            rotation_step: CAR_ROTATION_STEP,
            steering_left: false,
            steering_right: false,
        }
    }

    /// False inside the dead-zone band.
    pub fn is_moving(&self) -> bool {
        !(self.speed > -self.initial_speed && self.speed < self.initial_speed)
    }

    /// Rolling backward fast enough to light the reverse lamps.
    pub fn is_reversing(&self) -> bool {
        self.speed <= -self.initial_speed
    }

    /// Steering delta for this tick, scaled by current speed relative to
    /// the forward cap. Unclamped; reverse speed flips the sign, so
    /// steering direction reverses while backing up.
    fn steer_delta(&self) -> f32 {
        self.rotation_step * (self.speed / self.max_speed)
    }

    pub fn steer_left(&mut self, body: &mut Collider) {
        self.steering_left = true;
        if self.is_moving() {
            body.rotation -= self.steer_delta();
        }
    }

    pub fn stop_steer_left(&mut self) {
        self.steering_left = false;
    }

    pub fn steer_right(&mut self, body: &mut Collider) {
        self.steering_right = true;
        if self.is_moving() {
            body.rotation += self.steer_delta();
        }
    }

    pub fn stop_steer_right(&mut self) {
        self.steering_right = false;
    }

    /// Throttle intent.
    ///
    /// The `< max_speed` guard runs before the multiply, so the tick that
    /// crosses the cap may overshoot once; the guard then holds it there
    /// without clamping the overshoot back down.
    pub fn accelerate(&mut self) {
        if self.speed < self.max_speed {
            if self.speed < 0.0 {
                // Braking out of reverse, linear
                self.speed += self.brake_power;
            } else if self.speed == 0.0 {
                // Out of the dead zone in one jump, no crawl phase
                self.speed = self.initial_speed;
            } else {
                self.speed *= self.acceleration;
            }
        }
    }

    /// Brake / reverse intent. Braking from forward is linear; the reverse
    /// ramp is exponential with its own, lower cap.
    pub fn decelerate(&mut self) {
        if self.speed > 0.0 {
            self.speed -= self.brake_power;
        } else if self.speed == 0.0 {
            self.speed = -self.initial_speed;
        } else if self.speed.abs() < self.max_back_speed {
            self.speed *= self.acceleration;
        }
    }

    /// Speed response to this tick's collision verdict: a solid overlap
    /// inverts speed (a bounce, not a stop) and suppresses decay for the
    /// tick; otherwise the dead zone snaps to exactly 0 or passive decay
    /// applies.
    pub fn respond(&mut self, hit_solid: bool) {
        if hit_solid {
            self.speed = -self.speed;
        } else if !self.is_moving() {
            self.speed = 0.0;
        } else {
            self.speed *= self.speed_decay;
        }
    }
}

/// Complete simulation state for one scene.
#[derive(Debug, Clone)]
pub struct GameState {
    pub registry: Registry,
    pub car: Car,
    pub player: Player,
    /// Scene rectangle the car is clamped into
    pub bounds: Vec2,
    pub time_ticks: u64,
}

impl GameState {
    /// Create a scene with the car registered at `car_spawn` (top-left).
    /// Obstacles and collectibles are populated by the caller, typically
    /// via a [`super::level::SceneLayout`].
    pub fn new(bounds: Vec2, car_spawn: Vec2) -> Self {
        let mut registry = Registry::new();
        let entity = registry.insert(
            Category::Vehicle,
            Collider::new(car_spawn, CAR_WIDTH, CAR_HEIGHT),
        );
        Self {
            registry,
            car: Car::new(entity),
            player: Player::default(),
            bounds,
            time_ticks: 0,
        }
    }

    /// The car's collider, if still registered.
    pub fn car_body(&self) -> Option<&Collider> {
        self.registry.get(self.car.entity).map(|e| &e.collider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car() -> Car {
        Car::new(0)
    }

    #[test]
    fn test_registry_insert_and_remove() {
        let mut registry = Registry::new();
        let a = registry.insert(
            Category::Obstacle,
            Collider::new(Vec2::ZERO, 10.0, 10.0),
        );
        let b = registry.insert(
            Category::Collectible,
            Collider::new(Vec2::new(20.0, 0.0), 10.0, 10.0),
        );
        let c = registry.insert(
            Category::Collectible,
            Collider::new(Vec2::new(40.0, 0.0), 10.0, 10.0),
        );
        assert_eq!(registry.len(), 3);

        registry.remove(b);
        assert_eq!(registry.len(), 2);
        assert!(registry.get(b).is_none());
        // Survivors keep their order
        let ids: Vec<_> = registry.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_registry_ids_not_reused() {
        let mut registry = Registry::new();
        let a = registry.insert(
            Category::Obstacle,
            Collider::new(Vec2::ZERO, 10.0, 10.0),
        );
        registry.remove(a);
        let b = registry.insert(
            Category::Obstacle,
            Collider::new(Vec2::ZERO, 10.0, 10.0),
        );
        assert_ne!(a, b);
    }

    #[test]
    fn test_coin_spin_advances() {
        let mut registry = Registry::new();
        let coin = registry.insert(
            Category::Collectible,
            Collider::new(Vec2::ZERO, COIN_SIZE, COIN_SIZE),
        );
        let obstacle = registry.insert(
            Category::Obstacle,
            Collider::new(Vec2::new(50.0, 0.0), 10.0, 10.0),
        );
        for entity in registry.iter_mut() {
            entity.update();
        }
        assert!(registry.get(coin).map(|e| e.spin) == Some(COIN_SPIN_STEP));
        assert!(registry.get(obstacle).map(|e| e.spin) == Some(0.0));
    }

    #[test]
    fn test_dead_zone_band() {
        let mut c = car();
        c.speed = 0.49;
        assert!(!c.is_moving());
        c.speed = -0.49;
        assert!(!c.is_moving());
        c.speed = 0.5;
        assert!(c.is_moving());
        c.speed = -0.5;
        assert!(c.is_moving());
        assert!(c.is_reversing());
    }

    #[test]
    fn test_accelerate_from_standstill_jumps() {
        let mut c = car();
        c.accelerate();
        assert_eq!(c.speed, CAR_INITIAL_SPEED);
    }

    #[test]
    fn test_accelerate_ramp_is_multiplicative() {
        let mut c = car();
        c.speed = 0.5;
        c.accelerate();
        assert!((c.speed - 0.54).abs() < 1e-6);
    }

    #[test]
    fn test_accelerate_noop_at_cap() {
        let mut c = car();
        c.speed = c.max_speed;
        c.accelerate();
        assert_eq!(c.speed, CAR_MAX_SPEED);
    }

    #[test]
    fn test_accelerate_brakes_out_of_reverse() {
        let mut c = car();
        c.speed = -1.0;
        c.accelerate();
        assert!((c.speed - (-0.95)).abs() < 1e-6);
    }

    #[test]
    fn test_decelerate_brakes_forward_linearly() {
        let mut c = car();
        c.speed = 5.0;
        c.decelerate();
        assert!((c.speed - 4.95).abs() < 1e-6);
    }

    #[test]
    fn test_decelerate_from_standstill_enters_reverse() {
        let mut c = car();
        c.decelerate();
        assert_eq!(c.speed, -CAR_INITIAL_SPEED);
    }

    #[test]
    fn test_reverse_ramp_respects_back_cap() {
        let mut c = car();
        c.speed = -c.max_back_speed;
        c.decelerate();
        assert_eq!(c.speed, -CAR_MAX_BACK_SPEED);

        c.speed = -1.0;
        c.decelerate();
        assert!((c.speed - (-1.08)).abs() < 1e-6);
    }

    #[test]
    fn test_respond_inverts_on_hit_without_decay() {
        let mut c = car();
        c.speed = 5.0;
        c.respond(true);
        assert_eq!(c.speed, -5.0);
    }

    #[test]
    fn test_respond_snaps_dead_zone_to_zero() {
        let mut c = car();
        c.speed = 0.3;
        c.respond(false);
        assert_eq!(c.speed, 0.0);
        // And zero stays zero under decay
        c.respond(false);
        assert_eq!(c.speed, 0.0);
    }

    #[test]
    fn test_respond_applies_decay_when_moving() {
        let mut c = car();
        c.speed = 10.0;
        c.respond(false);
        assert!((c.speed - 9.6).abs() < 1e-5);
    }

    #[test]
    fn test_steering_scales_with_speed() {
        let mut c = car();
        let mut body = Collider::new(Vec2::ZERO, CAR_WIDTH, CAR_HEIGHT);
        c.speed = 10.0;
        c.steer_left(&mut body);
        assert!((body.rotation - (-8.0 * (10.0 / 12.0))).abs() < 1e-4);
        assert!(c.steering_left);
    }

    #[test]
    fn test_steering_reverses_in_reverse() {
        let mut c = car();
        let mut body = Collider::new(Vec2::ZERO, CAR_WIDTH, CAR_HEIGHT);
        c.speed = -1.0;
        c.steer_left(&mut body);
        // Steering left while reversing turns the heading the other way
        assert!(body.rotation > 0.0);
    }

    #[test]
    fn test_steering_noop_when_stopped() {
        let mut c = car();
        let mut body = Collider::new(Vec2::ZERO, CAR_WIDTH, CAR_HEIGHT);
        c.speed = 0.3;
        c.steer_right(&mut body);
        assert_eq!(body.rotation, 0.0);
        // The flag is still recorded for wheel rendering
        assert!(c.steering_right);
        c.stop_steer_right();
        assert!(!c.steering_right);
    }

    #[test]
    fn test_game_state_registers_car() {
        let state = GameState::new(Vec2::new(800.0, 600.0), Vec2::new(100.0, 100.0));
        assert_eq!(state.registry.count(Category::Vehicle), 1);
        let body = state.car_body().unwrap();
        assert_eq!(body.pos, Vec2::new(100.0, 100.0));
        assert_eq!(body.width, CAR_WIDTH);
        assert_eq!(body.height, CAR_HEIGHT);
    }
}
