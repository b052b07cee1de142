//! Pure collision queries over the object registry
//!
//! The resolver partitions registry members by category and answers the two
//! questions the motion model asks each tick. It never mutates anything;
//! removal, scoring and speed inversion happen in the tick using these
//! answers.

use super::collider::Collider;
use super::state::{EntityId, Registry};

/// This tick's collision verdict for one vehicle.
#[derive(Debug, Clone, Default)]
pub struct Verdict {
    /// Overlapping at least one solid obstacle
    pub hit_solid: bool,
    /// Every collectible currently overlapped, in registry order
    pub collectibles: Vec<EntityId>,
}

/// Is the vehicle overlapping at least one solid obstacle?
///
/// Other vehicles and collectibles never count as solid; the vehicle's own
/// entry is excluded by id.
pub fn overlaps_solid(registry: &Registry, vehicle: EntityId) -> bool {
    let Some(body) = body_of(registry, vehicle) else {
        return false;
    };
    registry
        .iter()
        .any(|e| e.id != vehicle && e.category.is_solid() && body.overlaps(&e.collider))
}

/// Every collectible the vehicle currently overlaps - possibly several in
/// the same tick.
pub fn overlapping_collectibles(registry: &Registry, vehicle: EntityId) -> Vec<EntityId> {
    let Some(body) = body_of(registry, vehicle) else {
        return Vec::new();
    };
    registry
        .iter()
        .filter(|e| e.category.is_collectible() && body.overlaps(&e.collider))
        .map(|e| e.id)
        .collect()
}

/// Both queries at once. The obstacle and collectible checks are
/// independent: a vehicle can bounce and collect in the same tick.
pub fn resolve(registry: &Registry, vehicle: EntityId) -> Verdict {
    Verdict {
        hit_solid: overlaps_solid(registry, vehicle),
        collectibles: overlapping_collectibles(registry, vehicle),
    }
}

fn body_of(registry: &Registry, vehicle: EntityId) -> Option<&Collider> {
    registry.get(vehicle).map(|e| &e.collider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Category;
    use glam::Vec2;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Collider {
        Collider::new(Vec2::new(x, y), w, h)
    }

    /// Registry with a vehicle at the origin, 30x50.
    fn with_vehicle() -> (Registry, EntityId) {
        let mut registry = Registry::new();
        let car = registry.insert(Category::Vehicle, rect(0.0, 0.0, 30.0, 50.0));
        (registry, car)
    }

    #[test]
    fn test_solid_obstacle_detected() {
        let (mut registry, car) = with_vehicle();
        registry.insert(Category::Obstacle, rect(20.0, 20.0, 40.0, 40.0));
        assert!(overlaps_solid(&registry, car));
    }

    #[test]
    fn test_collectibles_are_not_solid() {
        let (mut registry, car) = with_vehicle();
        registry.insert(Category::Collectible, rect(10.0, 10.0, 12.0, 12.0));
        assert!(!overlaps_solid(&registry, car));
    }

    #[test]
    fn test_other_vehicles_are_not_solid() {
        let (mut registry, car) = with_vehicle();
        registry.insert(Category::Vehicle, rect(10.0, 10.0, 30.0, 50.0));
        assert!(!overlaps_solid(&registry, car));
    }

    #[test]
    fn test_self_is_excluded() {
        let (registry, car) = with_vehicle();
        assert!(!overlaps_solid(&registry, car));
        assert!(overlapping_collectibles(&registry, car).is_empty());
    }

    #[test]
    fn test_non_overlapping_obstacle_misses() {
        let (mut registry, car) = with_vehicle();
        registry.insert(Category::Obstacle, rect(100.0, 100.0, 40.0, 40.0));
        assert!(!overlaps_solid(&registry, car));
    }

    #[test]
    fn test_all_overlapping_collectibles_returned() {
        let (mut registry, car) = with_vehicle();
        let a = registry.insert(Category::Collectible, rect(5.0, 5.0, 12.0, 12.0));
        let b = registry.insert(Category::Collectible, rect(10.0, 30.0, 12.0, 12.0));
        // Out of reach
        registry.insert(Category::Collectible, rect(200.0, 200.0, 12.0, 12.0));
        let c = registry.insert(Category::Collectible, rect(20.0, 40.0, 12.0, 12.0));

        let hits = overlapping_collectibles(&registry, car);
        assert_eq!(hits, vec![a, b, c]);
    }

    #[test]
    fn test_verdict_checks_are_independent() {
        let (mut registry, car) = with_vehicle();
        registry.insert(Category::Obstacle, rect(25.0, 0.0, 40.0, 40.0));
        let coin = registry.insert(Category::Collectible, rect(0.0, 45.0, 12.0, 12.0));

        let verdict = resolve(&registry, car);
        assert!(verdict.hit_solid);
        assert_eq!(verdict.collectibles, vec![coin]);
    }

    #[test]
    fn test_unknown_vehicle_id_is_harmless() {
        let (registry, _) = with_vehicle();
        assert!(!overlaps_solid(&registry, 999));
        assert!(overlapping_collectibles(&registry, 999).is_empty());
    }
}
