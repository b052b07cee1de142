//! Axis-aligned rectangular collider
//!
//! Every collidable object carries one of these: a top-left anchored
//! rectangle plus a heading. The heading drives movement direction and
//! rendering, never hit-testing - overlap checks always use the unrotated
//! bounding box. That asymmetry is deliberate: a car rotated 45 degrees
//! still collides with its axis-aligned bounds.

use glam::Vec2;

/// A collidable rectangle in screen coordinates (y grows downward).
#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Heading in degrees, unconstrained. Ignored by `overlaps`.
    pub rotation: f32,
}

impl Collider {
    /// Malformed geometry is a configuration error, not a runtime state.
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        debug_assert!(pos.is_finite(), "collider position must be finite");
        debug_assert!(
            width > 0.0 && height > 0.0,
            "collider extents must be positive"
        );
        Self {
            pos,
            width,
            height,
            rotation: 0.0,
        }
    }

    /// Center of the unrotated box.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width, self.height) * 0.5
    }

    /// Strict rectangle intersection: true iff the boxes share nonzero
    /// area. Touching edges do not count as overlap.
    pub fn overlaps(&self, other: &Collider) -> bool {
        self.pos.x < other.pos.x + other.width
            && self.pos.x + self.width > other.pos.x
            && self.pos.y < other.pos.y + other.height
            && self.pos.y + self.height > other.pos.y
    }

    /// Clamp the box into the scene rectangle anchored at the origin.
    pub fn clamp_to(&mut self, bounds: Vec2) {
        self.pos.x = self.pos.x.clamp(0.0, (bounds.x - self.width).max(0.0));
        self.pos.y = self.pos.y.clamp(0.0, (bounds.y - self.height).max(0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Collider {
        Collider::new(Vec2::new(x, y), w, h)
    }

    #[test]
    fn test_overlap_basic() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_disjoint() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(20.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        // Shares the x=10 edge - zero-area intersection
        let b = rect(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        // Shares only the corner at (10, 10)
        let c = rect(10.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = rect(0.0, 0.0, 100.0, 100.0);
        let inner = rect(40.0, 40.0, 10.0, 10.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_rotation_ignored_for_overlap() {
        let mut a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(9.0, 9.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        // A rotated box still collides with its axis-aligned bounds
        a.rotation = 45.0;
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_clamp_to_bounds() {
        let bounds = Vec2::new(100.0, 100.0);
        let mut c = rect(-5.0, 95.0, 10.0, 10.0);
        c.clamp_to(bounds);
        assert_eq!(c.pos, Vec2::new(0.0, 90.0));

        let mut inside = rect(40.0, 40.0, 10.0, 10.0);
        inside.clamp_to(bounds);
        assert_eq!(inside.pos, Vec2::new(40.0, 40.0));
    }

    #[test]
    fn test_center() {
        let c = rect(10.0, 20.0, 30.0, 50.0);
        assert_eq!(c.center(), Vec2::new(25.0, 45.0));
    }
}
