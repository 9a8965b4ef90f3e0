use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::geometry::Rectangle;

/// Axis-aligned collision box attached to an entity.
///
/// `bounds` is derived state: its position is `entity position + offset`,
/// refreshed by [`crate::systems::collision::sync_collider`] every step.
/// `checking` opts the entity into collision testing; an entity that is not
/// checking neither scans nor gets found by other scans.
#[derive(Debug, Clone, Copy, PartialEq, Default, Component)]
pub struct BoxCollider {
    pub offset: Vec2,
    pub bounds: Rectangle,
    pub checking: bool,
}

impl BoxCollider {
    /// Create a BoxCollider with given size, anchored at the entity position.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            offset: Vec2::ZERO,
            bounds: Rectangle::new(0.0, 0.0, width, height),
            checking: false,
        }
    }

    /// Create a BoxCollider with given size, centered on the entity position.
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(width, height).with_offset(Vec2::new(-width * 0.5, -height * 0.5))
    }

    /// Modify BoxCollider with given offset
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Modify BoxCollider to take part in collision testing
    pub fn checking(mut self, checking: bool) -> Self {
        self.checking = checking;
        self
    }

    pub fn size(&self) -> Vec2 {
        self.bounds.size()
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.bounds.set_size(width, height);
    }

    /// Move the bounds to `position + offset`.
    pub fn sync(&mut self, position: Vec2) {
        self.bounds.set_position(position + self.offset);
    }

    /// Bounds overlap test against another collider.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.bounds.overlaps(&other.bounds)
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.bounds.contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_anchored_and_not_checking() {
        let collider = BoxCollider::new(10.0, 20.0);
        assert_eq!(collider.offset, Vec2::ZERO);
        assert_eq!(collider.size(), Vec2::new(10.0, 20.0));
        assert!(!collider.checking);
    }

    #[test]
    fn test_centered_sync_places_bounds_around_position() {
        let mut collider = BoxCollider::centered(10.0, 20.0);
        collider.sync(Vec2::new(100.0, 100.0));
        assert_eq!(collider.bounds, Rectangle::new(95.0, 90.0, 10.0, 20.0));
        assert!(collider.contains_point(Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn test_sync_uses_offset() {
        let mut collider = BoxCollider::new(4.0, 4.0).with_offset(Vec2::new(2.0, -3.0));
        collider.sync(Vec2::new(10.0, 10.0));
        assert_eq!(collider.bounds.position(), Vec2::new(12.0, 7.0));
    }

    #[test]
    fn test_overlaps_after_sync() {
        let mut a = BoxCollider::centered(10.0, 10.0).checking(true);
        let mut b = BoxCollider::centered(10.0, 10.0).checking(true);
        a.sync(Vec2::new(0.0, 0.0));
        b.sync(Vec2::new(8.0, 0.0));
        assert!(a.overlaps(&b));
        b.sync(Vec2::new(10.0, 0.0));
        assert!(!a.overlaps(&b));
    }
}
