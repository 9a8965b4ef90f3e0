//! Shared 2D value types.
//!
//! Vectors are [`glam::Vec2`]. This module adds the axis-aligned
//! [`Rectangle`] used for collision boxes and a few angle helpers. Angles are
//! in degrees, counter-clockwise from +x, with +y pointing up.

use glam::Vec2;

/// Axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.x = position.x;
        self.y = position.y;
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap.
    /// A zero-size box strictly inside another one still overlaps it.
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Point containment, edges inclusive.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Velocity of magnitude `speed` pointing at `direction` degrees.
pub fn motion(speed: f32, direction: f32) -> Vec2 {
    let radians = direction.to_radians();
    Vec2::new(radians.cos(), radians.sin()) * speed
}

/// Direction of `v` in degrees, normalized to `[0, 360)`.
pub fn direction_of(v: Vec2) -> f32 {
    let degrees = v.y.atan2(v.x).to_degrees();
    if degrees < 0.0 { degrees + 360.0 } else { degrees }
}

/// Move angle `from` toward `to` by at most `step` degrees along the shortest arc.
pub fn approach_angle(from: f32, to: f32, step: f32) -> f32 {
    let mut diff = (to - from).rem_euclid(360.0);
    if diff > 180.0 {
        diff -= 360.0;
    }
    let result = if diff.abs() <= step {
        to
    } else {
        from + step * diff.signum()
    };
    result.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    // ==================== RECTANGLE TESTS ====================

    #[test]
    fn test_overlap_intersecting() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_touching_edges_is_not_overlap() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_overlap_degenerate_box_inside_overlaps() {
        let a = Rectangle::new(5.0, 5.0, 0.0, 0.0);
        let b = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_degenerate_box_on_edge_does_not_overlap() {
        let a = Rectangle::new(0.0, 5.0, 0.0, 0.0);
        let b = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_contains_inclusive_edges() {
        let r = Rectangle::new(0.0, 0.0, 4.0, 2.0);
        assert!(r.contains(Vec2::new(4.0, 2.0)));
        assert!(r.contains(Vec2::new(2.0, 1.0)));
        assert!(!r.contains(Vec2::new(4.1, 1.0)));
    }

    #[test]
    fn test_center_and_max() {
        let r = Rectangle::new(10.0, 20.0, 4.0, 6.0);
        assert_eq!(r.center(), Vec2::new(12.0, 23.0));
        assert_eq!(r.max(), Vec2::new(14.0, 26.0));
    }

    // ==================== ANGLE TESTS ====================

    #[test]
    fn test_motion_points_at_direction() {
        let up = motion(100.0, 90.0);
        assert!(approx_eq(up.x, 0.0));
        assert!(approx_eq(up.y, 100.0));
        let down = motion(100.0, 270.0);
        assert!(approx_eq(down.y, -100.0));
    }

    #[test]
    fn test_direction_of_is_normalized() {
        assert!(approx_eq(direction_of(Vec2::new(0.0, -1.0)), 270.0));
        assert!(approx_eq(direction_of(Vec2::new(-1.0, 0.0)), 180.0));
        assert!(approx_eq(direction_of(Vec2::new(1.0, 0.0)), 0.0));
    }

    #[test]
    fn test_approach_angle_shortest_arc() {
        assert!(approx_eq(approach_angle(180.0, 90.0, 45.0), 135.0));
        assert!(approx_eq(approach_angle(0.0, 90.0, 45.0), 45.0));
        assert!(approx_eq(approach_angle(0.0, 270.0, 45.0), 315.0));
        assert!(approx_eq(approach_angle(80.0, 90.0, 45.0), 90.0));
    }
}
