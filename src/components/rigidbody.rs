//! Kinematic body component.
//!
//! The [`RigidBody`] component stores velocity and a constant gravity
//! acceleration. The movement system adds `gravity * dt` to the velocity
//! before integrating position, so gravity always applies to the step it is
//! observed in.
//!
//! Directions are in degrees counter-clockwise from +x, matching
//! [`crate::geometry::motion`].

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::geometry::{direction_of, motion};

/// Kinematic body storing velocity and gravity.
///
/// # Fields
/// - `velocity` - Current velocity in world units per second
/// - `gravity` - Constant acceleration in world units per second squared
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::new();
/// rb.set_motion(100.0, 270.0); // straight down
/// rb.gravity = Vec2::new(0.0, -980.0);
/// ```
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vec2,
    /// Constant acceleration added to `velocity` every step.
    pub gravity: Vec2,
}

impl RigidBody {
    /// Create a RigidBody with zero velocity and no gravity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a RigidBody moving at `speed` toward `direction` degrees.
    pub fn with_motion(speed: f32, direction: f32) -> Self {
        Self {
            velocity: motion(speed, direction),
            gravity: Vec2::ZERO,
        }
    }

    /// Replace the velocity with `speed` toward `direction` degrees.
    pub fn set_motion(&mut self, speed: f32, direction: f32) {
        self.velocity = motion(speed, direction);
    }

    /// Add `speed` toward `direction` degrees to the current velocity.
    pub fn add_motion(&mut self, speed: f32, direction: f32) {
        self.velocity += motion(speed, direction);
    }

    /// Magnitude of the velocity.
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Direction of the velocity in degrees, `0.0` when at rest.
    pub fn direction(&self) -> f32 {
        direction_of(self.velocity)
    }

    /// Set speed while maintaining the current direction of velocity.
    ///
    /// A body at rest has no direction to keep, so the call is ignored.
    pub fn set_speed(&mut self, speed: f32) {
        if let Some(direction) = self.velocity.try_normalize() {
            self.velocity = direction * speed;
        }
    }

    /// Apply one step of gravity and return the new velocity.
    pub fn accelerate(&mut self, dt: f32) -> Vec2 {
        self.velocity += self.gravity * dt;
        self.velocity
    }
}
