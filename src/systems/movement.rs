//! Kinematic integration.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;

/// One explicit-Euler step for `entity`: gravity into velocity, then
/// velocity into position.
pub fn integrate(world: &mut World, entity: Entity, dt: f32) {
    let Some(velocity) = world
        .get_mut::<RigidBody>(entity)
        .map(|mut body| body.accelerate(dt))
    else {
        return;
    };
    if let Some(mut position) = world.get_mut::<MapPosition>(entity) {
        position.pos += velocity * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_gravity_applies_before_position() {
        let mut world = World::new();
        let body = RigidBody {
            velocity: Vec2::new(10.0, 0.0),
            gravity: Vec2::new(0.0, -100.0),
        };
        let entity = world.spawn((MapPosition::new(0.0, 0.0), body)).id();

        integrate(&mut world, entity, 0.1);

        let position = world.get::<MapPosition>(entity).unwrap().pos;
        let velocity = world.get::<RigidBody>(entity).unwrap().velocity;
        assert!((velocity.y + 10.0).abs() < 1e-5);
        assert!((position.x - 1.0).abs() < 1e-5);
        assert!((position.y + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_entity_without_body_is_untouched() {
        let mut world = World::new();
        let entity = world.spawn(MapPosition::new(3.0, 4.0)).id();
        integrate(&mut world, entity, 1.0);
        assert_eq!(world.get::<MapPosition>(entity).unwrap().pos, Vec2::new(3.0, 4.0));
    }
}
