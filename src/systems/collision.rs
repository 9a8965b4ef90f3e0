//! Collision box maintenance and pair tests.
//!
//! The pairwise scan itself lives in
//! [`EntityManager::step`](crate::entity::manager::EntityManager::step)
//! because it interleaves with behavior hooks; these are the queries it uses.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;

/// Move the collider bounds of `entity` to `position + offset`.
pub fn sync_collider(world: &mut World, entity: Entity) {
    let Some(position) = world.get::<MapPosition>(entity).map(|p| p.pos) else {
        return;
    };
    if let Some(mut collider) = world.get_mut::<BoxCollider>(entity) {
        collider.sync(position);
    }
}

/// Whether `entity` takes part in collision testing.
pub fn is_checking(world: &World, entity: Entity) -> bool {
    world
        .get::<BoxCollider>(entity)
        .is_some_and(|collider| collider.checking)
}

/// Bounds overlap test between two entities' colliders.
pub fn overlapping(world: &World, a: Entity, b: Entity) -> bool {
    match (world.get::<BoxCollider>(a), world.get::<BoxCollider>(b)) {
        (Some(collider_a), Some(collider_b)) => collider_a.overlaps(collider_b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_sync_then_overlap() {
        let mut world = World::new();
        let a = world
            .spawn((MapPosition::new(0.0, 0.0), BoxCollider::centered(10.0, 10.0).checking(true)))
            .id();
        let b = world
            .spawn((MapPosition::new(50.0, 0.0), BoxCollider::centered(10.0, 10.0)))
            .id();

        sync_collider(&mut world, a);
        sync_collider(&mut world, b);
        assert!(!overlapping(&world, a, b));

        world.get_mut::<MapPosition>(b).unwrap().pos = Vec2::new(5.0, 0.0);
        assert!(!overlapping(&world, a, b), "bounds only move on sync");
        sync_collider(&mut world, b);
        assert!(overlapping(&world, a, b));

        assert!(is_checking(&world, a));
        assert!(!is_checking(&world, b));
    }
}
