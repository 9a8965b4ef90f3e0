//! Lifecycle flags shared by every managed entity.

use bevy_ecs::prelude::Component;

/// Disposal state of an entity.
///
/// `destroyed` only ever goes from `false` to `true`, through
/// [`EntityManager::dispose`](crate::entity::manager::EntityManager::dispose).
/// `destroy_pending` is set when the entity was disposed while one of its own
/// hooks was running; the destroy hook then runs as soon as that hook returns.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Lifecycle {
    pub destroyed: bool,
    pub destroy_pending: bool,
}
