//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component survive
//! [`EntityManager::clear`](crate::entity::manager::EntityManager::clear)
//! unless the clear is forced.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should survive a non-forced clear.
#[derive(Component, Clone, Copy, Debug)]
pub struct Persistent;
