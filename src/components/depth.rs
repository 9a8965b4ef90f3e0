//! Draw depth component.
//!
//! [`Depth`] orders the painter's pass of
//! [`EntityManager::draw`](crate::entity::manager::EntityManager::draw).
//! Higher values are drawn first, so lower values end up on top. Entities
//! sharing a depth keep their insertion order.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Depth(pub i32);
