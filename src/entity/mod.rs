//! Managed entities.
//!
//! An entity is a set of components in the manager's [`bevy_ecs::world::World`]
//! plus an optional [`EntityBehavior`] object holding its hooks. The core
//! components (position, body, collider, depth, lifecycle, role) are always
//! present; health, sprite, animation and persistence are chosen per entity
//! through the [`EntityBuilder`](builder::EntityBuilder).
//!
//! Hook order within one [`EntityManager::step`](manager::EntityManager::step):
//!
//! 1. kinematics and collision box update
//! 2. animation advance
//! 3. [`EntityBehavior::step`]
//! 4. [`EntityBehavior::on_collision`] for every overlap this entity finds
//! 5. [`EntityBehavior::post_step`], after every entity went through 1-4

pub mod builder;
pub mod context;
pub mod manager;

use bevy_ecs::prelude::{Component, Entity};

use crate::error::HookResult;
use crate::surface::Surface;

pub use builder::EntityBuilder;
pub use context::EntityContext;
pub use manager::{EntityManager, FaultPolicy};

/// Per-entity hooks. Every hook has a no-op default.
pub trait EntityBehavior: Send + Sync + 'static {
    /// Runs once, synchronously, when the entity is added.
    fn create(&mut self, _ctx: &mut EntityContext<'_>) -> HookResult {
        Ok(())
    }

    fn step(&mut self, _ctx: &mut EntityContext<'_>, _dt: f32) -> HookResult {
        Ok(())
    }

    fn post_step(&mut self, _ctx: &mut EntityContext<'_>, _dt: f32) -> HookResult {
        Ok(())
    }

    /// Extra drawing on top of the built-in visuals.
    fn draw(
        &mut self,
        _ctx: &mut EntityContext<'_>,
        _surface: &mut dyn Surface,
        _alpha: f32,
    ) -> HookResult {
        Ok(())
    }

    /// This entity's collider overlaps `other`'s this step. Only the scanning
    /// entity is told; `other` learns about it from its own scan, if any.
    fn on_collision(&mut self, _ctx: &mut EntityContext<'_>, _other: Entity) -> HookResult {
        Ok(())
    }

    /// Runs once, when the entity is disposed.
    fn destroy(&mut self, _ctx: &mut EntityContext<'_>) -> HookResult {
        Ok(())
    }
}

pub type BoxedBehavior = Box<dyn EntityBehavior>;

/// Storage for an entity's behavior. Empty while one of its hooks runs.
#[derive(Component)]
pub struct BehaviorSlot(pub Option<BoxedBehavior>);
