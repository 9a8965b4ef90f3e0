//! The entity population.
//!
//! [`EntityManager`] owns a private [`World`] holding every entity's
//! components and an `order` list giving the processing order. Entity ids are
//! generational, so a handle kept after its entity was removed simply stops
//! resolving instead of aliasing a newer entity.
//!
//! Entities are never spliced out of `order` while someone may be scanning
//! it. A disposed entity is only flagged; it is removed when the step loop
//! reaches it, or by [`EntityManager::clear`].

use std::cmp::Reverse;

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, error};

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::depth::Depth;
use crate::components::health::Health;
use crate::components::lifecycle::Lifecycle;
use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::rigidbody::RigidBody;
use crate::components::role::Role;
use crate::context::AppContext;
use crate::entity::{BehaviorSlot, BoxedBehavior, EntityBuilder, EntityContext};
use crate::error::{EngineError, HookResult};
use crate::geometry::Rectangle;
use crate::surface::Surface;
use crate::systems::{animation, collision, movement, render};

/// What happens when an entity hook returns an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaultPolicy {
    /// Abort the pass and return the error to the caller.
    #[default]
    Propagate,
    /// Log the error, dispose the offending entity and carry on.
    Isolate,
}

pub struct EntityManager {
    world: World,
    order: Vec<Entity>,
    fault_policy: FaultPolicy,
}

impl Default for EntityManager {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityManager {
    pub fn new() -> Self {
        Self::with_fault_policy(FaultPolicy::Propagate)
    }

    pub fn with_fault_policy(fault_policy: FaultPolicy) -> Self {
        Self {
            world: World::new(),
            order: Vec::new(),
            fault_policy,
        }
    }

    pub fn fault_policy(&self) -> FaultPolicy {
        self.fault_policy
    }

    pub fn set_fault_policy(&mut self, fault_policy: FaultPolicy) {
        self.fault_policy = fault_policy;
    }

    // ==================== POPULATION ====================

    /// Spawn `builder` at the end of the processing order and run its
    /// `create` hook before returning.
    ///
    /// Safe to call from any hook; an entity added during a step takes part in
    /// the rest of that step, including its `post_step` pass.
    pub fn add_entity(
        &mut self,
        builder: EntityBuilder,
        app: &mut AppContext,
    ) -> Result<Entity, EngineError> {
        let id = builder.spawn(&mut self.world);
        self.order.push(id);
        let result = self.invoke(id, app, |behavior, ctx| behavior.create(ctx));
        self.guard(id, app, result)?;
        Ok(id)
    }

    /// Dispose `id`: flag it destroyed and run its `destroy` hook.
    ///
    /// Returns `false` when the entity was already destroyed or is unknown.
    /// When `id` is disposed from inside one of its own hooks, the `destroy`
    /// hook runs right after that hook returns.
    pub fn dispose(&mut self, id: Entity, app: &mut AppContext) -> Result<bool, EngineError> {
        {
            let Some(mut lifecycle) = self.world.get_mut::<Lifecycle>(id) else {
                return Ok(false);
            };
            if lifecycle.destroyed {
                return Ok(false);
            }
            lifecycle.destroyed = true;
            lifecycle.destroy_pending = true;
        }
        if self.is_busy(id) {
            return Ok(true);
        }
        self.flush_destroy(id, app)?;
        Ok(true)
    }

    /// Dispose every entity, or every non-persistent one, then drop them.
    pub fn clear(&mut self, include_persistent: bool, app: &mut AppContext) -> HookResult {
        // destroy hooks may add entities, so repeat until a pass finds none
        loop {
            let pending: Vec<Entity> = self
                .order
                .iter()
                .copied()
                .filter(|id| !self.is_destroyed(*id))
                .filter(|id| include_persistent || !self.is_persistent(*id))
                .collect();
            if pending.is_empty() {
                break;
            }
            for id in pending {
                let result = self.dispose(id, app).map(|_| ());
                self.guard(id, app, result)?;
            }
        }
        self.sweep();
        debug!(
            "Cleared entities (include_persistent={}), {} remain",
            include_persistent,
            self.order.len()
        );
        Ok(())
    }

    // ==================== FRAME PIPELINE ====================

    /// Advance the population by `dt` seconds.
    pub fn step(&mut self, dt: f32, app: &mut AppContext) -> HookResult {
        let mut index = 0;
        while index < self.order.len() {
            let id = self.order[index];
            if self.is_destroyed(id) {
                self.remove_at(index);
                continue;
            }

            movement::integrate(&mut self.world, id, dt);
            collision::sync_collider(&mut self.world, id);

            let result =
                animation::advance(&mut self.world, id, &app.assets, dt).map_err(EngineError::from);
            self.guard(id, app, result)?;

            if !self.is_destroyed(id) {
                let result = self.invoke(id, app, |behavior, ctx| behavior.step(ctx, dt));
                self.guard(id, app, result)?;
            }

            // the hook may have moved the entity
            collision::sync_collider(&mut self.world, id);
            self.scan_collisions(id, app)?;

            if self.is_destroyed(id) {
                self.remove_at(index);
            } else {
                index += 1;
            }
        }

        let count = self.order.len();
        for index in 0..count {
            let id = self.order[index];
            if self.is_destroyed(id) {
                continue;
            }
            let result = self.invoke(id, app, |behavior, ctx| behavior.post_step(ctx, dt));
            self.guard(id, app, result)?;
        }
        Ok(())
    }

    /// Notify `id` of every other checking entity its collider overlaps.
    ///
    /// The scan re-reads the population length so entities added by a
    /// collision hook are scanned too, and stops as soon as `id` is destroyed
    /// or stops checking.
    fn scan_collisions(&mut self, id: Entity, app: &mut AppContext) -> HookResult {
        let mut other_index = 0;
        while other_index < self.order.len() {
            if self.is_destroyed(id) || !collision::is_checking(&self.world, id) {
                break;
            }
            let other = self.order[other_index];
            other_index += 1;

            if other == id || self.is_destroyed(other) || !collision::is_checking(&self.world, other)
            {
                continue;
            }
            if collision::overlapping(&self.world, id, other) {
                let result =
                    self.invoke(id, app, |behavior, ctx| behavior.on_collision(ctx, other));
                self.guard(id, app, result)?;
            }
        }
        Ok(())
    }

    /// Draw live entities, highest depth first. Ties keep insertion order.
    pub fn draw(
        &mut self,
        surface: &mut dyn Surface,
        alpha: f32,
        app: &mut AppContext,
    ) -> HookResult {
        let world = &self.world;
        self.order
            .sort_by_key(|id| Reverse(world.get::<Depth>(*id).map_or(0, |depth| depth.0)));

        let count = self.order.len();
        for index in 0..count {
            let id = self.order[index];
            if self.is_destroyed(id) {
                continue;
            }
            let result = render::draw_visual(&self.world, id, &app.assets, surface, alpha)
                .map_err(EngineError::from);
            self.guard(id, app, result)?;

            let result = self.invoke(id, app, |behavior, ctx| behavior.draw(ctx, surface, alpha));
            self.guard(id, app, result)?;
        }
        Ok(())
    }

    // ==================== HOOK PLUMBING ====================

    /// Run one hook of `id` with its behavior checked out of the world.
    fn invoke<F>(&mut self, id: Entity, app: &mut AppContext, hook: F) -> HookResult
    where
        F: FnOnce(&mut BoxedBehavior, &mut EntityContext<'_>) -> HookResult,
    {
        let Some(mut behavior) = self.take_behavior(id) else {
            return Ok(());
        };
        let result = {
            let mut ctx = EntityContext::new(id, self, app);
            hook(&mut behavior, &mut ctx)
        };
        self.restore_behavior(id, behavior);
        result?;
        self.flush_destroy(id, app)
    }

    /// Run the `destroy` hook of `id` if a disposal is waiting for it.
    fn flush_destroy(&mut self, id: Entity, app: &mut AppContext) -> HookResult {
        let pending = match self.world.get_mut::<Lifecycle>(id) {
            Some(mut lifecycle) if lifecycle.destroy_pending => {
                lifecycle.destroy_pending = false;
                true
            }
            _ => false,
        };
        if !pending {
            return Ok(());
        }
        self.invoke(id, app, |behavior, ctx| behavior.destroy(ctx))
    }

    /// Apply the fault policy to a hook result.
    fn guard(&mut self, id: Entity, app: &mut AppContext, result: HookResult) -> HookResult {
        let Err(err) = result else {
            return Ok(());
        };
        match self.fault_policy {
            FaultPolicy::Propagate => Err(err),
            FaultPolicy::Isolate => {
                error!("Entity {:?} failed, disposing it: {}", id, err);
                let cleanup = self
                    .dispose(id, app)
                    .and_then(|_| self.flush_destroy(id, app));
                if let Err(err) = cleanup {
                    error!("Entity {:?} failed while being disposed: {}", id, err);
                }
                Ok(())
            }
        }
    }

    fn take_behavior(&mut self, id: Entity) -> Option<BoxedBehavior> {
        self.world
            .get_mut::<BehaviorSlot>(id)
            .and_then(|mut slot| slot.0.take())
    }

    fn restore_behavior(&mut self, id: Entity, behavior: BoxedBehavior) {
        if let Some(mut slot) = self.world.get_mut::<BehaviorSlot>(id) {
            slot.0 = Some(behavior);
        }
    }

    /// One of `id`'s hooks is running.
    fn is_busy(&self, id: Entity) -> bool {
        self.world
            .get::<BehaviorSlot>(id)
            .is_some_and(|slot| slot.0.is_none())
    }

    fn remove_at(&mut self, index: usize) {
        let id = self.order.remove(index);
        self.world.despawn(id);
    }

    /// Drop every destroyed entity.
    fn sweep(&mut self) {
        let world = &mut self.world;
        self.order.retain(|id| {
            let destroyed = world
                .get::<Lifecycle>(*id)
                .is_none_or(|lifecycle| lifecycle.destroyed);
            if destroyed {
                world.despawn(*id);
            }
            !destroyed
        });
    }

    // ==================== QUERIES ====================

    /// Number of live (not destroyed) entities.
    pub fn len(&self) -> usize {
        self.order
            .iter()
            .filter(|id| !self.is_destroyed(**id))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live entities in processing order.
    pub fn entities(&self) -> Vec<Entity> {
        self.order
            .iter()
            .copied()
            .filter(|id| !self.is_destroyed(*id))
            .collect()
    }

    /// Live entities whose role satisfies `matches`.
    pub fn entities_with_role(&self, matches: impl Fn(Role) -> bool) -> Vec<Entity> {
        self.order
            .iter()
            .copied()
            .filter(|id| !self.is_destroyed(*id))
            .filter(|id| self.role(*id).is_some_and(&matches))
            .collect()
    }

    /// Whether `id` is still held by the manager, destroyed or not.
    pub fn contains(&self, id: Entity) -> bool {
        self.world.get::<Lifecycle>(id).is_some()
    }

    /// Unknown entities count as destroyed.
    pub fn is_destroyed(&self, id: Entity) -> bool {
        self.world
            .get::<Lifecycle>(id)
            .is_none_or(|lifecycle| lifecycle.destroyed)
    }

    pub fn is_persistent(&self, id: Entity) -> bool {
        self.world.get::<Persistent>(id).is_some()
    }

    /// Read any component of `id`.
    pub fn get<T: Component>(&self, id: Entity) -> Option<&T> {
        self.world.get::<T>(id)
    }

    pub fn position(&self, id: Entity) -> Option<Vec2> {
        self.world.get::<MapPosition>(id).map(|p| p.pos)
    }

    pub fn set_position(&mut self, id: Entity, position: Vec2) {
        if let Some(mut p) = self.world.get_mut::<MapPosition>(id) {
            p.pos = position;
        }
    }

    pub fn velocity(&self, id: Entity) -> Option<Vec2> {
        self.world.get::<RigidBody>(id).map(|body| body.velocity)
    }

    pub fn set_velocity(&mut self, id: Entity, velocity: Vec2) {
        if let Some(mut body) = self.world.get_mut::<RigidBody>(id) {
            body.velocity = velocity;
        }
    }

    pub fn set_motion(&mut self, id: Entity, speed: f32, direction: f32) {
        if let Some(mut body) = self.world.get_mut::<RigidBody>(id) {
            body.set_motion(speed, direction);
        }
    }

    pub fn set_gravity(&mut self, id: Entity, gravity: Vec2) {
        if let Some(mut body) = self.world.get_mut::<RigidBody>(id) {
            body.gravity = gravity;
        }
    }

    pub fn depth(&self, id: Entity) -> Option<i32> {
        self.world.get::<Depth>(id).map(|depth| depth.0)
    }

    pub fn set_depth(&mut self, id: Entity, depth: i32) {
        if let Some(mut d) = self.world.get_mut::<Depth>(id) {
            d.0 = depth;
        }
    }

    pub fn role(&self, id: Entity) -> Option<Role> {
        self.world.get::<Role>(id).copied()
    }

    /// Collider bounds as of the last sync.
    pub fn bounds(&self, id: Entity) -> Option<Rectangle> {
        self.world.get::<BoxCollider>(id).map(|c| c.bounds)
    }

    pub fn set_checking(&mut self, id: Entity, checking: bool) {
        if let Some(mut collider) = self.world.get_mut::<BoxCollider>(id) {
            collider.checking = checking;
        }
    }

    pub fn health(&self, id: Entity) -> Option<i32> {
        self.world.get::<Health>(id).map(|health| health.current)
    }

    /// Subtract `amount` from `id`'s health; `None` when it has no health.
    pub fn damage(&mut self, id: Entity, amount: i32) -> Option<i32> {
        self.world
            .get_mut::<Health>(id)
            .map(|mut health| health.damage(amount))
    }

    pub fn animation(&self, id: Entity) -> Option<&Animation> {
        self.world.get::<Animation>(id)
    }

    /// Switch `id`'s animation, restarting it unless `key` is already playing.
    pub fn set_animation(&mut self, id: Entity, key: &str) {
        if let Some(mut animation) = self.world.get_mut::<Animation>(id) {
            animation.set(key);
        }
    }
}
