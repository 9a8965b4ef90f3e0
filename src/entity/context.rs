use bevy_ecs::prelude::Entity;
use glam::Vec2;

use crate::components::role::Role;
use crate::context::AppContext;
use crate::entity::{EntityBuilder, EntityManager};
use crate::error::{EngineError, HookResult};
use crate::geometry::{Rectangle, direction_of};

/// What a hook sees: its own entity, the rest of the population and the
/// application context.
///
/// Accessors without an entity argument act on the hook's own entity. The
/// `*_of` variants read another entity and return `None` once it is gone.
pub struct EntityContext<'a> {
    id: Entity,
    manager: &'a mut EntityManager,
    app: &'a mut AppContext,
}

impl<'a> EntityContext<'a> {
    pub(crate) fn new(id: Entity, manager: &'a mut EntityManager, app: &'a mut AppContext) -> Self {
        Self { id, manager, app }
    }

    pub fn id(&self) -> Entity {
        self.id
    }

    pub fn app(&mut self) -> &mut AppContext {
        &mut *self.app
    }

    /// Read-only view of the whole population.
    pub fn manager(&self) -> &EntityManager {
        &*self.manager
    }

    /// Playfield size from the configuration.
    pub fn playfield(&self) -> Vec2 {
        self.app.config.playfield()
    }

    // ==================== OWN ENTITY ====================

    pub fn position(&self) -> Vec2 {
        self.manager.position(self.id).unwrap_or_default()
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.manager.set_position(self.id, position);
    }

    pub fn velocity(&self) -> Vec2 {
        self.manager.velocity(self.id).unwrap_or_default()
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.manager.set_velocity(self.id, velocity);
    }

    pub fn set_motion(&mut self, speed: f32, direction: f32) {
        self.manager.set_motion(self.id, speed, direction);
    }

    /// Direction of travel in degrees.
    pub fn direction(&self) -> f32 {
        direction_of(self.velocity())
    }

    pub fn set_depth(&mut self, depth: i32) {
        self.manager.set_depth(self.id, depth);
    }

    pub fn bounds(&self) -> Rectangle {
        self.manager.bounds(self.id).unwrap_or_default()
    }

    pub fn set_checking(&mut self, checking: bool) {
        self.manager.set_checking(self.id, checking);
    }

    pub fn health(&self) -> Option<i32> {
        self.manager.health(self.id)
    }

    /// Subtract `amount` from this entity's health and return what is left.
    pub fn take_damage(&mut self, amount: i32) -> Option<i32> {
        self.manager.damage(self.id, amount)
    }

    pub fn is_destroyed(&self) -> bool {
        self.manager.is_destroyed(self.id)
    }

    /// Dispose this entity. The destroy hook runs once the current hook returns.
    pub fn dispose(&mut self) -> HookResult {
        self.manager.dispose(self.id, self.app).map(|_| ())
    }

    pub fn animation_key(&self) -> Option<&str> {
        self.manager
            .animation(self.id)
            .map(|animation| animation.animation_key.as_str())
    }

    /// A non-looping animation reached its last frame.
    pub fn animation_finished(&self) -> bool {
        self.manager
            .animation(self.id)
            .is_some_and(|animation| animation.finished)
    }

    pub fn set_animation(&mut self, key: &str) {
        self.manager.set_animation(self.id, key);
    }

    // ==================== OTHER ENTITIES ====================

    pub fn role_of(&self, other: Entity) -> Option<Role> {
        self.manager.role(other)
    }

    pub fn position_of(&self, other: Entity) -> Option<Vec2> {
        if self.manager.is_destroyed(other) {
            return None;
        }
        self.manager.position(other)
    }

    pub fn is_destroyed_entity(&self, other: Entity) -> bool {
        self.manager.is_destroyed(other)
    }

    pub fn dispose_entity(&mut self, other: Entity) -> HookResult {
        self.manager.dispose(other, self.app).map(|_| ())
    }

    /// Subtract `amount` from `other`'s health and return what is left.
    pub fn damage(&mut self, other: Entity, amount: i32) -> Option<i32> {
        self.manager.damage(other, amount)
    }

    /// Add a new entity; its `create` hook runs before this returns.
    pub fn add_entity(&mut self, builder: EntityBuilder) -> Result<Entity, EngineError> {
        self.manager.add_entity(builder, self.app)
    }

    // ==================== APPLICATION ====================

    pub fn play_sound(&mut self, key: &str, volume: f32, pitch: f32) -> HookResult {
        self.app.play_sound(key, volume, pitch)?;
        Ok(())
    }

    pub fn request_state(&mut self, name: Option<&str>) {
        self.app.request_state(name);
    }
}
