use bevy_ecs::prelude::{Entity, World};
use glam::Vec2;

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::depth::Depth;
use crate::components::health::Health;
use crate::components::lifecycle::Lifecycle;
use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::rigidbody::RigidBody;
use crate::components::role::Role;
use crate::components::sprite::Sprite;
use crate::entity::{BehaviorSlot, BoxedBehavior, EntityBehavior};
use crate::geometry::motion;

/// Description of an entity not yet added to a manager.
///
/// [`EntityManager::add_entity`](super::EntityManager::add_entity) consumes the
/// builder, so the same description cannot be added twice.
///
/// # Example
/// ```ignore
/// let bullet = EntityBuilder::with_behavior(Bullet)
///     .at(Vec2::new(150.0, 150.0))
///     .motion(400.0, 90.0)
///     .collider(BoxCollider::centered(8.0, 8.0))
///     .checking(true)
///     .depth(10);
/// manager.add_entity(bullet, &mut ctx)?;
/// ```
pub struct EntityBuilder {
    position: Vec2,
    body: RigidBody,
    depth: i32,
    collider: BoxCollider,
    persistent: bool,
    role: Role,
    health: Option<i32>,
    sprite: Option<Sprite>,
    animation: Option<Animation>,
    behavior: Option<BoxedBehavior>,
}

impl Default for EntityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityBuilder {
    /// Entity at the origin, at rest, with an empty non-checking collider and no hooks.
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            body: RigidBody::new(),
            depth: 0,
            collider: BoxCollider::default(),
            persistent: false,
            role: Role::Neutral,
            health: None,
            sprite: None,
            animation: None,
            behavior: None,
        }
    }

    pub fn with_behavior(behavior: impl EntityBehavior) -> Self {
        Self::new().behavior(behavior)
    }

    pub fn behavior(mut self, behavior: impl EntityBehavior) -> Self {
        self.behavior = Some(Box::new(behavior));
        self
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn position(self, x: f32, y: f32) -> Self {
        self.at(Vec2::new(x, y))
    }

    pub fn velocity(mut self, velocity: Vec2) -> Self {
        self.body.velocity = velocity;
        self
    }

    /// Velocity of `speed` toward `direction` degrees.
    pub fn motion(mut self, speed: f32, direction: f32) -> Self {
        self.body.velocity = motion(speed, direction);
        self
    }

    pub fn gravity(mut self, gravity: Vec2) -> Self {
        self.body.gravity = gravity;
        self
    }

    pub fn depth(mut self, depth: i32) -> Self {
        self.depth = depth;
        self
    }

    /// Replace the collider; its `checking` flag is kept as given.
    pub fn collider(mut self, collider: BoxCollider) -> Self {
        self.collider = collider;
        self
    }

    pub fn checking(mut self, checking: bool) -> Self {
        self.collider.checking = checking;
        self
    }

    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn health(mut self, health: i32) -> Self {
        self.health = Some(health);
        self
    }

    pub fn sprite(mut self, sprite: Sprite) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn animation(mut self, animation_key: impl Into<String>) -> Self {
        self.animation = Some(Animation::new(animation_key));
        self
    }

    /// Spawn the components into `world`. The collider bounds start synced
    /// to the initial position.
    pub(crate) fn spawn(self, world: &mut World) -> Entity {
        let mut collider = self.collider;
        collider.sync(self.position);

        let mut entity = world.spawn((
            MapPosition { pos: self.position },
            self.body,
            collider,
            Depth(self.depth),
            Lifecycle::default(),
            self.role,
        ));
        if self.persistent {
            entity.insert(Persistent);
        }
        if let Some(health) = self.health {
            entity.insert(Health::new(health));
        }
        if let Some(sprite) = self.sprite {
            entity.insert(sprite);
        }
        if let Some(animation) = self.animation {
            entity.insert(animation);
        }
        if let Some(behavior) = self.behavior {
            entity.insert(BehaviorSlot(Some(behavior)));
        }
        entity.id()
    }
}
