//! Drifting power-up. Bounces off the playfield edges a few times, then
//! leaves.

use glam::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::role::Role;
use crate::entities::bullet::out_of_field;
use crate::entity::{EntityBehavior, EntityBuilder, EntityContext};
use crate::error::HookResult;

pub const SPEED: f32 = 200.0;
pub const MAX_BOUNCES: u32 = 3;

#[derive(Debug, Clone, Default)]
pub struct PowerUp {
    bounces: u32,
}

impl PowerUp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounces(&self) -> u32 {
        self.bounces
    }

    /// Power-up at `position` heading in a random direction.
    pub fn spawn(position: Vec2) -> EntityBuilder {
        Self::spawn_toward(position, fastrand::f32() * 360.0)
    }

    pub fn spawn_toward(position: Vec2, direction: f32) -> EntityBuilder {
        EntityBuilder::with_behavior(Self::new())
            .at(position)
            .motion(SPEED, direction)
            .role(Role::PowerUp)
            .collider(BoxCollider::centered(24.0, 24.0))
            .checking(true)
            .animation("powerup/spin")
    }

    /// Reflect `position`/`velocity` off the edges of `field`, one bounce per
    /// axis at most.
    fn bounce(&mut self, position: &mut Vec2, velocity: &mut Vec2, field: Vec2) {
        if position.x < 0.0 {
            position.x = 0.0;
            velocity.x = -velocity.x;
            self.bounces += 1;
        } else if position.x > field.x {
            position.x = field.x;
            velocity.x = -velocity.x;
            self.bounces += 1;
        }

        if position.y < 0.0 {
            position.y = 0.0;
            velocity.y = -velocity.y;
            self.bounces += 1;
        } else if position.y > field.y {
            position.y = field.y;
            velocity.y = -velocity.y;
            self.bounces += 1;
        }
    }
}

impl EntityBehavior for PowerUp {
    fn step(&mut self, ctx: &mut EntityContext<'_>, _dt: f32) -> HookResult {
        let field = ctx.playfield();
        let mut position = ctx.position();

        if self.bounces >= MAX_BOUNCES {
            if out_of_field(position, field) {
                ctx.dispose()?;
            }
            return Ok(());
        }

        let mut velocity = ctx.velocity();
        self.bounce(&mut position, &mut velocity, field);
        ctx.set_position(position);
        ctx.set_velocity(velocity);
        Ok(())
    }
}
