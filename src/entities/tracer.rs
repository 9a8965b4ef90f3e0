//! Player beam: a tall column above the ship that lives for one animation.
//!
//! Each enemy takes tracer damage at most once per tracer; the enemy keeps
//! track of which tracers already hit it.

use glam::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::role::Role;
use crate::entity::{EntityBehavior, EntityBuilder, EntityContext};
use crate::error::HookResult;

pub const WIDTH: f32 = 12.0;
pub const LENGTH: f32 = 600.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct Tracer;

impl Tracer {
    pub fn spawn(position: Vec2) -> EntityBuilder {
        EntityBuilder::with_behavior(Tracer)
            .at(position)
            .depth(10)
            .role(Role::Tracer)
            .collider(BoxCollider::new(WIDTH, LENGTH).with_offset(Vec2::new(-WIDTH * 0.5, 0.0)))
            .checking(true)
            .animation("tracer/blue")
    }
}

impl EntityBehavior for Tracer {
    fn step(&mut self, ctx: &mut EntityContext<'_>, _dt: f32) -> HookResult {
        if ctx.animation_finished() {
            ctx.dispose()?;
        }
        Ok(())
    }
}
