//! Straight-flying projectile shared by the player and the enemies.

use glam::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::role::{Faction, Role};
use crate::entity::{EntityBehavior, EntityBuilder, EntityContext};
use crate::error::HookResult;

/// Distance past a playfield edge at which a bullet is dropped.
pub const BORDER: f32 = 50.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct Bullet;

impl Bullet {
    /// Bullet owned by `faction`, flying at `speed` toward `direction` degrees.
    pub fn spawn(position: Vec2, speed: f32, direction: f32, faction: Faction) -> EntityBuilder {
        let animation = match faction {
            Faction::Player => "blast/blue",
            Faction::Enemy => "blast/red",
        };
        EntityBuilder::with_behavior(Bullet)
            .at(position)
            .motion(speed, direction)
            .depth(10)
            .role(Role::Projectile { faction })
            .collider(BoxCollider::centered(8.0, 8.0))
            .checking(true)
            .animation(animation)
    }
}

/// `position` is more than `BORDER` units outside the `field` rectangle.
pub fn out_of_field(position: Vec2, field: Vec2) -> bool {
    position.x + BORDER < 0.0
        || position.x - BORDER > field.x
        || position.y + BORDER < 0.0
        || position.y - BORDER > field.y
}

impl EntityBehavior for Bullet {
    fn step(&mut self, ctx: &mut EntityContext<'_>, _dt: f32) -> HookResult {
        if out_of_field(ctx.position(), ctx.playfield()) {
            ctx.dispose()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_field_tolerates_border() {
        let field = Vec2::new(800.0, 600.0);
        assert!(!out_of_field(Vec2::new(-49.0, 300.0), field));
        assert!(out_of_field(Vec2::new(-51.0, 300.0), field));
        assert!(!out_of_field(Vec2::new(400.0, 649.0), field));
        assert!(out_of_field(Vec2::new(400.0, 651.0), field));
        assert!(out_of_field(Vec2::new(851.0, 0.0), field));
    }
}
