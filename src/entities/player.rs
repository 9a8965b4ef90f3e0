//! The player ship.
//!
//! Steered with the directional actions, fires with `Fire`. Power-ups raise
//! the power level, which widens the fire pattern. Touching an enemy or an
//! enemy projectile plays the `die` animation; once it finishes the ship is
//! disposed and a [`GameOverTimer`](super::gameovertimer::GameOverTimer)
//! takes over.

use arrayvec::ArrayVec;
use bevy_ecs::prelude::Entity;
use glam::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::role::{Faction, Role};
use crate::entities::bullet::Bullet;
use crate::entities::gameovertimer::GameOverTimer;
use crate::entities::tracer::Tracer;
use crate::entity::{EntityBehavior, EntityBuilder, EntityContext};
use crate::error::HookResult;
use crate::geometry::approach_angle;
use crate::resources::input::InputAction;
use crate::states::game::add_score;

pub const MOVE_SPEED: f32 = 300.0;
/// Closest the ship gets to a playfield edge.
pub const BORDER: f32 = 25.0;
pub const BULLET_DELAY: f32 = 0.3;
pub const BULLET_SPEED: f32 = 400.0;
pub const MAX_POWER_LEVEL: u8 = 7;
const GAME_OVER_DELAY: f32 = 2.0;

const ANIM_NORMAL: &str = "player/normal";
const ANIM_LEFT: &str = "player/left";
const ANIM_RIGHT: &str = "player/right";
const ANIM_DIE: &str = "player/die";

/// One projectile of a volley, relative to the ship.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shot {
    Bullet { direction: f32, offset: Vec2 },
    Tracer { offset: Vec2 },
}

const fn bullet(direction: f32, x: f32, y: f32) -> Shot {
    Shot::Bullet {
        direction,
        offset: Vec2::new(x, y),
    }
}

const fn tracer(x: f32) -> Shot {
    Shot::Tracer {
        offset: Vec2::new(x, 0.0),
    }
}

const LEVEL_1: &[Shot] = &[bullet(90.0, 0.0, 0.0)];

const LEVEL_2: &[Shot] = &[bullet(90.0, -10.0, 0.0), bullet(90.0, 10.0, 0.0)];

const LEVEL_3: &[Shot] = &[
    bullet(75.0, 0.0, 0.0),
    bullet(90.0, -10.0, 0.0),
    bullet(90.0, 10.0, 0.0),
    bullet(105.0, 0.0, 0.0),
];

const LEVEL_4: &[Shot] = &[
    bullet(65.0, 0.0, 0.0),
    bullet(270.0, 0.0, 0.0),
    bullet(115.0, 0.0, 0.0),
    tracer(-10.0),
    tracer(10.0),
];

const LEVEL_5: &[Shot] = &[
    bullet(65.0, 0.0, 0.0),
    bullet(270.0, 0.0, 0.0),
    bullet(115.0, 0.0, 0.0),
    bullet(10.0, 0.0, 0.0),
    bullet(170.0, 0.0, 0.0),
    tracer(-10.0),
    tracer(10.0),
];

const LEVEL_6: &[Shot] = &[
    bullet(55.0, 0.0, 0.0),
    bullet(270.0, -10.0, 0.0),
    bullet(270.0, 10.0, 0.0),
    bullet(125.0, 0.0, 0.0),
    bullet(10.0, 0.0, 0.0),
    bullet(170.0, 0.0, 0.0),
    bullet(90.0, -20.0, -10.0),
    bullet(90.0, -20.0, 10.0),
    bullet(90.0, 20.0, -10.0),
    bullet(90.0, 20.0, 10.0),
    tracer(-10.0),
    tracer(10.0),
];

const LEVEL_7: &[Shot] = &[
    bullet(55.0, 0.0, 0.0),
    bullet(270.0, -10.0, 0.0),
    bullet(270.0, 10.0, 0.0),
    bullet(125.0, 0.0, 0.0),
    bullet(10.0, 0.0, 0.0),
    bullet(170.0, 0.0, 0.0),
    bullet(90.0, -20.0, -10.0),
    bullet(90.0, -20.0, 10.0),
    bullet(90.0, 20.0, -10.0),
    bullet(90.0, 20.0, 10.0),
    tracer(-10.0),
    tracer(10.0),
    tracer(-40.0),
    tracer(40.0),
];

/// Largest volley, fired at the top power level.
pub const MAX_VOLLEY: usize = 14;

/// Volley fired at `level` (clamped to 1..=7).
pub fn volley(level: u8) -> ArrayVec<Shot, MAX_VOLLEY> {
    let table = match level.clamp(1, MAX_POWER_LEVEL) {
        1 => LEVEL_1,
        2 => LEVEL_2,
        3 => LEVEL_3,
        4 => LEVEL_4,
        5 => LEVEL_5,
        6 => LEVEL_6,
        _ => LEVEL_7,
    };
    table.iter().copied().collect()
}

#[derive(Debug, Clone)]
pub struct Player {
    bullet_timer: f32,
    power_level: u8,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            bullet_timer: BULLET_DELAY,
            power_level: 1,
        }
    }

    pub fn power_level(&self) -> u8 {
        self.power_level
    }

    /// Builder for a player ship at `position`.
    pub fn spawn(position: Vec2) -> EntityBuilder {
        EntityBuilder::with_behavior(Self::new())
            .at(position)
            .depth(-10)
            .role(Role::Player)
            .collider(BoxCollider::centered(30.0, 30.0))
            .checking(true)
            .animation(ANIM_NORMAL)
    }

    fn is_dying(ctx: &EntityContext<'_>) -> bool {
        ctx.animation_key() == Some(ANIM_DIE)
    }

    fn steer(&self, ctx: &mut EntityContext<'_>) {
        let input = &ctx.app().input;
        let left = input.is_down(InputAction::Left);
        let right = input.is_down(InputAction::Right);
        let up = input.is_down(InputAction::Up);
        let down = input.is_down(InputAction::Down);

        if left {
            ctx.set_motion(MOVE_SPEED, 180.0);
            ctx.set_animation(ANIM_LEFT);
        } else if right {
            ctx.set_motion(MOVE_SPEED, 0.0);
            ctx.set_animation(ANIM_RIGHT);
        } else {
            ctx.set_velocity(Vec2::ZERO);
            ctx.set_animation(ANIM_NORMAL);
        }

        let horizontal = left || right;
        if up {
            let direction = if horizontal {
                approach_angle(ctx.direction(), 90.0, 45.0)
            } else {
                90.0
            };
            ctx.set_motion(MOVE_SPEED, direction);
        } else if down {
            let direction = if horizontal {
                approach_angle(ctx.direction(), 270.0, 45.0)
            } else {
                270.0
            };
            ctx.set_motion(MOVE_SPEED, direction);
        }
    }

    /// Keep the next integration step inside the playfield borders.
    fn clamp_to_playfield(ctx: &mut EntityContext<'_>, dt: f32) {
        let field = ctx.playfield();
        let mut position = ctx.position();
        let mut velocity = ctx.velocity();

        let next_x = position.x + velocity.x * dt;
        if next_x - BORDER < 0.0 {
            position.x = BORDER;
            velocity.x = 0.0;
        } else if next_x + BORDER > field.x {
            position.x = field.x - BORDER;
            velocity.x = 0.0;
        }

        let next_y = position.y + velocity.y * dt;
        if next_y - BORDER < 0.0 {
            position.y = BORDER;
            velocity.y = 0.0;
        } else if next_y + BORDER > field.y {
            position.y = field.y - BORDER;
            velocity.y = 0.0;
        }

        ctx.set_position(position);
        ctx.set_velocity(velocity);
    }

    fn fire(&self, ctx: &mut EntityContext<'_>) -> HookResult {
        let pitch = 0.9 + fastrand::f32() * 0.3;
        ctx.play_sound("bullet 1", 0.05, pitch)?;

        let origin = ctx.position();
        for shot in volley(self.power_level) {
            let builder = match shot {
                Shot::Bullet { direction, offset } => {
                    Bullet::spawn(origin + offset, BULLET_SPEED, direction, Faction::Player)
                }
                Shot::Tracer { offset } => Tracer::spawn(origin + offset),
            };
            ctx.add_entity(builder)?;
        }
        Ok(())
    }

    fn die(ctx: &mut EntityContext<'_>) -> HookResult {
        ctx.play_sound("explosion 2", 0.5, 1.0)?;
        ctx.set_velocity(Vec2::ZERO);
        ctx.set_animation(ANIM_DIE);
        Ok(())
    }
}

impl EntityBehavior for Player {
    fn step(&mut self, ctx: &mut EntityContext<'_>, dt: f32) -> HookResult {
        if Self::is_dying(ctx) {
            if ctx.animation_finished() {
                ctx.dispose()?;
                ctx.add_entity(GameOverTimer::spawn(GAME_OVER_DELAY))?;
            }
            return Ok(());
        }

        self.steer(ctx);
        Self::clamp_to_playfield(ctx, dt);

        self.bullet_timer -= dt;
        if self.bullet_timer <= 0.0 && ctx.app().input.is_down(InputAction::Fire) {
            self.bullet_timer = BULLET_DELAY;
            self.fire(ctx)?;
        }
        Ok(())
    }

    fn on_collision(&mut self, ctx: &mut EntityContext<'_>, other: Entity) -> HookResult {
        if Self::is_dying(ctx) {
            return Ok(());
        }
        match ctx.role_of(other) {
            Some(role) if role.is_hostile_to_player() => {
                ctx.dispose_entity(other)?;
                Self::die(ctx)?;
            }
            Some(Role::PowerUp) => {
                ctx.play_sound("powerup", 0.5, 1.0)?;
                ctx.dispose_entity(other)?;
                if self.power_level < MAX_POWER_LEVEL {
                    self.power_level += 1;
                } else {
                    add_score(&mut ctx.app().signals, 100);
                }
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(level: u8) -> (usize, usize) {
        let shots = volley(level);
        let tracers = shots
            .iter()
            .filter(|shot| matches!(shot, Shot::Tracer { .. }))
            .count();
        (shots.len() - tracers, tracers)
    }

    #[test]
    fn test_volley_sizes_per_level() {
        assert_eq!(count(1), (1, 0));
        assert_eq!(count(2), (2, 0));
        assert_eq!(count(3), (4, 0));
        assert_eq!(count(4), (3, 2));
        assert_eq!(count(5), (5, 2));
        assert_eq!(count(6), (10, 2));
        assert_eq!(count(7), (10, 4));
    }

    #[test]
    fn test_volley_level_is_clamped() {
        assert_eq!(volley(0), volley(1));
        assert_eq!(volley(9), volley(7));
    }

    #[test]
    fn test_top_level_has_outer_tracers() {
        let shots = volley(7);
        assert!(shots.contains(&Shot::Tracer {
            offset: Vec2::new(-40.0, 0.0)
        }));
        assert!(shots.contains(&Shot::Tracer {
            offset: Vec2::new(40.0, 0.0)
        }));
    }

    #[test]
    fn test_new_player_starts_at_level_one() {
        assert_eq!(Player::new().power_level(), 1);
    }
}
