//! Formation enemies.
//!
//! An enemy sinks down the playfield at a fixed speed. Its kind decides
//! health, coin value and whether it shoots at the player; its pattern only
//! selects the animation. Hits are taken from player weapons once the enemy
//! has entered the playfield, at most one per step.

use bevy_ecs::prelude::Entity;
use glam::Vec2;
use log::debug;
use smallvec::SmallVec;

use crate::components::boxcollider::BoxCollider;
use crate::components::role::{Faction, Role};
use crate::entities::bullet::Bullet;
use crate::entities::powerup::PowerUp;
use crate::entity::{EntityBehavior, EntityBuilder, EntityContext};
use crate::error::HookResult;
use crate::geometry::direction_of;
use crate::resources::formation::{EntityKind, PatternKind};
use crate::resources::worldsignals::keys;
use crate::states::game::add_score;

pub const SPEED: f32 = 100.0;
pub const BULLET_SPEED: f32 = 100.0;
pub const SIZE: f32 = 40.0;
pub const BULLET_DAMAGE: i32 = 100;
pub const TRACER_DAMAGE: i32 = 50;
pub const COIN_VALUE: i32 = 10;
pub const POWERUP_CHANCE: f32 = 0.02;

/// Per-kind tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub health: i32,
    pub coins: i32,
    /// Seconds between shots; `None` for enemies that never fire.
    pub fire_interval: Option<f32>,
}

pub fn stats(kind: EntityKind) -> EnemyStats {
    let (health, coins, fire_interval) = match kind {
        EntityKind::Diamond => (200, 2, None),
        EntityKind::Heptagon => (200, 3, Some(2.0)),
        EntityKind::Rectangle => (500, 5, None),
        EntityKind::Square => (100, 2, None),
        EntityKind::Star => (300, 3, Some(1.0)),
        EntityKind::Triangle => (100, 1, None),
        EntityKind::U => (100, 5, Some(0.5)),
    };
    EnemyStats {
        health,
        coins,
        fire_interval,
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    kind: EntityKind,
    coins: i32,
    fire_interval: Option<f32>,
    bullet_timer: f32,
    hit_this_step: bool,
    tracer_hits: SmallVec<[Entity; 8]>,
}

impl Enemy {
    pub fn new(kind: EntityKind) -> Self {
        let stats = stats(kind);
        Self {
            kind,
            coins: stats.coins,
            fire_interval: stats.fire_interval,
            bullet_timer: stats.fire_interval.unwrap_or(0.0),
            hit_this_step: false,
            tracer_hits: SmallVec::new(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Builder for an enemy at `position`, health scaled by `health_multiplier`.
    pub fn spawn(
        kind: EntityKind,
        pattern: PatternKind,
        position: Vec2,
        health_multiplier: f32,
    ) -> EntityBuilder {
        let health = (stats(kind).health as f32 * health_multiplier) as i32;
        EntityBuilder::with_behavior(Self::new(kind))
            .at(position)
            .motion(SPEED, 270.0)
            .role(Role::Enemy)
            .health(health)
            .collider(BoxCollider::centered(SIZE, SIZE))
            .checking(true)
            .animation(pattern.animation_key())
    }

    fn fire(&mut self, ctx: &mut EntityContext<'_>, dt: f32) -> HookResult {
        let Some(interval) = self.fire_interval else {
            return Ok(());
        };
        self.bullet_timer -= dt;
        if self.bullet_timer >= 0.0 {
            return Ok(());
        }
        self.bullet_timer = interval;

        let player = ctx.app().signals.get_entity(keys::PLAYER);
        let Some(target) = player.and_then(|player| ctx.position_of(player)) else {
            return Ok(());
        };
        let origin = ctx.bounds().center();
        let direction = direction_of(target - origin);
        ctx.add_entity(Bullet::spawn(origin, BULLET_SPEED, direction, Faction::Enemy))?;
        Ok(())
    }

    fn hurt(&mut self, ctx: &mut EntityContext<'_>, amount: i32) -> HookResult {
        self.hit_this_step = true;
        let remaining = ctx.take_damage(amount).unwrap_or(0);
        if remaining <= 0 {
            self.explode(ctx)?;
        }
        Ok(())
    }

    fn explode(&mut self, ctx: &mut EntityContext<'_>) -> HookResult {
        ctx.dispose()?;
        let sound = if fastrand::bool() {
            "explosion 1"
        } else {
            "explosion 3"
        };
        ctx.play_sound(sound, 0.5, 1.0)?;
        add_score(&mut ctx.app().signals, self.coins * COIN_VALUE);
        debug!("{} destroyed, {} coins", self.kind.name(), self.coins);

        if fastrand::f32() < POWERUP_CHANCE {
            let center = ctx.bounds().center();
            ctx.add_entity(PowerUp::spawn(center))?;
        }
        Ok(())
    }
}

impl EntityBehavior for Enemy {
    fn step(&mut self, ctx: &mut EntityContext<'_>, dt: f32) -> HookResult {
        self.hit_this_step = false;

        if ctx.bounds().max().y < 0.0 {
            ctx.dispose()?;
            return Ok(());
        }
        self.fire(ctx, dt)
    }

    fn on_collision(&mut self, ctx: &mut EntityContext<'_>, other: Entity) -> HookResult {
        if self.hit_this_step {
            return Ok(());
        }
        let field = ctx.playfield();
        if ctx.bounds().center().y >= field.y {
            return Ok(());
        }

        let Some(role) = ctx.role_of(other) else {
            return Ok(());
        };
        if !role.is_player_weapon() {
            return Ok(());
        }
        if role == Role::Tracer {
            if self.tracer_hits.contains(&other) {
                return Ok(());
            }
            self.tracer_hits.push(other);
            self.hurt(ctx, TRACER_DAMAGE)
        } else {
            ctx.dispose_entity(other)?;
            self.hurt(ctx, BULLET_DAMAGE)
        }
    }
}
