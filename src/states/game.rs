//! Active gameplay.
//!
//! Owns the [`EntityManager`] for the duration of one activation: it is
//! created in `start` and dropped in `stop`. Waves come from the
//! [`FormationStore`](crate::resources::formation::FormationStore) on a timer
//! that shortens over time, and enemies get tougher once the score passes a
//! threshold.

use glam::Vec2;
use log::{debug, info, warn};

use crate::context::AppContext;
use crate::entities::enemy::Enemy;
use crate::entities::player::Player;
use crate::entities::powerup::PowerUp;
use crate::entity::{EntityManager, FaultPolicy};
use crate::error::HookResult;
use crate::resources::formation::SelectionPolicy;
use crate::resources::input::InputAction;
use crate::resources::worldsignals::{WorldSignals, keys};
use crate::state::State;
use crate::states::MENU;
use crate::surface::{Color, Surface};

pub const PLAYER_START: Vec2 = Vec2::new(150.0, 150.0);
/// Seconds between the first waves.
pub const FORMATION_TIME: f32 = 5.0;
/// How fast the wave interval shrinks, in seconds per second.
pub const FORMATION_TIME_DECAY: f32 = 0.009;
pub const HEALTH_MULTIPLIER_INCREASE: f32 = 0.01;
/// Score above which enemy health starts growing.
pub const MIN_SCORE_INCREASE_HEALTH: i32 = 100;

/// Add `amount` to the score and raise the high score if it was beaten.
pub fn add_score(signals: &mut WorldSignals, amount: i32) -> i32 {
    let score = signals.add_integer(keys::SCORE, amount);
    let high_score = signals.get_integer(keys::HIGH_SCORE).unwrap_or(0);
    if score > high_score {
        signals.set_integer(keys::HIGH_SCORE, score);
    }
    score
}

pub struct GameState {
    entities: Option<EntityManager>,
    fault_policy: FaultPolicy,
    policy: SelectionPolicy,
    formation_time: f32,
    formation_timer: f32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            entities: None,
            fault_policy: FaultPolicy::default(),
            policy: SelectionPolicy::default(),
            formation_time: FORMATION_TIME,
            formation_timer: FORMATION_TIME,
        }
    }

    pub fn with_fault_policy(mut self, fault_policy: FaultPolicy) -> Self {
        self.fault_policy = fault_policy;
        self
    }

    pub fn with_selection(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The live population, while the state is active.
    pub fn entities(&self) -> Option<&EntityManager> {
        self.entities.as_ref()
    }

    pub fn formation_time(&self) -> f32 {
        self.formation_time
    }

    pub fn formation_timer(&self) -> f32 {
        self.formation_timer
    }

    /// Spawn the next wave above the top edge of the playfield.
    pub fn spawn_formation(&mut self, ctx: &mut AppContext) -> HookResult {
        let Some(entities) = self.entities.as_mut() else {
            return Ok(());
        };
        let records = match ctx.formations.next_wave(&self.policy) {
            Ok(records) => records,
            Err(err) => {
                warn!("Could not pick a formation: {}", err);
                return Ok(());
            }
        };

        let height = ctx.config.playfield().y;
        let multiplier = ctx
            .signals
            .get_scalar(keys::ENEMY_HEALTH_MULTIPLIER)
            .unwrap_or(1.0);
        debug!("Spawning wave of {} enemies", records.len());
        for record in records {
            let position = Vec2::new(record.x, record.y + height);
            entities.add_entity(
                Enemy::spawn(record.entity, record.pattern, position, multiplier),
                ctx,
            )?;
        }
        Ok(())
    }
}

impl State for GameState {
    fn start(&mut self, ctx: &mut AppContext) -> HookResult {
        ctx.signals.set_integer(keys::SCORE, 0);
        if ctx.signals.get_integer(keys::HIGH_SCORE).is_none() {
            ctx.signals.set_integer(keys::HIGH_SCORE, 0);
        }
        ctx.signals.set_scalar(keys::ENEMY_HEALTH_MULTIPLIER, 1.0);

        self.formation_time = FORMATION_TIME;
        self.formation_timer = FORMATION_TIME;

        let mut entities = EntityManager::with_fault_policy(self.fault_policy);
        let player = entities.add_entity(Player::spawn(PLAYER_START), ctx)?;
        ctx.signals.set_entity(keys::PLAYER, player);

        let field = ctx.config.playfield();
        let position = Vec2::new(fastrand::f32() * field.x, fastrand::f32() * field.y);
        entities.add_entity(PowerUp::spawn(position), ctx)?;

        self.entities = Some(entities);
        info!("Game started");
        Ok(())
    }

    fn step(&mut self, ctx: &mut AppContext, dt: f32) -> HookResult {
        if let Some(entities) = self.entities.as_mut() {
            entities.step(dt, ctx)?;
        }

        self.formation_time -= FORMATION_TIME_DECAY * dt;
        self.formation_timer -= dt;
        if self.formation_timer < 0.0 {
            self.spawn_formation(ctx)?;
            self.formation_timer = self.formation_time;
        }

        if ctx.signals.get_integer(keys::SCORE).unwrap_or(0) > MIN_SCORE_INCREASE_HEALTH {
            let multiplier = ctx
                .signals
                .get_scalar(keys::ENEMY_HEALTH_MULTIPLIER)
                .unwrap_or(1.0);
            ctx.signals.set_scalar(
                keys::ENEMY_HEALTH_MULTIPLIER,
                multiplier + HEALTH_MULTIPLIER_INCREASE * dt,
            );
        }

        if ctx.input.is_down(InputAction::Back) {
            ctx.request_state(Some(MENU));
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut AppContext, surface: &mut dyn Surface, alpha: f32) -> HookResult {
        if let Some(entities) = self.entities.as_mut() {
            entities.draw(surface, alpha, ctx)?;
        }
        let score = ctx.signals.get_integer(keys::SCORE).unwrap_or(0);
        let field = ctx.config.playfield();
        surface.draw_text(
            &score.to_string(),
            Vec2::new(field.x * 0.5, field.y - 25.0),
            20.0,
            Color::WHITE,
        );
        Ok(())
    }

    fn stop(&mut self, ctx: &mut AppContext) -> HookResult {
        if let Some(mut entities) = self.entities.take() {
            entities.clear(true, ctx)?;
        }
        ctx.signals.remove_entity(keys::PLAYER);
        info!("Game stopped");
        Ok(())
    }
}
