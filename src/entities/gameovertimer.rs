//! Invisible countdown started when the player ship is gone.

use crate::entity::{EntityBehavior, EntityBuilder, EntityContext};
use crate::error::HookResult;
use crate::resources::worldsignals::keys;
use crate::states::GAME_OVER;

#[derive(Debug, Clone)]
pub struct GameOverTimer {
    remaining: f32,
}

impl GameOverTimer {
    pub fn new(seconds: f32) -> Self {
        Self { remaining: seconds }
    }

    pub fn spawn(seconds: f32) -> EntityBuilder {
        EntityBuilder::with_behavior(Self::new(seconds))
    }
}

impl EntityBehavior for GameOverTimer {
    fn step(&mut self, ctx: &mut EntityContext<'_>, dt: f32) -> HookResult {
        self.remaining -= dt;
        if self.remaining < 0.0 {
            ctx.dispose()?;
            let signals = &mut ctx.app().signals;
            let score = signals.get_integer(keys::SCORE).unwrap_or(0);
            signals.set_integer(keys::FINAL_SCORE, score);
            ctx.request_state(Some(GAME_OVER));
        }
        Ok(())
    }
}
