//! Score summary shown after the player ship is lost.

use glam::Vec2;

use crate::context::AppContext;
use crate::error::HookResult;
use crate::resources::input::InputAction;
use crate::resources::worldsignals::keys;
use crate::state::State;
use crate::states::MENU;
use crate::surface::{Color, Surface};

#[derive(Debug, Default)]
pub struct GameOverState {
    score: i32,
    high_score: i32,
}

impl GameOverState {
    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn high_score(&self) -> i32 {
        self.high_score
    }
}

impl State for GameOverState {
    fn start(&mut self, ctx: &mut AppContext) -> HookResult {
        self.score = ctx.signals.get_integer(keys::FINAL_SCORE).unwrap_or(0);
        self.high_score = ctx
            .signals
            .get_integer(keys::HIGH_SCORE)
            .unwrap_or(0)
            .max(self.score);
        Ok(())
    }

    fn step(&mut self, ctx: &mut AppContext, _dt: f32) -> HookResult {
        if ctx.input.just_pressed(InputAction::Fire) {
            ctx.request_state(Some(MENU));
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut AppContext, surface: &mut dyn Surface, _alpha: f32) -> HookResult {
        let field = ctx.config.playfield();
        let x = field.x * 0.5;
        surface.draw_text("Game Over", Vec2::new(x, field.y * 0.7), 40.0, Color::RED);
        surface.draw_text(
            &format!("Score {}", self.score),
            Vec2::new(x, field.y * 0.5),
            20.0,
            Color::WHITE,
        );
        surface.draw_text(
            &format!("High Score {}", self.high_score),
            Vec2::new(x, field.y * 0.4),
            20.0,
            Color::WHITE,
        );
        surface.draw_text(
            "Press fire to return to menu!",
            Vec2::new(x, field.y * 0.25),
            16.0,
            Color::GRAY,
        );
        Ok(())
    }

    fn stop(&mut self, _ctx: &mut AppContext) -> HookResult {
        Ok(())
    }
}
