//! Title menu.

use glam::Vec2;

use crate::context::AppContext;
use crate::error::HookResult;
use crate::resources::input::InputAction;
use crate::resources::worldsignals::keys;
use crate::state::State;
use crate::states::{EDITOR, GAME};
use crate::surface::{Color, Surface};

#[derive(Debug, Default)]
pub struct MenuState;

impl State for MenuState {
    fn start(&mut self, _ctx: &mut AppContext) -> HookResult {
        Ok(())
    }

    fn step(&mut self, ctx: &mut AppContext, _dt: f32) -> HookResult {
        if ctx.input.just_pressed(InputAction::Confirm) {
            ctx.request_state(Some(GAME));
        } else if ctx.input.just_pressed(InputAction::Editor) {
            ctx.request_state(Some(EDITOR));
        } else if ctx.input.just_pressed(InputAction::Back) {
            ctx.signals.set_flag(keys::QUIT_GAME);
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut AppContext, surface: &mut dyn Surface, _alpha: f32) -> HookResult {
        let field = ctx.config.playfield();
        let x = field.x * 0.5;
        surface.draw_text("BLASTIUS", Vec2::new(x, field.y * 0.7), 40.0, Color::YELLOW);
        surface.draw_text("Play", Vec2::new(x, field.y * 0.5), 20.0, Color::WHITE);
        surface.draw_text("Editor", Vec2::new(x, field.y * 0.43), 20.0, Color::WHITE);
        surface.draw_text("Quit", Vec2::new(x, field.y * 0.36), 20.0, Color::WHITE);

        let high_score = ctx.signals.get_integer(keys::HIGH_SCORE).unwrap_or(0);
        surface.draw_text(
            &format!("High Score {}", high_score),
            Vec2::new(x, field.y * 0.2),
            16.0,
            Color::GRAY,
        );
        Ok(())
    }

    fn stop(&mut self, _ctx: &mut AppContext) -> HookResult {
        Ok(())
    }
}
