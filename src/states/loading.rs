//! Waits for the asset registry, then moves on after a short delay.

use log::info;

use crate::context::AppContext;
use crate::error::HookResult;
use crate::state::State;
use crate::surface::{Color, Surface};

/// Seconds between the assets becoming ready and the transition.
pub const LOADING_DELAY: f32 = 1.0;

pub struct LoadingState {
    next_state: Option<String>,
    countdown: Option<f32>,
}

impl LoadingState {
    pub fn new(next_state: Option<&str>) -> Self {
        Self {
            next_state: next_state.map(str::to_string),
            countdown: None,
        }
    }

    pub fn next_state(&self) -> Option<&str> {
        self.next_state.as_deref()
    }

    pub fn set_next_state(&mut self, next_state: Option<&str>) {
        self.next_state = next_state.map(str::to_string);
    }
}

impl State for LoadingState {
    fn start(&mut self, _ctx: &mut AppContext) -> HookResult {
        self.countdown = None;
        Ok(())
    }

    fn step(&mut self, ctx: &mut AppContext, dt: f32) -> HookResult {
        match self.countdown.as_mut() {
            None => {
                if ctx.assets.is_ready() {
                    info!("Assets ready");
                    self.countdown = Some(LOADING_DELAY);
                }
            }
            Some(remaining) => {
                *remaining -= dt;
                if *remaining <= 0.0 && self.next_state.is_some() {
                    ctx.request_state(self.next_state.as_deref());
                }
            }
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut AppContext, surface: &mut dyn Surface, _alpha: f32) -> HookResult {
        let center = ctx.config.playfield() * 0.5;
        surface.draw_text("Loading...", center, 20.0, Color::WHITE);
        Ok(())
    }

    fn stop(&mut self, _ctx: &mut AppContext) -> HookResult {
        Ok(())
    }
}
