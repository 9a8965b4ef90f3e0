//! Application modes.
//!
//! A [`State`] owns one top-level mode of the program (loading, menu,
//! gameplay, game over, editor). The [`StateManager`](manager::StateManager)
//! keeps them by name and forwards the frame to the one that is loaded.
//!
//! `start` and `stop` bracket one activation: every `start` is matched by
//! exactly one `stop` before the state is started again.

pub mod manager;

use crate::context::AppContext;
use crate::error::HookResult;
use crate::surface::Surface;

pub use manager::StateManager;

pub trait State {
    /// The state became the loaded one.
    fn start(&mut self, ctx: &mut AppContext) -> HookResult;

    /// One fixed simulation step of `dt` seconds.
    fn step(&mut self, ctx: &mut AppContext, dt: f32) -> HookResult;

    /// Render once; `alpha` is the unsimulated lag as a fraction of a step.
    fn draw(&mut self, ctx: &mut AppContext, surface: &mut dyn Surface, alpha: f32)
    -> HookResult;

    /// The state is no longer the loaded one.
    fn stop(&mut self, ctx: &mut AppContext) -> HookResult;

    /// Release everything; called once at shutdown.
    fn dispose(&mut self) {}

    fn resize(&mut self, _ctx: &mut AppContext, _width: i32, _height: i32) {}
}
