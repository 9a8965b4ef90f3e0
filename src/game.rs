//! Application driver.
//!
//! [`App`] owns the [`AppContext`], the [`StateManager`] and the fixed-step
//! clock. Each rendered frame feeds the measured wall time to the clock,
//! steps the loaded state once per drained step and draws once with the
//! leftover lag as interpolation fraction.

use std::time::Duration;

use log::{info, warn};

use crate::context::AppContext;
use crate::error::EngineError;
use crate::events::audio::AudioCmd;
use crate::resources::fixedstep::FixedStepClock;
use crate::resources::gameconfig::GameConfig;
use crate::resources::worldsignals::keys;
use crate::state::StateManager;
use crate::states::{
    EDITOR, EditorState, GAME, GAME_OVER, GameOverState, GameState, LOADING, LoadingState, MENU,
    MenuState,
};
use crate::surface::Surface;
use crate::systems::time::update_world_time;

pub struct App {
    pub ctx: AppContext,
    pub states: StateManager,
    clock: FixedStepClock,
}

impl App {
    /// App for `config`, formations read from its directory. No states are
    /// registered yet.
    pub fn new(config: GameConfig) -> Self {
        Self::with_context(AppContext::new(config))
    }

    pub fn with_context(ctx: AppContext) -> Self {
        let clock = FixedStepClock::new(ctx.config.fixed_step(), ctx.config.max_frame());
        Self {
            ctx,
            states: StateManager::new(),
            clock,
        }
    }

    /// Register the shipped modes under their usual names.
    pub fn register_default_states(&mut self) {
        self.states
            .add_state(LOADING, LoadingState::new(Some(MENU)));
        self.states.add_state(MENU, MenuState);
        self.states.add_state(GAME, GameState::new());
        self.states.add_state(GAME_OVER, GameOverState::default());
        self.states.add_state(EDITOR, EditorState::new());
    }

    /// Load the first state.
    pub fn start(&mut self, initial: &str) -> Result<(), EngineError> {
        info!(
            "Starting with state {:?}, step {:?}",
            initial,
            self.clock.step()
        );
        self.clock.reset();
        self.states.load_state(Some(initial), &mut self.ctx)
    }

    /// Run one rendered frame after `elapsed` wall time. Returns the number
    /// of simulation steps taken.
    pub fn frame(&mut self, elapsed: Duration, surface: &mut dyn Surface) -> Result<u32, EngineError> {
        let steps = self.clock.advance(elapsed);
        let dt = self.clock.step_seconds();
        for _ in 0..steps {
            let dt = update_world_time(&mut self.ctx.time, dt);
            self.states.step(dt, &mut self.ctx)?;
            self.ctx.input.end_frame();
        }
        self.states
            .draw(&mut self.ctx, surface, self.clock.alpha())?;
        Ok(steps)
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.states.resize(width, height, &mut self.ctx);
    }

    pub fn should_quit(&self) -> bool {
        self.ctx.signals.has_flag(keys::QUIT_GAME)
    }

    pub fn clock(&self) -> &FixedStepClock {
        &self.clock
    }

    /// Stop the loaded state, dispose every state and tell the audio side
    /// to finish.
    pub fn shutdown(&mut self) {
        if let Err(err) = self.states.unload_state(&mut self.ctx) {
            warn!("Error while stopping the last state: {}", err);
        }
        self.states.dispose();
        self.ctx.audio.send(AudioCmd::Shutdown);
        info!("Shut down after {:.2}s of simulation", self.ctx.time.elapsed);
    }
}
