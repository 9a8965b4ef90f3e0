//! Name-keyed registry of states with at most one loaded.
//!
//! Transitions go through [`StateManager::load_state`]: the loaded state is
//! stopped first, then the new one (if any) is started. Requests made from
//! inside a state or entity through
//! [`AppContext::request_state`](crate::context::AppContext::request_state)
//! are applied by [`StateManager::step`] right after the loaded state's step.

use log::{debug, error, info, warn};
use rustc_hash::FxHashMap;

use crate::context::AppContext;
use crate::error::{EngineError, HookResult};
use crate::state::State;
use crate::surface::Surface;

/// Transitions applied after one step before giving up on a request loop.
const MAX_CHAINED_TRANSITIONS: usize = 8;

#[derive(Default)]
pub struct StateManager {
    states: FxHashMap<String, Box<dyn State>>,
    loaded: Option<String>,
}

impl StateManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `state` under `name`, replacing any state of that name.
    pub fn add_state(&mut self, name: impl Into<String>, state: impl State + 'static) {
        let name = name.into();
        if self.states.insert(name.clone(), Box::new(state)).is_some() {
            warn!("State {:?} registered twice, keeping the last one", name);
        }
    }

    /// Unregister `name`, stopping it first if it is loaded.
    pub fn remove_state(
        &mut self,
        name: &str,
        ctx: &mut AppContext,
    ) -> Result<Option<Box<dyn State>>, EngineError> {
        if self.loaded.as_deref() == Some(name) {
            self.unload_state(ctx)?;
        }
        Ok(self.states.remove(name))
    }

    pub fn has_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    pub fn get_state(&self, name: &str) -> Option<&dyn State> {
        self.states.get(name).map(|state| state.as_ref())
    }

    pub fn get_state_mut(&mut self, name: &str) -> Option<&mut (dyn State + 'static)> {
        self.states.get_mut(name).map(|state| state.as_mut())
    }

    /// Registered names, sorted.
    pub fn state_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.states.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn loaded_state_name(&self) -> Option<&str> {
        self.loaded.as_deref()
    }

    pub fn loaded_state(&self) -> Option<&dyn State> {
        self.loaded
            .as_deref()
            .and_then(|name| self.get_state(name))
    }

    /// Stop the loaded state (if any), then start `name`, or stay idle when
    /// `name` is `None`.
    ///
    /// An unknown name is logged and returned as
    /// [`EngineError::UnknownState`]; nothing is loaded afterwards.
    pub fn load_state(&mut self, name: Option<&str>, ctx: &mut AppContext) -> HookResult {
        let previous = self.loaded.clone();
        self.unload_state(ctx)?;

        let Some(name) = name else {
            debug!("Transitioning from {:?} to idle", previous);
            return Ok(());
        };
        let Some(state) = self.states.get_mut(name) else {
            error!("State does not exist: {}", name);
            return Err(EngineError::UnknownState(name.to_string()));
        };

        info!("Transitioning from {:?} to {:?}", previous, name);
        self.loaded = Some(name.to_string());
        state.start(ctx)
    }

    /// Stop the loaded state and leave nothing loaded.
    pub fn unload_state(&mut self, ctx: &mut AppContext) -> HookResult {
        let Some(current) = self.loaded.take() else {
            return Ok(());
        };
        match self.states.get_mut(&current) {
            Some(state) => state.stop(ctx),
            None => Ok(()),
        }
    }

    /// Step the loaded state, then apply any transition it requested.
    pub fn step(&mut self, dt: f32, ctx: &mut AppContext) -> HookResult {
        if let Some(state) = self.loaded_mut() {
            state.step(ctx, dt)?;
        }
        self.apply_pending(ctx)
    }

    /// Apply the transition waiting in `ctx.next_state`, and any that the
    /// newly started states request in turn.
    pub fn apply_pending(&mut self, ctx: &mut AppContext) -> HookResult {
        for _ in 0..MAX_CHAINED_TRANSITIONS {
            let Some(next) = ctx.next_state.take() else {
                return Ok(());
            };
            self.load_state(next.as_deref(), ctx)?;
        }
        if ctx.next_state.is_pending() {
            warn!(
                "More than {} chained state transitions, deferring the rest to the next step",
                MAX_CHAINED_TRANSITIONS
            );
        }
        Ok(())
    }

    pub fn draw(&mut self, ctx: &mut AppContext, surface: &mut dyn Surface, alpha: f32) -> HookResult {
        match self.loaded_mut() {
            Some(state) => state.draw(ctx, surface, alpha),
            None => Ok(()),
        }
    }

    /// Record the new viewport size and forward it to the loaded state.
    pub fn resize(&mut self, width: i32, height: i32, ctx: &mut AppContext) {
        ctx.screen.w = width;
        ctx.screen.h = height;
        if let Some(state) = self.loaded_mut() {
            state.resize(ctx, width, height);
        }
    }

    /// Dispose every registered state. The loaded state is not stopped.
    pub fn dispose(&mut self) {
        for state in self.states.values_mut() {
            state.dispose();
        }
    }

    fn loaded_mut(&mut self) -> Option<&mut Box<dyn State>> {
        let name = self.loaded.as_deref()?;
        self.states.get_mut(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Probe {
        name: &'static str,
        log: Log,
    }

    impl State for Probe {
        fn start(&mut self, _ctx: &mut AppContext) -> HookResult {
            self.log.borrow_mut().push(format!("start {}", self.name));
            Ok(())
        }
        fn step(&mut self, _ctx: &mut AppContext, _dt: f32) -> HookResult {
            self.log.borrow_mut().push(format!("step {}", self.name));
            Ok(())
        }
        fn draw(&mut self, _ctx: &mut AppContext, _surface: &mut dyn Surface, _alpha: f32) -> HookResult {
            Ok(())
        }
        fn stop(&mut self, _ctx: &mut AppContext) -> HookResult {
            self.log.borrow_mut().push(format!("stop {}", self.name));
            Ok(())
        }
    }

    fn manager_with(names: &[&'static str], log: &Log) -> StateManager {
        let mut manager = StateManager::new();
        for name in names {
            manager.add_state(
                *name,
                Probe {
                    name,
                    log: log.clone(),
                },
            );
        }
        manager
    }

    #[test]
    fn test_load_stops_previous_then_starts_next() {
        let log = Log::default();
        let mut ctx = AppContext::default();
        let mut manager = manager_with(&["menu", "game"], &log);

        manager.load_state(Some("menu"), &mut ctx).unwrap();
        manager.load_state(Some("game"), &mut ctx).unwrap();

        assert_eq!(manager.loaded_state_name(), Some("game"));
        assert_eq!(*log.borrow(), vec!["start menu", "stop menu", "start game"]);
    }

    #[test]
    fn test_load_none_goes_idle() {
        let log = Log::default();
        let mut ctx = AppContext::default();
        let mut manager = manager_with(&["menu"], &log);

        manager.load_state(Some("menu"), &mut ctx).unwrap();
        manager.load_state(None, &mut ctx).unwrap();
        manager.step(0.01, &mut ctx).unwrap();

        assert!(manager.loaded_state().is_none());
        assert_eq!(*log.borrow(), vec!["start menu", "stop menu"]);
    }

    #[test]
    fn test_remove_loaded_state_stops_it() {
        let log = Log::default();
        let mut ctx = AppContext::default();
        let mut manager = manager_with(&["menu"], &log);

        manager.load_state(Some("menu"), &mut ctx).unwrap();
        let removed = manager.remove_state("menu", &mut ctx).unwrap();

        assert!(removed.is_some());
        assert!(!manager.has_state("menu"));
        assert_eq!(manager.loaded_state_name(), None);
        assert_eq!(*log.borrow(), vec!["start menu", "stop menu"]);
    }

    #[test]
    fn test_resize_updates_screen_size() {
        let log = Log::default();
        let mut ctx = AppContext::default();
        let mut manager = manager_with(&["menu"], &log);
        manager.resize(640, 480, &mut ctx);
        assert_eq!((ctx.screen.w, ctx.screen.h), (640, 480));
    }

    #[test]
    fn test_state_names_sorted() {
        let log = Log::default();
        let manager = manager_with(&["menu", "editor", "game"], &log);
        assert_eq!(manager.state_names(), vec!["editor", "game", "menu"]);
    }
}
