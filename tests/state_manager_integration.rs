//! StateManager integration tests: transitions, unknown names, deferred
//! requests and forwarding.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use blastius::context::AppContext;
use blastius::error::{EngineError, HookResult};
use blastius::state::{State, StateManager};
use blastius::surface::{Color, RecordingSurface, Surface};

type Log = Rc<RefCell<Vec<String>>>;

fn entries(log: &Log) -> Vec<String> {
    log.borrow().clone()
}

/// Logs its hooks and optionally requests a transition.
struct Scripted {
    name: &'static str,
    log: Log,
    on_step: Option<Option<&'static str>>,
    on_start: Option<Option<&'static str>>,
}

impl Scripted {
    fn new(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            log: log.clone(),
            on_step: None,
            on_start: None,
        }
    }

    fn requesting_on_step(mut self, next: Option<&'static str>) -> Self {
        self.on_step = Some(next);
        self
    }

    fn requesting_on_start(mut self, next: Option<&'static str>) -> Self {
        self.on_start = Some(next);
        self
    }

    fn push(&self, hook: &str) {
        self.log.borrow_mut().push(format!("{} {}", self.name, hook));
    }
}

impl State for Scripted {
    fn start(&mut self, ctx: &mut AppContext) -> HookResult {
        self.push("start");
        if let Some(next) = self.on_start {
            ctx.request_state(next);
        }
        Ok(())
    }

    fn step(&mut self, ctx: &mut AppContext, _dt: f32) -> HookResult {
        self.push("step");
        if let Some(next) = self.on_step {
            ctx.request_state(next);
        }
        Ok(())
    }

    fn draw(&mut self, _ctx: &mut AppContext, surface: &mut dyn Surface, _alpha: f32) -> HookResult {
        self.push("draw");
        surface.draw_text(self.name, Vec2::ZERO, 10.0, Color::WHITE);
        Ok(())
    }

    fn stop(&mut self, _ctx: &mut AppContext) -> HookResult {
        self.push("stop");
        Ok(())
    }

    fn dispose(&mut self) {
        self.push("dispose");
    }

    fn resize(&mut self, _ctx: &mut AppContext, width: i32, height: i32) {
        self.push(&format!("resize {}x{}", width, height));
    }
}

// =============================================================================
// Transitions
// =============================================================================

#[test]
fn load_state_stops_old_before_starting_new() {
    let log = Log::default();
    let mut ctx = AppContext::default();
    let mut states = StateManager::new();
    states.add_state("menu", Scripted::new("menu", &log));
    states.add_state("game", Scripted::new("game", &log));

    states.load_state(Some("menu"), &mut ctx).unwrap();
    states.load_state(Some("game"), &mut ctx).unwrap();

    assert_eq!(states.loaded_state_name(), Some("game"));
    assert_eq!(entries(&log), vec!["menu start", "menu stop", "game start"]);
}

#[test]
fn load_missing_state_leaves_nothing_loaded() {
    let log = Log::default();
    let mut ctx = AppContext::default();
    let mut states = StateManager::new();
    states.add_state("menu", Scripted::new("menu", &log));
    states.load_state(Some("menu"), &mut ctx).unwrap();

    let result = states.load_state(Some("missing"), &mut ctx);

    assert!(matches!(result, Err(EngineError::UnknownState(name)) if name == "missing"));
    assert_eq!(states.loaded_state_name(), None);
    assert_eq!(entries(&log), vec!["menu start", "menu stop"]);
}

#[test]
fn reloading_same_state_restarts_it() {
    let log = Log::default();
    let mut ctx = AppContext::default();
    let mut states = StateManager::new();
    states.add_state("game", Scripted::new("game", &log));

    states.load_state(Some("game"), &mut ctx).unwrap();
    states.load_state(Some("game"), &mut ctx).unwrap();

    assert_eq!(entries(&log), vec!["game start", "game stop", "game start"]);
}

// =============================================================================
// Deferred requests
// =============================================================================

#[test]
fn request_from_step_applies_after_the_step() {
    let log = Log::default();
    let mut ctx = AppContext::default();
    let mut states = StateManager::new();
    states.add_state("menu", Scripted::new("menu", &log).requesting_on_step(Some("game")));
    states.add_state("game", Scripted::new("game", &log));
    states.load_state(Some("menu"), &mut ctx).unwrap();

    states.step(0.01, &mut ctx).unwrap();

    assert_eq!(states.loaded_state_name(), Some("game"));
    assert_eq!(
        entries(&log),
        vec!["menu start", "menu step", "menu stop", "game start"]
    );
    assert!(!ctx.next_state.is_pending());
}

#[test]
fn request_none_goes_idle() {
    let log = Log::default();
    let mut ctx = AppContext::default();
    let mut states = StateManager::new();
    states.add_state("menu", Scripted::new("menu", &log).requesting_on_step(None));
    states.load_state(Some("menu"), &mut ctx).unwrap();

    states.step(0.01, &mut ctx).unwrap();
    states.step(0.01, &mut ctx).unwrap();

    assert_eq!(states.loaded_state_name(), None);
    assert_eq!(entries(&log), vec!["menu start", "menu step", "menu stop"]);
}

#[test]
fn request_from_start_chains_within_one_step() {
    let log = Log::default();
    let mut ctx = AppContext::default();
    let mut states = StateManager::new();
    states.add_state("a", Scripted::new("a", &log).requesting_on_step(Some("b")));
    states.add_state("b", Scripted::new("b", &log).requesting_on_start(Some("c")));
    states.add_state("c", Scripted::new("c", &log));
    states.load_state(Some("a"), &mut ctx).unwrap();

    states.step(0.01, &mut ctx).unwrap();

    assert_eq!(states.loaded_state_name(), Some("c"));
    assert_eq!(
        entries(&log),
        vec!["a start", "a step", "a stop", "b start", "b stop", "c start"]
    );
}

#[test]
fn request_for_missing_state_is_reported_by_step() {
    let log = Log::default();
    let mut ctx = AppContext::default();
    let mut states = StateManager::new();
    states.add_state("menu", Scripted::new("menu", &log).requesting_on_step(Some("nope")));
    states.load_state(Some("menu"), &mut ctx).unwrap();

    let result = states.step(0.01, &mut ctx);

    assert!(matches!(result, Err(EngineError::UnknownState(_))));
    assert_eq!(states.loaded_state_name(), None);
}

// =============================================================================
// Forwarding
// =============================================================================

#[test]
fn step_draw_and_resize_reach_only_the_loaded_state() {
    let log = Log::default();
    let mut ctx = AppContext::default();
    let mut states = StateManager::new();
    states.add_state("menu", Scripted::new("menu", &log));
    states.add_state("game", Scripted::new("game", &log));
    let mut surface = RecordingSurface::new();

    states.step(0.01, &mut ctx).unwrap();
    states.draw(&mut ctx, &mut surface, 0.0).unwrap();
    assert!(entries(&log).is_empty());
    assert!(surface.is_empty());

    states.load_state(Some("game"), &mut ctx).unwrap();
    states.step(0.01, &mut ctx).unwrap();
    states.draw(&mut ctx, &mut surface, 0.5).unwrap();
    states.resize(320, 240, &mut ctx);

    assert_eq!(
        entries(&log),
        vec!["game start", "game step", "game draw", "game resize 320x240"]
    );
    assert_eq!(surface.texts(), vec!["game"]);
    assert_eq!((ctx.screen.w, ctx.screen.h), (320, 240));
}

#[test]
fn dispose_reaches_every_state() {
    let log = Log::default();
    let mut states = StateManager::new();
    states.add_state("menu", Scripted::new("menu", &log));
    states.add_state("game", Scripted::new("game", &log));

    states.dispose();

    let mut disposed = entries(&log);
    disposed.sort();
    assert_eq!(disposed, vec!["game dispose", "menu dispose"]);
}
