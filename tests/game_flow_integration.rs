//! Game flow integration tests: the fixed-step driver, formations, the
//! gameplay state and the entity interactions that end a round.

use std::path::PathBuf;
use std::time::Duration;

use glam::Vec2;

use blastius::components::role::{Faction, Role};
use blastius::context::AppContext;
use blastius::entities::{Bullet, Enemy, GameOverTimer, Player, Tracer};
use blastius::entity::EntityManager;
use blastius::events::audio::AudioCmd;
use blastius::game::App;
use blastius::resources::fixedstep::FixedStepClock;
use blastius::resources::formation::{
    EntityKind, FormationStore, PatternKind, SelectionPolicy, SpawnRecord,
};
use blastius::resources::gameconfig::GameConfig;
use blastius::resources::gamestate::NextGameStates;
use blastius::resources::input::InputAction;
use blastius::resources::worldsignals::keys;
use blastius::state::State;
use blastius::states::{EditorState, GameState};
use blastius::surface::RecordingSurface;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("blastius_{}_{}", tag, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn default_app() -> App {
    let mut app = App::with_context(AppContext::default());
    app.register_default_states();
    app
}

// =============================================================================
// Fixed-step driver
// =============================================================================

#[test]
fn clock_drains_whole_steps_and_keeps_remainder() {
    let mut clock = FixedStepClock::new(Duration::from_millis(10), Duration::from_millis(250));

    assert_eq!(clock.advance(Duration::from_millis(37)), 3);
    assert_eq!(clock.lag(), Duration::from_millis(7));
    assert!(approx_eq(clock.alpha(), 0.7));
}

#[test]
fn frame_steps_per_drained_step_and_advances_time() {
    let mut app = default_app();
    app.start("menu").unwrap();
    let mut surface = RecordingSurface::new();

    let steps = app.frame(Duration::from_millis(37), &mut surface).unwrap();

    assert_eq!(steps, 3);
    assert!(approx_eq(app.ctx.time.elapsed, 0.03));
    assert!(surface.texts().contains(&"BLASTIUS"));
}

#[test]
fn confirm_in_menu_starts_a_game_within_one_frame() {
    let mut app = default_app();
    app.start("menu").unwrap();
    let mut surface = RecordingSurface::new();

    app.ctx.input.press(InputAction::Confirm);
    app.frame(Duration::from_millis(10), &mut surface).unwrap();

    assert_eq!(app.states.loaded_state_name(), Some("game"));
    assert!(app.ctx.signals.get_entity(keys::PLAYER).is_some());
    assert!(!app.ctx.input.just_pressed(InputAction::Confirm));
}

#[test]
fn back_in_menu_requests_quit() {
    let mut app = default_app();
    app.start("menu").unwrap();
    let mut surface = RecordingSurface::new();

    app.ctx.input.press(InputAction::Back);
    app.frame(Duration::from_millis(10), &mut surface).unwrap();

    assert!(app.should_quit());
}

#[test]
fn loading_moves_to_menu_after_delay() {
    let mut app = default_app();
    app.start("loading").unwrap();
    let mut surface = RecordingSurface::new();

    app.frame(Duration::from_millis(500), &mut surface).unwrap();
    assert_eq!(app.states.loaded_state_name(), Some("loading"));
    assert_eq!(surface.texts(), vec!["Loading..."]);

    for _ in 0..6 {
        app.frame(Duration::from_millis(200), &mut surface).unwrap();
    }
    assert_eq!(app.states.loaded_state_name(), Some("menu"));
}

#[test]
fn start_with_unknown_state_fails() {
    let mut app = default_app();
    assert!(app.start("credits").is_err());
    assert_eq!(app.states.loaded_state_name(), None);
}

// =============================================================================
// Formations
// =============================================================================

#[test]
fn editor_save_then_reload_reproduces_records() {
    let dir = temp_dir("roundtrip");
    let config = GameConfig {
        formations_dir: dir.clone(),
        ..GameConfig::new()
    };
    let mut ctx = AppContext::with_formations(config, FormationStore::with_dir(&dir));

    let mut editor = EditorState::new();
    editor.start(&mut ctx).unwrap();
    editor.set_kind(EntityKind::Star);
    editor.set_pattern(PatternKind::SpiralCw);
    editor.place(Vec2::new(120.0, 40.0));
    editor.set_kind(EntityKind::U);
    editor.set_pattern(PatternKind::Wave);
    editor.place(Vec2::new(640.0, 80.5));
    editor.save("pincer", &mut ctx).unwrap();

    let mut store = FormationStore::with_dir(&dir);
    assert_eq!(store.load_dir().unwrap(), 1);
    assert_eq!(store.list(), vec!["pincer"]);
    let records = store.load("pincer").unwrap();
    assert_eq!(
        records,
        vec![
            SpawnRecord::new(EntityKind::Star, PatternKind::SpiralCw, 120.0, 40.0),
            SpawnRecord::new(EntityKind::U, PatternKind::Wave, 640.0, 80.5),
        ]
    );

    let mut reopened = EditorState::new();
    reopened.start(&mut ctx).unwrap();
    reopened.load("pincer", &mut ctx).unwrap();
    assert_eq!(reopened.records(), records.as_slice());
    assert_eq!(reopened.name(), "pincer");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn formation_files_accept_legacy_field_names() {
    let dir = temp_dir("legacy");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("old.json"),
        r#"[{"entityType":"HEPTAGON","patternType":"DIAMOND_CCW","x":10.0,"y":20.0}]"#,
    )
    .unwrap();
    std::fs::write(dir.join("broken.json"), "not json").unwrap();

    let mut store = FormationStore::with_dir(&dir);
    assert_eq!(store.load_dir().unwrap(), 1);
    assert_eq!(
        store.load("old").unwrap(),
        vec![SpawnRecord::new(
            EntityKind::Heptagon,
            PatternKind::DiamondCcw,
            10.0,
            20.0
        )]
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn game_spawns_formation_above_the_playfield() {
    let mut ctx = AppContext::default();
    ctx.formations.insert(
        "pair",
        vec![
            SpawnRecord::new(EntityKind::Square, PatternKind::Normal, 100.0, 0.0),
            SpawnRecord::new(EntityKind::Diamond, PatternKind::Left, 300.0, 50.0),
        ],
    );
    let mut game = GameState::new().with_selection(SelectionPolicy::Named("pair".into()));
    game.start(&mut ctx).unwrap();

    game.spawn_formation(&mut ctx).unwrap();

    let entities = game.entities().unwrap();
    let enemies = entities.entities_with_role(|role| role == Role::Enemy);
    assert_eq!(enemies.len(), 2);
    assert_eq!(entities.position(enemies[0]), Some(Vec2::new(100.0, 600.0)));
    assert_eq!(entities.position(enemies[1]), Some(Vec2::new(300.0, 650.0)));
    assert_eq!(entities.health(enemies[1]), Some(200));

    game.stop(&mut ctx).unwrap();
    assert!(game.entities().is_none());
}

#[test]
fn game_spawns_first_wave_when_timer_runs_out() {
    let mut ctx = AppContext::default();
    ctx.formations.insert(
        "single",
        vec![SpawnRecord::new(EntityKind::Triangle, PatternKind::Normal, 700.0, 500.0)],
    );
    let mut game = GameState::new();
    game.start(&mut ctx).unwrap();

    for _ in 0..490 {
        game.step(&mut ctx, 0.01).unwrap();
    }
    let before = game
        .entities()
        .unwrap()
        .entities_with_role(|role| role == Role::Enemy)
        .len();
    for _ in 0..20 {
        game.step(&mut ctx, 0.01).unwrap();
    }
    let after = game
        .entities()
        .unwrap()
        .entities_with_role(|role| role == Role::Enemy)
        .len();

    assert_eq!(before, 0);
    assert_eq!(after, 1);
}

// =============================================================================
// Combat
// =============================================================================

#[test]
fn player_bullet_kills_enemy_and_scores_coins() {
    let mut ctx = AppContext::default();
    let mut manager = EntityManager::new();
    let enemy = manager
        .add_entity(
            Enemy::spawn(EntityKind::Triangle, PatternKind::Normal, Vec2::new(400.0, 300.0), 1.0),
            &mut ctx,
        )
        .unwrap();
    let bullet = manager
        .add_entity(
            Bullet::spawn(Vec2::new(400.0, 300.0), 0.0, 90.0, Faction::Player),
            &mut ctx,
        )
        .unwrap();

    manager.step(0.01, &mut ctx).unwrap();

    assert!(!manager.contains(enemy));
    assert!(!manager.contains(bullet));
    assert_eq!(ctx.signals.get_integer(keys::SCORE), Some(10));
    assert_eq!(ctx.signals.get_integer(keys::HIGH_SCORE), Some(10));
    assert!(ctx.audio.drain().iter().any(|cmd| matches!(
        cmd,
        AudioCmd::PlayFx { id, .. } if id.starts_with("explosion")
    )));
}

#[test]
fn tracer_damages_an_enemy_only_once() {
    let mut ctx = AppContext::default();
    let mut manager = EntityManager::new();
    let enemy = manager
        .add_entity(
            Enemy::spawn(EntityKind::Rectangle, PatternKind::Normal, Vec2::new(400.0, 300.0), 1.0),
            &mut ctx,
        )
        .unwrap();
    manager
        .add_entity(Tracer::spawn(Vec2::new(400.0, 200.0)), &mut ctx)
        .unwrap();

    for _ in 0..5 {
        manager.step(0.01, &mut ctx).unwrap();
    }

    assert_eq!(manager.health(enemy), Some(450));
}

#[test]
fn health_multiplier_scales_new_enemies() {
    let mut ctx = AppContext::default();
    let mut manager = EntityManager::new();
    let enemy = manager
        .add_entity(
            Enemy::spawn(EntityKind::Star, PatternKind::Cw, Vec2::new(100.0, 300.0), 1.5),
            &mut ctx,
        )
        .unwrap();
    assert_eq!(manager.health(enemy), Some(450));
}

#[test]
fn enemy_projectile_kills_player_and_leads_to_game_over() {
    let mut ctx = AppContext::default();
    ctx.signals.set_integer(keys::SCORE, 42);
    let mut manager = EntityManager::new();
    let player = manager
        .add_entity(Player::spawn(Vec2::new(150.0, 150.0)), &mut ctx)
        .unwrap();
    ctx.signals.set_entity(keys::PLAYER, player);
    let bullet = manager
        .add_entity(
            Bullet::spawn(Vec2::new(150.0, 150.0), 0.0, 0.0, Faction::Enemy),
            &mut ctx,
        )
        .unwrap();

    manager.step(0.01, &mut ctx).unwrap();
    assert!(!manager.contains(bullet));
    assert_eq!(
        manager.animation(player).map(|a| a.animation_key.as_str()),
        Some("player/die")
    );

    for _ in 0..300 {
        manager.step(0.01, &mut ctx).unwrap();
    }

    assert!(!manager.contains(player));
    assert!(manager.is_empty());
    assert_eq!(
        ctx.next_state.get(),
        &NextGameStates::Pending(Some("game-over".into()))
    );
    assert_eq!(ctx.signals.get_integer(keys::FINAL_SCORE), Some(42));
}

#[test]
fn game_over_timer_waits_before_requesting_state() {
    let mut ctx = AppContext::default();
    let mut manager = EntityManager::new();
    manager
        .add_entity(GameOverTimer::spawn(0.5), &mut ctx)
        .unwrap();

    for _ in 0..40 {
        manager.step(0.01, &mut ctx).unwrap();
    }
    assert!(!ctx.next_state.is_pending());

    for _ in 0..20 {
        manager.step(0.01, &mut ctx).unwrap();
    }
    assert!(ctx.next_state.is_pending());
    assert!(manager.is_empty());
}
