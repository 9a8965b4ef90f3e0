//! Blastius headless runner.
//!
//! Runs the simulation core without a window: frames are fed with a fixed
//! virtual frame time and drawn into a recording surface. With `--autoplay`
//! a small input script walks through the menu and plays a round.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seconds 30 --autoplay
//! ```

use std::path::PathBuf;
use std::time::Duration;

use blastius::game::App;
use blastius::resources::formation::{EntityKind, PatternKind, SpawnRecord};
use blastius::resources::gameconfig::GameConfig;
use blastius::resources::input::InputAction;
use blastius::states::{GAME, GAME_OVER, MENU};
use blastius::surface::RecordingSurface;
use clap::Parser;
use log::{error, info, warn};

/// Virtual length of one rendered frame.
const FRAME: Duration = Duration::from_micros(16_667);

/// Blastius simulation core
#[derive(Parser)]
#[command(version, about = "Headless runner for the Blastius simulation core")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding formation JSON files (overrides the configuration).
    #[arg(long, value_name = "DIR")]
    formations: Option<PathBuf>,

    /// Simulated seconds to run.
    #[arg(long, default_value_t = 5.0)]
    seconds: f32,

    /// Drive the game with a scripted input sequence.
    #[arg(long)]
    autoplay: bool,

    /// State to load first.
    #[arg(long, default_value = "loading")]
    initial_state: String,
}

fn load_config(cli: &Cli) -> GameConfig {
    let mut config = match cli.config.as_ref() {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(err) = config.load_from_file() {
        warn!("Using default configuration: {}", err);
    }
    if let Some(dir) = cli.formations.as_ref() {
        config.formations_dir = dir.clone();
    }
    config
}

/// Small wave used when the formation directory is empty.
fn demo_formation() -> Vec<SpawnRecord> {
    vec![
        SpawnRecord::new(EntityKind::Triangle, PatternKind::Normal, 200.0, 0.0),
        SpawnRecord::new(EntityKind::Square, PatternKind::Wave, 400.0, 40.0),
        SpawnRecord::new(EntityKind::Star, PatternKind::Dive, 600.0, 0.0),
    ]
}

/// Press and release actions so the script goes menu → game → game over →
/// menu, firing and weaving while in game.
fn drive_autoplay(app: &mut App, frame: u64) {
    let input = &mut app.ctx.input;
    let pulse = frame % 30 == 0;
    match app.states.loaded_state_name() {
        Some(MENU) if pulse => input.press(InputAction::Confirm),
        Some(GAME_OVER) if pulse => input.press(InputAction::Fire),
        Some(GAME) => {
            input.press(InputAction::Fire);
            if (frame / 90) % 2 == 0 {
                input.release(InputAction::Right);
                input.press(InputAction::Left);
            } else {
                input.release(InputAction::Left);
                input.press(InputAction::Right);
            }
        }
        _ => {
            input.release(InputAction::Confirm);
            input.release(InputAction::Fire);
            input.release(InputAction::Left);
            input.release(InputAction::Right);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    info!("Blastius headless runner");

    let mut app = App::new(load_config(&cli));
    if app.ctx.formations.is_empty() {
        info!("No formations found, using the built-in demo wave");
        app.ctx.formations.insert("demo", demo_formation());
    }
    app.register_default_states();

    if let Err(err) = app.start(&cli.initial_state) {
        error!("Cannot start: {}", err);
        std::process::exit(1);
    }

    let (width, height) = app.ctx.config.window_size();
    app.resize(width as i32, height as i32);

    let mut surface = RecordingSurface::new();
    let frames = (cli.seconds.max(0.0) / FRAME.as_secs_f32()).ceil() as u64;
    let mut steps = 0u64;
    let mut sounds = 0usize;

    for frame in 0..frames {
        if cli.autoplay {
            drive_autoplay(&mut app, frame);
        }
        surface.clear();
        match app.frame(FRAME, &mut surface) {
            Ok(taken) => steps += u64::from(taken),
            Err(err) => {
                error!("Frame {} failed: {}", frame, err);
                app.shutdown();
                std::process::exit(1);
            }
        }
        sounds += app.ctx.audio.drain().len();

        if app.should_quit() {
            info!("Quit requested at frame {}", frame);
            break;
        }
    }

    info!(
        "Ran {} steps, {} sound effects, last frame drew {} calls in state {:?}, high score {}",
        steps,
        sounds,
        surface.len(),
        app.states.loaded_state_name(),
        app.ctx
            .signals
            .get_integer(blastius::resources::worldsignals::keys::HIGH_SCORE)
            .unwrap_or(0)
    );
    app.shutdown();
}
