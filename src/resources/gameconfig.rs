//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [loop]
//! step_ms = 10
//! max_frame_ms = 250
//!
//! [playfield]
//! width = 800
//! height = 600
//!
//! [window]
//! width = 1280
//! height = 720
//!
//! [formations]
//! dir = ./blastius_data/formations
//! ```

use configparser::ini::Ini;
use glam::Vec2;
use log::info;
use std::path::PathBuf;
use std::time::Duration;

/// Default safe values for startup
const DEFAULT_STEP_MS: u32 = 10;
const DEFAULT_MAX_FRAME_MS: u32 = 250;
const DEFAULT_PLAYFIELD_WIDTH: u32 = 800;
const DEFAULT_PLAYFIELD_HEIGHT: u32 = 600;
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_FORMATIONS_DIR: &str = "./blastius_data/formations";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores the fixed-step loop settings, the playfield size every gameplay
/// rule is expressed in, the window size reported to the front end and the
/// formation directory.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Length of one simulation step in milliseconds.
    pub step_ms: u32,
    /// Longest wall-clock frame fed to the accumulator, in milliseconds.
    pub max_frame_ms: u32,
    /// Playfield width in world units.
    pub playfield_width: u32,
    /// Playfield height in world units.
    pub playfield_height: u32,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Directory holding formation `*.json` files.
    pub formations_dir: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            step_ms: DEFAULT_STEP_MS,
            max_frame_ms: DEFAULT_MAX_FRAME_MS,
            playfield_width: DEFAULT_PLAYFIELD_WIDTH,
            playfield_height: DEFAULT_PLAYFIELD_HEIGHT,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            formations_dir: PathBuf::from(DEFAULT_FORMATIONS_DIR),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [loop] section
        if let Some(step) = config.getuint("loop", "step_ms").ok().flatten() {
            // a zero step would never drain the accumulator
            self.step_ms = u32::try_from(step).unwrap_or(DEFAULT_STEP_MS).max(1);
        }
        if let Some(max_frame) = config.getuint("loop", "max_frame_ms").ok().flatten() {
            self.max_frame_ms = u32::try_from(max_frame).unwrap_or(DEFAULT_MAX_FRAME_MS);
        }
        // a frame must be able to hold at least one step
        self.max_frame_ms = self.max_frame_ms.max(self.step_ms);

        // [playfield] section
        if let Some(width) = config.getuint("playfield", "width").ok().flatten() {
            self.playfield_width = u32::try_from(width).unwrap_or(DEFAULT_PLAYFIELD_WIDTH);
        }
        if let Some(height) = config.getuint("playfield", "height").ok().flatten() {
            self.playfield_height = u32::try_from(height).unwrap_or(DEFAULT_PLAYFIELD_HEIGHT);
        }

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = u32::try_from(width).unwrap_or(DEFAULT_WINDOW_WIDTH);
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = u32::try_from(height).unwrap_or(DEFAULT_WINDOW_HEIGHT);
        }

        // [formations] section
        if let Some(dir) = config.get("formations", "dir") {
            self.formations_dir = PathBuf::from(dir);
        }

        info!(
            "Loaded config: step={}ms, max_frame={}ms, {}x{} playfield, {}x{} window, formations={:?}",
            self.step_ms,
            self.max_frame_ms,
            self.playfield_width,
            self.playfield_height,
            self.window_width,
            self.window_height,
            self.formations_dir
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("loop", "step_ms", Some(self.step_ms.to_string()));
        config.set("loop", "max_frame_ms", Some(self.max_frame_ms.to_string()));

        config.set("playfield", "width", Some(self.playfield_width.to_string()));
        config.set("playfield", "height", Some(self.playfield_height.to_string()));

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));

        config.set(
            "formations",
            "dir",
            Some(self.formations_dir.to_string_lossy().into_owned()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Length of one simulation step.
    pub fn fixed_step(&self) -> Duration {
        Duration::from_millis(u64::from(self.step_ms.max(1)))
    }

    /// Longest frame the accumulator accepts.
    pub fn max_frame(&self) -> Duration {
        Duration::from_millis(u64::from(self.max_frame_ms))
    }

    /// Playfield size in world units.
    pub fn playfield(&self) -> Vec2 {
        Vec2::new(self.playfield_width as f32, self.playfield_height as f32)
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
