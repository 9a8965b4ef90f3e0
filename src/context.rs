//! Explicit application context.
//!
//! Everything a state or an entity may need beyond its own data lives in
//! [`AppContext`]. The driver owns it and lends it `&mut` to every state and
//! entity hook, so there is no global mutable state in the crate.

use log::warn;

use crate::error::AssetError;
use crate::events::audio::AudioCmd;
use crate::resources::assetstore::AssetStore;
use crate::resources::audio::AudioBridge;
use crate::resources::formation::FormationStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::NextGameState;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;

pub struct AppContext {
    pub config: GameConfig,
    pub assets: AssetStore,
    pub audio: AudioBridge,
    pub input: InputState,
    pub signals: WorldSignals,
    pub next_state: NextGameState,
    pub formations: FormationStore,
    pub time: WorldTime,
    pub screen: ScreenSize,
}

impl Default for AppContext {
    /// Default configuration, built-in assets, in-memory formations.
    fn default() -> Self {
        Self::with_formations(GameConfig::new(), FormationStore::in_memory())
    }
}

impl AppContext {
    /// Context for `config`, with formations read from its directory.
    ///
    /// An unreadable formation directory is logged and leaves the store empty;
    /// the game then simply spawns no waves.
    pub fn new(config: GameConfig) -> Self {
        let mut formations = FormationStore::with_dir(config.formations_dir.clone());
        if let Err(err) = formations.load_dir() {
            warn!("No formations available: {}", err);
        }
        Self::with_formations(config, formations)
    }

    pub fn with_formations(config: GameConfig, formations: FormationStore) -> Self {
        let screen = ScreenSize {
            w: config.window_width as i32,
            h: config.window_height as i32,
        };
        Self {
            config,
            assets: AssetStore::builtin(),
            audio: AudioBridge::new(),
            input: InputState::new(),
            signals: WorldSignals::default(),
            next_state: NextGameState::new(),
            formations,
            time: WorldTime::default(),
            screen,
        }
    }

    /// Ask the state manager to load `name` (or go idle) once the current
    /// step returns.
    pub fn request_state(&mut self, name: Option<&str>) {
        self.next_state.set(name);
    }

    /// Validate `key` and queue a one-shot effect for the audio player.
    pub fn play_sound(&mut self, key: &str, volume: f32, pitch: f32) -> Result<(), AssetError> {
        let id = self.assets.sound(key)?.to_string();
        self.audio.send(AudioCmd::PlayFx { id, volume, pitch });
        Ok(())
    }
}
