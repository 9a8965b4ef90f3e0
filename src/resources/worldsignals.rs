//! Global signal storage.
//!
//! The [`WorldSignals`] map is how states and entities share loose values
//! without holding references to each other: the player's entity handle, the
//! running score, the high score carried across games, the quit request.
//! Well-known keys are listed in [`keys`].

use bevy_ecs::prelude::Entity;
use rustc_hash::{FxHashMap, FxHashSet};

/// Keys used by the shipped states and entities.
pub mod keys {
    /// Entity handle of the live player.
    pub const PLAYER: &str = "player";
    /// Score of the running game.
    pub const SCORE: &str = "score";
    /// Best score since process start.
    pub const HIGH_SCORE: &str = "high_score";
    /// Score recorded when the last game ended.
    pub const FINAL_SCORE: &str = "final_score";
    /// Multiplier applied to new enemies' health.
    pub const ENEMY_HEALTH_MULTIPLIER: &str = "enemy_health_multiplier";
    /// Flag set when the menu asks the process to exit.
    pub const QUIT_GAME: &str = "quit_game";
}

/// Global signal storage for cross-state communication.
///
/// Provides maps for scalars, integers, flags and entity handles.
#[derive(Debug, Clone, Default)]
pub struct WorldSignals {
    /// Floating-point numeric signals addressed by string keys.
    pub scalars: FxHashMap<String, f32>,
    /// Integer numeric signals addressed by string keys.
    pub integers: FxHashMap<String, i32>,
    /// Presence-only boolean flags; a key being present means "true".
    pub flags: FxHashSet<String>,
    /// Entities of interest for the current state.
    pub entities: FxHashMap<String, Entity>,
}

impl WorldSignals {
    /// Set a floating-point signal value.
    pub fn set_scalar(&mut self, key: impl Into<String>, value: f32) {
        self.scalars.insert(key.into(), value);
    }
    /// Get a floating-point signal by key.
    pub fn get_scalar(&self, key: &str) -> Option<f32> {
        self.scalars.get(key).copied()
    }
    /// Set an integer signal value.
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }
    /// Get an integer signal by key.
    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }
    /// Add `amount` to an integer signal (missing counts as zero) and return the sum.
    pub fn add_integer(&mut self, key: &str, amount: i32) -> i32 {
        let value = self.integers.entry(key.to_string()).or_insert(0);
        *value += amount;
        *value
    }
    /// Mark a flag as present/true.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    /// Remove a flag (make it false/absent).
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }
    /// Check whether a flag is present/true.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
    /// Get an entity by key.
    pub fn get_entity(&self, key: &str) -> Option<Entity> {
        self.entities.get(key).copied()
    }
    /// Set an entity by key.
    pub fn set_entity(&mut self, key: impl Into<String>, entity: Entity) {
        self.entities.insert(key.into(), entity);
    }
    /// Remove an entity by key. Returns the removed entity if it existed.
    pub fn remove_entity(&mut self, key: &str) -> Option<Entity> {
        self.entities.remove(key)
    }
}
