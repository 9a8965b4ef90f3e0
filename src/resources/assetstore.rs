//! Asset registry.
//!
//! Entities and states refer to textures, animations and sounds by string
//! key. Loading the actual files is the front end's job; the core only needs
//! to know which keys exist and the few numbers it simulates with (texture
//! sizes, animation frame counts). Every lookup returns
//! [`AssetError::NotFound`] for an unknown key, so a typo fails the frame
//! instead of silently drawing nothing.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{AssetError, AssetKind};
use crate::resources::formation::{EntityKind, PatternKind};

/// Size of a loaded texture in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureInfo {
    pub width: f32,
    pub height: f32,
}

impl TextureInfo {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Immutable data describing a keyed animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Number of frames in the animation.
    pub frame_count: usize,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

impl AnimationResource {
    pub fn new(frame_count: usize, fps: f32, looped: bool) -> Self {
        Self {
            frame_count,
            fps,
            looped,
        }
    }

    /// Playback length of one pass in seconds.
    pub fn duration(&self) -> f32 {
        if self.fps > 0.0 {
            self.frame_count as f32 / self.fps
        } else {
            0.0
        }
    }
}

/// Central registry of textures, animations and sound ids.
#[derive(Debug, Default)]
pub struct AssetStore {
    textures: FxHashMap<String, TextureInfo>,
    animations: FxHashMap<String, AnimationResource>,
    sounds: FxHashSet<String>,
    ready: bool,
}

impl AssetStore {
    /// Empty store, not ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with every key the shipped game uses, marked ready.
    pub fn builtin() -> Self {
        let mut store = Self::new();

        store.add_animation("player/normal", AnimationResource::new(8, 16.0, false));
        store.add_animation("player/left", AnimationResource::new(8, 16.0, false));
        store.add_animation("player/right", AnimationResource::new(8, 16.0, false));
        store.add_animation("player/die", AnimationResource::new(12, 24.0, false));

        for pattern in PatternKind::ALL {
            store.add_animation(pattern.animation_key(), AnimationResource::new(60, 30.0, true));
        }

        store.add_animation("blast/blue", AnimationResource::new(4, 20.0, false));
        store.add_animation("blast/red", AnimationResource::new(4, 20.0, false));
        store.add_animation("tracer/blue", AnimationResource::new(10, 30.0, false));
        store.add_animation("powerup/spin", AnimationResource::new(16, 20.0, true));

        for kind in EntityKind::ALL {
            store.add_texture(kind.texture_key(), TextureInfo::new(40.0, 40.0));
        }

        for sound in [
            "explosion 1",
            "explosion 2",
            "explosion 3",
            "powerup",
            "bullet 1",
            "coin",
        ] {
            store.add_sound(sound);
        }

        store.ready = true;
        store
    }

    pub fn add_texture(&mut self, key: impl Into<String>, info: TextureInfo) {
        self.textures.insert(key.into(), info);
    }

    pub fn add_animation(&mut self, key: impl Into<String>, resource: AnimationResource) {
        self.animations.insert(key.into(), resource);
    }

    pub fn add_sound(&mut self, key: impl Into<String>) {
        self.sounds.insert(key.into());
    }

    pub fn texture(&self, key: &str) -> Result<&TextureInfo, AssetError> {
        self.textures
            .get(key)
            .ok_or_else(|| not_found(AssetKind::Texture, key))
    }

    pub fn animation(&self, key: &str) -> Result<&AnimationResource, AssetError> {
        self.animations
            .get(key)
            .ok_or_else(|| not_found(AssetKind::Animation, key))
    }

    /// Validate a sound id and hand back the registered key.
    pub fn sound(&self, key: &str) -> Result<&str, AssetError> {
        self.sounds
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| not_found(AssetKind::Sound, key))
    }

    /// Whether the front end has finished populating the store.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }
}

fn not_found(kind: AssetKind, key: &str) -> AssetError {
    AssetError::NotFound {
        kind,
        key: key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reports_kind_and_key() {
        let store = AssetStore::new();
        let err = store.animation("enemy/wave").unwrap_err();
        assert_eq!(
            err,
            AssetError::NotFound {
                kind: AssetKind::Animation,
                key: "enemy/wave".to_string()
            }
        );
        assert_eq!(err.to_string(), "animation resource not found: enemy/wave");
    }

    #[test]
    fn test_builtin_covers_gameplay_keys() {
        let store = AssetStore::builtin();
        assert!(store.is_ready());
        assert!(store.animation("player/die").is_ok());
        assert!(store.animation("enemy/spiral_ccw").is_ok());
        assert!(store.texture("editor/star").is_ok());
        assert_eq!(store.sound("explosion 2"), Ok("explosion 2"));
        assert!(store.sound("explosion 4").is_err());
    }

    #[test]
    fn test_new_store_is_not_ready() {
        let mut store = AssetStore::new();
        assert!(!store.is_ready());
        store.set_ready(true);
        assert!(store.is_ready());
    }

    #[test]
    fn test_animation_duration() {
        let res = AnimationResource::new(12, 24.0, false);
        assert!((res.duration() - 0.5).abs() < 1e-6);
        assert_eq!(AnimationResource::new(3, 0.0, true).duration(), 0.0);
    }
}
