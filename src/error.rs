//! Error types shared by the simulation core.
//!
//! Hooks on entities and states return [`EngineError`]; the frame driver is
//! the only place that decides whether an error ends the process.

use bevy_ecs::prelude::Entity;
use thiserror::Error;

/// Kind of resource held by the [`AssetStore`](crate::resources::assetstore::AssetStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Texture,
    Animation,
    Sound,
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AssetKind::Texture => "texture",
            AssetKind::Animation => "animation",
            AssetKind::Sound => "sound",
        };
        f.write_str(name)
    }
}

/// Lookup failure in the asset registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("{kind} resource not found: {key}")]
    NotFound { kind: AssetKind, key: String },
}

/// Failures reading or writing formation files.
#[derive(Debug, Error)]
pub enum FormationError {
    #[error("formation not found: {0}")]
    NotFound(String),
    #[error("formation store has no directory configured")]
    NoDirectory,
    #[error("failed to access formation file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse formation {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Umbrella error returned by entity and state hooks.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("state does not exist: {0}")]
    UnknownState(String),
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Formation(#[from] FormationError),
    #[error("entity {entity:?} failed: {message}")]
    Hook { entity: Entity, message: String },
}

impl EngineError {
    /// Build a hook failure for `entity` with a free-form message.
    pub fn hook(entity: Entity, message: impl Into<String>) -> Self {
        EngineError::Hook {
            entity,
            message: message.into(),
        }
    }
}

/// Result alias used by every hook in the crate.
pub type HookResult = Result<(), EngineError>;
