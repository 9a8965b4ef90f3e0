//! Enemy formations.
//!
//! A formation is one wave: an ordered list of [`SpawnRecord`]s, stored as a
//! JSON array in `<dir>/<name>.json`:
//!
//! ```json
//! [
//!   { "entity": "STAR", "pattern": "WAVE", "x": 120.0, "y": 40.0 },
//!   { "entity": "U", "pattern": "DIVE", "x": 400.0, "y": 80.0 }
//! ]
//! ```
//!
//! The editor writes these files and the game state reads them back through
//! [`FormationStore::next_wave`]. Record coordinates are relative to the top
//! edge of the playfield; the game adds the playfield height when spawning.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::FormationError;

/// Enemy shapes. Each one has its own health, coin value and fire rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Diamond,
    Heptagon,
    Rectangle,
    Square,
    Star,
    Triangle,
    U,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Diamond,
        EntityKind::Heptagon,
        EntityKind::Rectangle,
        EntityKind::Square,
        EntityKind::Star,
        EntityKind::Triangle,
        EntityKind::U,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Diamond => "diamond",
            EntityKind::Heptagon => "heptagon",
            EntityKind::Rectangle => "rectangle",
            EntityKind::Square => "square",
            EntityKind::Star => "star",
            EntityKind::Triangle => "triangle",
            EntityKind::U => "u",
        }
    }

    /// Icon drawn by the editor.
    pub fn texture_key(&self) -> String {
        format!("editor/{}", self.name())
    }

    /// Next kind in [`EntityKind::ALL`], wrapping around.
    pub fn next(&self) -> Self {
        cycle(&Self::ALL, *self, 1)
    }

    pub fn previous(&self) -> Self {
        cycle(&Self::ALL, *self, Self::ALL.len() - 1)
    }
}

/// Flight patterns. A pattern only selects the enemy's animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatternKind {
    Ccw,
    Cw,
    DiamondCcw,
    DiamondCw,
    Dive,
    Left,
    Right,
    Normal,
    SpiralCcw,
    SpiralCw,
    Wave,
}

impl PatternKind {
    pub const ALL: [PatternKind; 11] = [
        PatternKind::Ccw,
        PatternKind::Cw,
        PatternKind::DiamondCcw,
        PatternKind::DiamondCw,
        PatternKind::Dive,
        PatternKind::Left,
        PatternKind::Right,
        PatternKind::Normal,
        PatternKind::SpiralCcw,
        PatternKind::SpiralCw,
        PatternKind::Wave,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Ccw => "ccw",
            PatternKind::Cw => "cw",
            PatternKind::DiamondCcw => "diamond_ccw",
            PatternKind::DiamondCw => "diamond_cw",
            PatternKind::Dive => "dive",
            PatternKind::Left => "left",
            PatternKind::Right => "right",
            PatternKind::Normal => "normal",
            PatternKind::SpiralCcw => "spiral_ccw",
            PatternKind::SpiralCw => "spiral_cw",
            PatternKind::Wave => "wave",
        }
    }

    pub fn animation_key(&self) -> String {
        format!("enemy/{}", self.name())
    }

    pub fn next(&self) -> Self {
        cycle(&Self::ALL, *self, 1)
    }

    pub fn previous(&self) -> Self {
        cycle(&Self::ALL, *self, Self::ALL.len() - 1)
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, offset: usize) -> T {
    let index = all.iter().position(|item| *item == current).unwrap_or(0);
    all[(index + offset) % all.len()]
}

/// One enemy of a formation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRecord {
    #[serde(alias = "entityType")]
    pub entity: EntityKind,
    #[serde(alias = "patternType")]
    pub pattern: PatternKind,
    pub x: f32,
    pub y: f32,
}

impl SpawnRecord {
    pub fn new(entity: EntityKind, pattern: PatternKind, x: f32, y: f32) -> Self {
        Self {
            entity,
            pattern,
            x,
            y,
        }
    }
}

/// How [`FormationStore::next_wave`] picks a formation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Uniformly random among the known formations.
    #[default]
    Random,
    /// Known formations in name order, wrapping around.
    Sequential,
    /// Always the given formation.
    Named(String),
}

/// Formation cache backed by an optional directory.
#[derive(Debug, Default)]
pub struct FormationStore {
    dir: Option<PathBuf>,
    formations: BTreeMap<String, Vec<SpawnRecord>>,
    cursor: usize,
}

impl FormationStore {
    /// Store without a directory; formations only come from [`insert`](Self::insert).
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Store reading and writing `dir`. Nothing is read until
    /// [`load_dir`](Self::load_dir) or [`load`](Self::load).
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
            ..Self::default()
        }
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Read every `*.json` file of the directory into the cache.
    ///
    /// Files that cannot be read or parsed are skipped with a warning.
    /// Returns the number of formations loaded.
    pub fn load_dir(&mut self) -> Result<usize, FormationError> {
        let dir = self.dir.clone().ok_or(FormationError::NoDirectory)?;
        let entries = std::fs::read_dir(&dir).map_err(|source| FormationError::Io {
            path: dir.display().to_string(),
            source,
        })?;

        let mut loaded = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            match read_formation(&path, name) {
                Ok(records) => {
                    self.formations.insert(name.to_string(), records);
                    loaded += 1;
                }
                Err(err) => warn!("Skipping formation file {:?}: {}", path, err),
            }
        }

        info!("Loaded {} formations from {:?}", loaded, dir);
        Ok(loaded)
    }

    /// Names of the cached formations, sorted.
    pub fn list(&self) -> Vec<String> {
        self.formations.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.formations.is_empty()
    }

    /// Records of formation `name`, reading `<dir>/<name>.json` on a cache miss.
    pub fn load(&mut self, name: &str) -> Result<Vec<SpawnRecord>, FormationError> {
        if let Some(records) = self.formations.get(name) {
            return Ok(records.clone());
        }
        let Some(dir) = self.dir.as_ref() else {
            return Err(FormationError::NotFound(name.to_string()));
        };
        let path = formation_path(dir, name)?;
        if !path.is_file() {
            return Err(FormationError::NotFound(name.to_string()));
        }
        let records = read_formation(&path, name)?;
        info!("Loaded formation {} ({} records)", name, records.len());
        self.formations.insert(name.to_string(), records.clone());
        Ok(records)
    }

    /// Write formation `name` to the directory and cache it.
    pub fn save(&mut self, name: &str, records: &[SpawnRecord]) -> Result<(), FormationError> {
        let dir = self.dir.as_ref().ok_or(FormationError::NoDirectory)?;
        let path = formation_path(dir, name)?;
        std::fs::create_dir_all(dir).map_err(|source| FormationError::Io {
            path: dir.display().to_string(),
            source,
        })?;

        let json = serde_json::to_string_pretty(records).map_err(|source| {
            FormationError::Parse {
                name: name.to_string(),
                source,
            }
        })?;
        std::fs::write(&path, json).map_err(|source| FormationError::Io {
            path: path.display().to_string(),
            source,
        })?;

        info!("Saved formation {} ({} records) to {:?}", name, records.len(), path);
        self.formations.insert(name.to_string(), records.to_vec());
        Ok(())
    }

    /// Cache a formation without touching the directory.
    pub fn insert(&mut self, name: impl Into<String>, records: Vec<SpawnRecord>) {
        self.formations.insert(name.into(), records);
    }

    /// Records of the next wave. Empty when no formation is known.
    pub fn next_wave(
        &mut self,
        policy: &SelectionPolicy,
    ) -> Result<Vec<SpawnRecord>, FormationError> {
        match policy {
            SelectionPolicy::Named(name) => self.load(name),
            SelectionPolicy::Random => {
                if self.formations.is_empty() {
                    return Ok(Vec::new());
                }
                let index = fastrand::usize(..self.formations.len());
                Ok(self
                    .formations
                    .values()
                    .nth(index)
                    .cloned()
                    .unwrap_or_default())
            }
            SelectionPolicy::Sequential => {
                if self.formations.is_empty() {
                    return Ok(Vec::new());
                }
                let index = self.cursor % self.formations.len();
                self.cursor = self.cursor.wrapping_add(1);
                Ok(self
                    .formations
                    .values()
                    .nth(index)
                    .cloned()
                    .unwrap_or_default())
            }
        }
    }
}

/// `<dir>/<name>.json`. Names must stay inside `dir`.
fn formation_path(dir: &Path, name: &str) -> Result<PathBuf, FormationError> {
    if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
        return Err(FormationError::NotFound(name.to_string()));
    }
    Ok(dir.join(format!("{}.json", name)))
}

fn read_formation(path: &Path, name: &str) -> Result<Vec<SpawnRecord>, FormationError> {
    let content = std::fs::read_to_string(path).map_err(|source| FormationError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| FormationError::Parse {
        name: name.to_string(),
        source,
    })
}
