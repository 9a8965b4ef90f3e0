//! Formation editor.
//!
//! Keeps an in-memory list of spawn records laid out on a playfield-sized
//! canvas. The primary pointer places a record, or drags the one under it;
//! the secondary pointer removes the record under it. Left/Right pick the
//! pattern, Up/Down the enemy kind, Confirm saves under the current name.

use glam::Vec2;
use log::{info, warn};

use crate::context::AppContext;
use crate::error::{FormationError, HookResult};
use crate::geometry::Rectangle;
use crate::resources::formation::{EntityKind, PatternKind, SpawnRecord};
use crate::resources::input::InputAction;
use crate::state::State;
use crate::states::MENU;
use crate::surface::{Color, Surface};

/// Side of the square icon a record is drawn and picked with.
pub const ICON_SIZE: f32 = 40.0;
pub const DEFAULT_NAME: &str = "formation";

pub struct EditorState {
    records: Vec<SpawnRecord>,
    kind: EntityKind,
    pattern: PatternKind,
    dragging: Option<usize>,
    name: String,
    canvas: Vec2,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            kind: EntityKind::Diamond,
            pattern: PatternKind::Normal,
            dragging: None,
            name: String::new(),
            canvas: Vec2::new(800.0, 600.0),
        }
    }

    pub fn records(&self) -> &[SpawnRecord] {
        &self.records
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: EntityKind) {
        self.kind = kind;
    }

    pub fn pattern(&self) -> PatternKind {
        self.pattern
    }

    pub fn set_pattern(&mut self, pattern: PatternKind) {
        self.pattern = pattern;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_canvas(&mut self, canvas: Vec2) {
        self.canvas = canvas;
    }

    fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(Vec2::ZERO, self.canvas)
    }

    /// Add a record of the current kind and pattern at `point`, clamped to the
    /// canvas. Returns its index.
    pub fn place(&mut self, point: Vec2) -> usize {
        let point = self.clamp(point);
        self.records
            .push(SpawnRecord::new(self.kind, self.pattern, point.x, point.y));
        self.records.len() - 1
    }

    /// Index of the topmost (last placed) record whose icon contains `point`.
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        let half = ICON_SIZE * 0.5;
        self.records.iter().rposition(|record| {
            point.x > record.x - half
                && point.x < record.x + half
                && point.y > record.y - half
                && point.y < record.y + half
        })
    }

    /// Move record `index` to `point`, clamped to the canvas.
    pub fn move_record(&mut self, index: usize, point: Vec2) -> bool {
        let point = self.clamp(point);
        let Some(record) = self.records.get_mut(index) else {
            return false;
        };
        record.x = point.x;
        record.y = point.y;
        true
    }

    /// Remove the topmost record under `point`.
    pub fn remove_at(&mut self, point: Vec2) -> Option<SpawnRecord> {
        let index = self.hit_test(point)?;
        self.dragging = None;
        Some(self.records.remove(index))
    }

    /// Drop every record and forget the current name.
    pub fn clear(&mut self) {
        self.records.clear();
        self.dragging = None;
        self.name.clear();
    }

    /// Write the records as formation `name` and make it the current name.
    pub fn save(&mut self, name: &str, ctx: &mut AppContext) -> Result<(), FormationError> {
        ctx.formations.save(name, &self.records)?;
        self.name = name.to_string();
        Ok(())
    }

    /// Replace the records with formation `name`.
    pub fn load(&mut self, name: &str, ctx: &mut AppContext) -> Result<(), FormationError> {
        self.records = ctx.formations.load(name)?;
        self.dragging = None;
        self.name = name.to_string();
        Ok(())
    }

    fn handle_pointer(&mut self, ctx: &AppContext) {
        let input = &ctx.input;
        let pointer = input.pointer();

        if input.just_pressed(InputAction::PointerPrimary) {
            self.dragging = self.hit_test(pointer);
            if self.dragging.is_none() {
                self.place(pointer);
            }
        } else if input.is_down(InputAction::PointerPrimary) {
            if let Some(index) = self.dragging {
                self.move_record(index, pointer);
            }
        } else {
            self.dragging = None;
        }

        if input.just_pressed(InputAction::PointerSecondary) {
            self.remove_at(pointer);
        }
    }

    fn handle_palette(&mut self, ctx: &AppContext) {
        let input = &ctx.input;
        if input.just_pressed(InputAction::Left) {
            self.pattern = self.pattern.previous();
        } else if input.just_pressed(InputAction::Right) {
            self.pattern = self.pattern.next();
        }
        if input.just_pressed(InputAction::Up) {
            self.kind = self.kind.previous();
        } else if input.just_pressed(InputAction::Down) {
            self.kind = self.kind.next();
        }
    }
}

impl State for EditorState {
    fn start(&mut self, ctx: &mut AppContext) -> HookResult {
        self.records.clear();
        self.dragging = None;
        self.name.clear();
        self.canvas = ctx.config.playfield();
        Ok(())
    }

    fn step(&mut self, ctx: &mut AppContext, _dt: f32) -> HookResult {
        self.handle_pointer(ctx);
        self.handle_palette(ctx);

        if ctx.input.just_pressed(InputAction::Confirm) {
            let name = if self.name.is_empty() {
                DEFAULT_NAME.to_string()
            } else {
                self.name.clone()
            };
            match self.save(&name, ctx) {
                Ok(()) => info!("Formation {} saved ({} records)", name, self.records.len()),
                Err(err) => warn!("Could not save formation {}: {}", name, err),
            }
        }

        if ctx.input.just_pressed(InputAction::Back) {
            ctx.request_state(Some(MENU));
        }
        Ok(())
    }

    fn draw(&mut self, _ctx: &mut AppContext, surface: &mut dyn Surface, _alpha: f32) -> HookResult {
        surface.draw_rectangle_lines(
            Rectangle::new(0.0, 0.0, self.canvas.x, self.canvas.y),
            Color::GRAY,
        );

        let half = ICON_SIZE * 0.5;
        for record in &self.records {
            let dest = Rectangle::new(record.x - half, record.y - half, ICON_SIZE, ICON_SIZE);
            surface.draw_texture(
                &record.entity.texture_key(),
                dest,
                Vec2::ZERO,
                0.0,
                Color::WHITE,
            );
            surface.draw_text(
                record.pattern.name(),
                Vec2::new(record.x, record.y),
                10.0,
                Color::SKYBLUE,
            );
        }

        surface.draw_text(
            &format!("{} / {}", self.kind.name(), self.pattern.name()),
            Vec2::new(10.0, self.canvas.y - 20.0),
            16.0,
            Color::WHITE,
        );
        Ok(())
    }

    fn stop(&mut self, _ctx: &mut AppContext) -> HookResult {
        self.dragging = None;
        Ok(())
    }
}
