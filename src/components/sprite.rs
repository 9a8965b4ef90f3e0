use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::surface::Color;

/// Textured visual: a single texture drawn at the entity position.
///
/// `tex_key` is looked up in the [`AssetStore`](crate::resources::assetstore::AssetStore)
/// every draw so a missing texture fails the frame instead of drawing nothing.
/// `width`/`height` are the size in world units; the origin is the pivot
/// inside that rectangle used for placement and rotation.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub origin: Vec2,
    pub rotation: f32,
    pub tint: Color,
}

impl Sprite {
    /// Sprite pivoting around its center.
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            origin: Vec2::new(width * 0.5, height * 0.5),
            rotation: 0.0,
            tint: Color::WHITE,
        }
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }
}
