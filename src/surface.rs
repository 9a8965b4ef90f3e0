//! Render surface boundary.
//!
//! The simulation core never talks to a graphics API. States and entities
//! draw through the [`Surface`] trait; a windowed front end implements it on
//! top of its renderer. [`RecordingSurface`] keeps the calls in memory and is
//! what the headless binary and the tests draw into.

use glam::Vec2;

use crate::geometry::Rectangle;

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const RED: Color = Color::new(230, 41, 55, 255);
    pub const YELLOW: Color = Color::new(253, 249, 0, 255);
    pub const GRAY: Color = Color::new(130, 130, 130, 255);
    pub const SKYBLUE: Color = Color::new(102, 191, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Drawing operations the core needs from a renderer.
pub trait Surface {
    /// Draw `texture` stretched over `dest`, pivoting around `origin`
    /// (relative to `dest`'s corner) by `rotation` degrees.
    fn draw_texture(
        &mut self,
        texture: &str,
        dest: Rectangle,
        origin: Vec2,
        rotation: f32,
        tint: Color,
    );

    /// Draw frame `frame` of the skeletal animation `animation` at `position`.
    fn draw_skeleton(&mut self, animation: &str, frame: usize, position: Vec2);

    fn draw_rectangle_lines(&mut self, rect: Rectangle, color: Color);

    fn draw_text(&mut self, text: &str, position: Vec2, size: f32, color: Color);
}

/// One captured draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Texture {
        texture: String,
        dest: Rectangle,
        origin: Vec2,
        rotation: f32,
        tint: Color,
    },
    Skeleton {
        animation: String,
        frame: usize,
        position: Vec2,
    },
    RectangleLines {
        rect: Rectangle,
        color: Color,
    },
    Text {
        text: String,
        position: Vec2,
        size: f32,
        color: Color,
    },
}

/// Surface that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Text of every `draw_text` call, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Animation keys of every `draw_skeleton` call, in order.
    pub fn skeletons(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Skeleton { animation, .. } => Some(animation.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn draw_texture(
        &mut self,
        texture: &str,
        dest: Rectangle,
        origin: Vec2,
        rotation: f32,
        tint: Color,
    ) {
        self.calls.push(DrawCall::Texture {
            texture: texture.to_string(),
            dest,
            origin,
            rotation,
            tint,
        });
    }

    fn draw_skeleton(&mut self, animation: &str, frame: usize, position: Vec2) {
        self.calls.push(DrawCall::Skeleton {
            animation: animation.to_string(),
            frame,
            position,
        });
    }

    fn draw_rectangle_lines(&mut self, rect: Rectangle, color: Color) {
        self.calls.push(DrawCall::RectangleLines { rect, color });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, size: f32, color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            position,
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_keeps_call_order() {
        let mut surface = RecordingSurface::new();
        surface.draw_text("score", Vec2::ZERO, 20.0, Color::WHITE);
        surface.draw_skeleton("player/normal", 2, Vec2::new(1.0, 2.0));
        surface.draw_text("hi", Vec2::ZERO, 20.0, Color::WHITE);

        assert_eq!(surface.len(), 3);
        assert_eq!(surface.texts(), vec!["score", "hi"]);
        assert_eq!(surface.skeletons(), vec!["player/normal"]);

        surface.clear();
        assert!(surface.is_empty());
    }
}
