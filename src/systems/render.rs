//! Built-in visuals.
//!
//! [`draw_visual`] draws the textured and animated visuals of one entity.
//! Both are placed at the interpolated position `position + velocity * alpha`,
//! where `alpha` is the lag fraction handed to the draw pass.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::animation::Animation;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::error::AssetError;
use crate::geometry::Rectangle;
use crate::resources::assetstore::AssetStore;
use crate::surface::Surface;

/// Visual position of `entity` for interpolation fraction `alpha`.
pub fn interpolated_position(world: &World, entity: Entity, alpha: f32) -> Vec2 {
    let position = world
        .get::<MapPosition>(entity)
        .map_or(Vec2::ZERO, |p| p.pos);
    let velocity = world
        .get::<RigidBody>(entity)
        .map_or(Vec2::ZERO, |body| body.velocity);
    position + velocity * alpha
}

/// Draw the sprite and/or animation of `entity`.
///
/// Fails when a texture or animation key is not registered.
pub fn draw_visual(
    world: &World,
    entity: Entity,
    assets: &AssetStore,
    surface: &mut dyn Surface,
    alpha: f32,
) -> Result<(), AssetError> {
    let position = interpolated_position(world, entity, alpha);

    if let Some(sprite) = world.get::<Sprite>(entity) {
        assets.texture(&sprite.tex_key)?;
        let dest = Rectangle::new(
            position.x - sprite.origin.x,
            position.y - sprite.origin.y,
            sprite.width,
            sprite.height,
        );
        surface.draw_texture(
            &sprite.tex_key,
            dest,
            sprite.origin,
            sprite.rotation,
            sprite.tint,
        );
    }

    if let Some(animation) = world.get::<Animation>(entity) {
        assets.animation(&animation.animation_key)?;
        surface.draw_skeleton(&animation.animation_key, animation.frame_index, position);
    }

    Ok(())
}
