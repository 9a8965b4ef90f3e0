//! Animation playback.
//!
//! The animated visual advances before the entity's own step hook, so a hook
//! that checks [`Animation::finished`] sees the pose of the current step.

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::error::AssetError;
use crate::resources::assetstore::AssetStore;

/// Advance the animation of `entity` by `dt`.
///
/// Fails when the animation key is not registered.
pub fn advance(
    world: &mut World,
    entity: Entity,
    assets: &AssetStore,
    dt: f32,
) -> Result<(), AssetError> {
    let Some(mut animation) = world.get_mut::<Animation>(entity) else {
        return Ok(());
    };
    let resource = assets.animation(&animation.animation_key)?;
    animation.advance(resource, dt);
    Ok(())
}
