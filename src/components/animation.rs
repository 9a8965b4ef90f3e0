use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::resources::assetstore::AnimationResource;

/// Animated visual: playback state of a keyed animation.
///
/// The definition (frame count, fps, looping) lives in the
/// [`AssetStore`](crate::resources::assetstore::AssetStore). A non-looping
/// animation stays on its last frame and reports `finished`.
#[derive(Debug, Clone, Component, Serialize, Deserialize, PartialEq)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
    pub finished: bool,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
            finished: false,
        }
    }

    /// Switch to `animation_key` from its first frame. Setting the key that is
    /// already playing keeps the current playback.
    pub fn set(&mut self, animation_key: &str) {
        if self.animation_key != animation_key {
            *self = Self::new(animation_key);
        }
    }

    pub fn is(&self, animation_key: &str) -> bool {
        self.animation_key == animation_key
    }

    /// Advance playback by `dt` seconds.
    pub fn advance(&mut self, resource: &AnimationResource, dt: f32) {
        if self.finished {
            return;
        }
        if resource.frame_count == 0 {
            self.finished = true;
            return;
        }
        if resource.fps <= 0.0 {
            return;
        }
        self.elapsed_time += dt;

        let frame_duration = 1.0 / resource.fps;
        while self.elapsed_time >= frame_duration {
            self.elapsed_time -= frame_duration;
            self.frame_index += 1;

            if self.frame_index >= resource.frame_count {
                if resource.looped {
                    self.frame_index = 0;
                } else {
                    self.frame_index = resource.frame_count - 1; // stay on last frame
                    self.finished = true;
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(frame_count: usize, fps: f32, looped: bool) -> AnimationResource {
        AnimationResource {
            frame_count,
            fps,
            looped,
        }
    }

    #[test]
    fn test_advance_moves_one_frame_per_duration() {
        let mut anim = Animation::new("walk");
        let res = resource(4, 10.0, true);
        anim.advance(&res, 0.05);
        assert_eq!(anim.frame_index, 0);
        anim.advance(&res, 0.06);
        assert_eq!(anim.frame_index, 1);
    }

    #[test]
    fn test_looped_wraps_to_first_frame() {
        let mut anim = Animation::new("spin");
        let res = resource(2, 10.0, true);
        anim.advance(&res, 0.25);
        assert_eq!(anim.frame_index, 0);
        assert!(!anim.finished);
    }

    #[test]
    fn test_non_looped_stays_on_last_frame() {
        let mut anim = Animation::new("die");
        let res = resource(3, 10.0, false);
        anim.advance(&res, 1.0);
        assert_eq!(anim.frame_index, 2);
        assert!(anim.finished);
        anim.advance(&res, 1.0);
        assert_eq!(anim.frame_index, 2);
    }

    #[test]
    fn test_set_restarts_only_on_new_key() {
        let mut anim = Animation::new("left");
        anim.frame_index = 3;
        anim.set("left");
        assert_eq!(anim.frame_index, 3);
        anim.set("right");
        assert_eq!(anim.frame_index, 0);
        assert!(anim.is("right"));
    }
}
