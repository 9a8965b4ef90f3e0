//! Time update system.
//!
//! Advances [`WorldTime`](crate::resources::worldtime::WorldTime) once per
//! drained fixed step, applying `time_scale` to the step length.

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds and return the scaled delta.
///
/// `dt` is expected to be the unscaled fixed step in seconds.
pub fn update_world_time(time: &mut WorldTime, dt: f32) -> f32 {
    let scaled_dt = dt * time.time_scale;
    time.elapsed += scaled_dt;
    time.delta = scaled_dt;
    scaled_dt
}
