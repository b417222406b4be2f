//! Time update system.
//!
//! Updates the shared [`WorldTime`] resource once per tick with the delta
//! measured by the main loop.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Write `dt` (seconds) as the tick delta and accumulate elapsed time.
///
/// Negative deltas are treated as zero.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let dt = dt.max(0.0);
    wt.elapsed += dt;
    wt.delta = dt;
}
