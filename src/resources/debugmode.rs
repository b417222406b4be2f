//! Debug toggle resource.
//!
//! The mere presence of this resource enables the collision box overlay.
//! Remove it to disable debug drawing.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer outlines every collider.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
