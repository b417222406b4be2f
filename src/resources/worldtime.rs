use bevy_ecs::prelude::Resource;

/// Simulation clock. `delta` is the tick delta injected by the main loop.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
}
