use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space position of the top-left corner of an entity's sprite box.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_vec(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}
