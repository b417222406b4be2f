//! Collision groups.
//!
//! The debug overlay colors each collider by its group.

use bevy_ecs::prelude::Component;

/// Collision group tag. Only the player and the crowd take part in overlap tests.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    Scenery,
    Player,
    Crowd,
}
