//! Axis-aligned collision boxes.
//!
//! A [`BoxCollider`] stores the size of the collision box and its offset from
//! the entity's [`MapPosition`](super::mapposition::MapPosition). Scenery uses
//! the whole sprite box; runners use a narrower box that is horizontally
//! centered and bottom-aligned inside the sprite, so that overlap tests only
//! consider the feet and body rather than the full image.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// A resolved box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open intersection: boxes that only share an edge do not overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Collider covering the whole sprite box.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    /// Collider of a player-like entity: `collider_w` x `collider_h`, centered
    /// horizontally on a `sprite_w` x `sprite_h` sprite and sharing its bottom edge.
    pub fn runner(sprite_w: f32, sprite_h: f32, collider_w: f32, collider_h: f32) -> Self {
        Self {
            size: Vector2::new(collider_w, collider_h),
            offset: Vector2::new(sprite_w / 2.0 - collider_w / 2.0, sprite_h - collider_h),
        }
    }

    /// Bounding box of the entity at `position`.
    pub fn bounding_box(&self, position: Vector2) -> Rect {
        Rect::new(
            position.x + self.offset.x,
            position.y + self.offset.y,
            self.size.x,
            self.size.y,
        )
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        self.bounding_box(position)
            .intersects(&other.bounding_box(other_position))
    }
}
