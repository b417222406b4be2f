use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

use crate::components::sprite::SpriteSheet;

/// Loaded sprite frames keyed by sheet and 1-based frame number.
#[derive(Resource, Default)]
pub struct TextureStore {
    pub map: FxHashMap<(SpriteSheet, u8), Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sheet: SpriteSheet, frame: u8, texture: Texture2D) {
        self.map.insert((sheet, frame), texture);
    }

    pub fn get(&self, sheet: SpriteSheet, frame: u8) -> Option<&Texture2D> {
        self.map.get(&(sheet, frame))
    }
}
