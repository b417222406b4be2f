//! Sprite sheets and the per-entity sprite.

use bevy_ecs::prelude::Component;

/// Image sets shipped with the game. Each sheet is a numbered list of frames
/// stored as `<stem><n>.png` (or `<stem>.png` for single-frame sheets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteSheet {
    Background,
    Enemy,
    Player,
    Man,
    Woman,
    Heart,
    Line,
    SafeZone,
    Rod,
    Effect,
}

impl SpriteSheet {
    pub const ALL: [SpriteSheet; 10] = [
        SpriteSheet::Background,
        SpriteSheet::Enemy,
        SpriteSheet::Player,
        SpriteSheet::Man,
        SpriteSheet::Woman,
        SpriteSheet::Heart,
        SpriteSheet::Line,
        SpriteSheet::SafeZone,
        SpriteSheet::Rod,
        SpriteSheet::Effect,
    ];

    pub fn stem(&self) -> &'static str {
        match self {
            SpriteSheet::Background => "background",
            SpriteSheet::Enemy => "enemy",
            SpriteSheet::Player => "player",
            SpriteSheet::Man => "man",
            SpriteSheet::Woman => "woman",
            SpriteSheet::Heart => "heart",
            SpriteSheet::Line => "line",
            SpriteSheet::SafeZone => "line_safe_zone",
            SpriteSheet::Rod => "rod",
            SpriteSheet::Effect => "effect",
        }
    }

    pub fn frame_count(&self) -> u8 {
        match self {
            SpriteSheet::Enemy | SpriteSheet::Heart => 2,
            SpriteSheet::Player | SpriteSheet::Man | SpriteSheet::Woman => 3,
            SpriteSheet::Effect => 5,
            SpriteSheet::Background | SpriteSheet::Line | SpriteSheet::SafeZone | SpriteSheet::Rod => 1,
        }
    }

    /// Relative file name of `frame` (1-based).
    pub fn file_name(&self, frame: u8) -> String {
        if self.frame_count() == 1 {
            format!("{}.png", self.stem())
        } else {
            format!("{}{}.png", self.stem(), frame)
        }
    }

    /// Size of the shipped art, used when no texture is loaded (headless runs).
    pub fn nominal_size(&self) -> (f32, f32) {
        match self {
            SpriteSheet::Background => (640.0, 900.0),
            SpriteSheet::Enemy => (64.0, 96.0),
            SpriteSheet::Player | SpriteSheet::Man | SpriteSheet::Woman => (24.0, 36.0),
            SpriteSheet::Heart => (44.0, 40.0),
            SpriteSheet::Line => (620.0, 10.0),
            SpriteSheet::SafeZone => (40.0, 10.0),
            SpriteSheet::Rod => (6.0, 22.0),
            SpriteSheet::Effect => (18.0, 18.0),
        }
    }
}

/// Sprite drawn at the entity's [`MapPosition`](super::mapposition::MapPosition).
///
/// `frame` is the 1-based frame of the sheet selected for this tick; `None`
/// hides the entity.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub sheet: SpriteSheet,
    pub width: f32,
    pub height: f32,
    pub frame: Option<u8>,
}

impl Sprite {
    pub fn new(sheet: SpriteSheet, width: f32, height: f32) -> Self {
        Self {
            sheet,
            width,
            height,
            frame: Some(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_frame_sheets_number_their_files() {
        assert_eq!(SpriteSheet::Player.file_name(3), "player3.png");
        assert_eq!(SpriteSheet::Effect.file_name(1), "effect1.png");
    }

    #[test]
    fn single_frame_sheets_use_the_stem() {
        assert_eq!(SpriteSheet::SafeZone.file_name(1), "line_safe_zone.png");
        assert_eq!(SpriteSheet::Background.file_name(1), "background.png");
    }
}
