//! Raylib rendering.
//!
//! Draws the play field through a [`Camera2D`] whose zoom is the configured
//! window scale, so all game coordinates stay in the fixed 640x900 space.
//! Sprites are drawn back to front by [`RenderLayer`]; scene texts and the
//! HUD go on top, then the optional collider overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::crowd::CrowdMember;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::renderlayer::RenderLayer;
use crate::components::runnerstate::RunnerState;
use crate::components::sprite::{Sprite, SpriteSheet};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::resources::debugmode::DebugMode;
use crate::resources::fontstore::FontStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::roundclock::RoundClock;
use crate::resources::texturestore::TextureStore;

const ACCENT: Color = Color::new(203, 36, 89, 255);
const TITLE_SIZE: f32 = 60.0;
const TEXT_SIZE: f32 = 40.0;
const TIMER_SIZE: f32 = 40.0;
const TIMER_MARGIN: f32 = 220.0;

/// Text lines shown on top of the scene: `(text, font size, y, color)`.
pub fn scene_texts(
    state: &GameStates,
    clock: &RoundClock,
    player: Option<RunnerState>,
) -> Vec<(String, f32, f32, Color)> {
    match state {
        GameStates::Menu => vec![
            ("RED LIGHT, GREEN LIGHT".to_string(), TITLE_SIZE, 200.0, ACCENT),
            ("Start, evade: SPACE".to_string(), TEXT_SIZE, 400.0, Color::BLACK),
            ("Move: arrow keys".to_string(), TEXT_SIZE, 500.0, Color::BLACK),
        ],
        GameStates::Result => {
            let success = player == Some(RunnerState::Success);
            let mut lines = vec![(
                if success { "SUCCESS" } else { "FAILED" }.to_string(),
                TITLE_SIZE,
                200.0,
                ACCENT,
            )];
            if success {
                lines.push((
                    format!("Time left: {:.3}", clock.remaining()),
                    TEXT_SIZE,
                    400.0,
                    Color::BLACK,
                ));
            }
            lines.push(("Replay: SPACE".to_string(), TEXT_SIZE, 500.0, Color::BLACK));
            lines
        }
        _ => Vec::new(),
    }
}

/// Remaining round time as shown by the HUD.
pub fn timer_text(clock: &RoundClock) -> String {
    format!("TIME : {:.2}", clock.remaining())
}

/// Width and height of `text` in `font` at `size`.
fn measure(font: &Font, text: &str, size: f32) -> Vector2 {
    let Ok(c_text) = std::ffi::CString::new(text.as_bytes()) else {
        return Vector2::zero();
    };
    let measured = unsafe { ffi::MeasureTextEx(**font, c_text.as_ptr(), size, 1.0) };
    Vector2::new(measured.x, measured.y)
}

fn group_color(group: Option<&Group>, dead: bool) -> Color {
    match group {
        _ if dead => Color::RED,
        Some(Group::Player) => Color::GREEN,
        Some(Group::Crowd) => Color::ORANGE,
        Some(Group::Scenery) | None => Color::BLUE,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    fonts: NonSend<FontStore>,
    textures: Res<TextureStore>,
    config: Res<GameConfig>,
    state: Res<GameState>,
    clock: Res<RoundClock>,
    sprites: Query<(&Sprite, &MapPosition, &RenderLayer)>,
    colliders: Query<(
        &BoxCollider,
        &MapPosition,
        Option<&Group>,
        Option<&CrowdMember>,
        Option<&Player>,
    )>,
    players: Query<&Player>,
    debug: Option<Res<DebugMode>>,
) {
    let camera = Camera2D {
        target: Vector2::zero(),
        offset: Vector2::zero(),
        rotation: 0.0,
        zoom: config.scale,
    };
    let in_menu = matches!(state.get(), GameStates::Menu);

    // Menu shows only the backdrop and the watching enemy.
    let mut to_draw: Vec<(SpriteSheet, u8, MapPosition, f32, f32, RenderLayer)> = sprites
        .iter()
        .filter_map(|(sprite, pos, layer)| {
            let frame = match (in_menu, sprite.sheet) {
                (true, SpriteSheet::Background) => 1,
                (true, SpriteSheet::Enemy) => 2,
                (true, _) => return None,
                (false, _) => sprite.frame?,
            };
            Some((sprite.sheet, frame, *pos, sprite.width, sprite.height, *layer))
        })
        .collect();
    to_draw.sort_by_key(|(.., layer)| *layer);

    let player_state = players.single().ok().map(|player| player.state);

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::WHITE);
    {
        let mut d2 = d.begin_mode2D(camera);

        for (sheet, frame, pos, width, height, _) in to_draw.iter() {
            if let Some(tex) = textures.get(*sheet, *frame) {
                let src = Rectangle::new(0.0, 0.0, tex.width as f32, tex.height as f32);
                let dest = Rectangle::new(pos.x, pos.y, *width, *height);
                d2.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
            }
        }

        if matches!(state.get(), GameStates::Playing) {
            let text = timer_text(&clock);
            let at = Vector2::new(SCREEN_WIDTH - TIMER_MARGIN, 15.0);
            match fonts.get("timer") {
                Some(font) => d2.draw_text_ex(font, &text, at, TIMER_SIZE, 1.0, ACCENT),
                None => d2.draw_text(&text, at.x as i32, at.y as i32, TIMER_SIZE as i32, ACCENT),
            }
        }

        for (text, size, y, color) in scene_texts(state.get(), &clock, player_state) {
            match fonts.get("text") {
                Some(font) => {
                    let width = measure(font, &text, size).x;
                    let at = Vector2::new((SCREEN_WIDTH - width) / 2.0, y);
                    d2.draw_text_ex(font, &text, at, size, 1.0, color);
                }
                None => d2.draw_text(&text, 20, y as i32, size as i32, color),
            }
        }

        if debug.is_some() {
            for (collider, pos, group, member, player) in colliders.iter() {
                let dead = member.is_some_and(|m| m.state == RunnerState::Dead)
                    || player.is_some_and(|p| p.state == RunnerState::Dead);
                let rect = collider.bounding_box(pos.to_vec());
                d2.draw_rectangle_lines(
                    rect.x as i32,
                    rect.y as i32,
                    rect.w as i32,
                    rect.h as i32,
                    group_color(group, dead),
                );
            }
        }
    }

    if debug.is_some() {
        let text = format!("DEBUG (F11) | FPS: {} | {:?}", d.get_fps(), state.get());
        d.draw_text(&text, 10, (SCREEN_HEIGHT * config.scale) as i32 - 20, 10, Color::BLACK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_text_has_two_decimals() {
        let mut clock = RoundClock::new();
        clock.advance(12.5);
        assert_eq!(timer_text(&clock), "TIME : 67.50");
    }

    #[test]
    fn result_texts_show_remaining_time_only_on_success() {
        let clock = RoundClock::new();
        let won = scene_texts(&GameStates::Result, &clock, Some(RunnerState::Success));
        assert_eq!(won.len(), 3);
        assert_eq!(won[0].0, "SUCCESS");
        assert_eq!(won[1].0, "Time left: 80.000");

        let lost = scene_texts(&GameStates::Result, &clock, Some(RunnerState::Dead));
        assert_eq!(lost.len(), 2);
        assert_eq!(lost[0].0, "FAILED");
    }

    #[test]
    fn playing_has_no_scene_texts() {
        assert!(scene_texts(&GameStates::Playing, &RoundClock::new(), None).is_empty());
    }
}
