//! World assembly: resources, entities, scene hooks and the tick schedule.
//!
//! The round's entities are spawned once by [`spawn_world`] and never
//! despawned; [`reset_round`] puts every one of them back to its initial
//! state whenever the menu is entered.

use std::time::Duration;

use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::{RaylibHandle, RaylibThread};

use crate::components::boxcollider::BoxCollider;
use crate::components::crowd::CrowdMember;
use crate::components::effect::Effect;
use crate::components::enemy::Enemy;
use crate::components::group::Group;
use crate::components::heart::Heart;
use crate::components::mapposition::MapPosition;
use crate::components::player::{Player, start_line_y};
use crate::components::renderlayer::RenderLayer;
use crate::components::rod::{Rod, SafeZone};
use crate::components::runnerstate::RunnerState;
use crate::components::sprite::{Sprite, SpriteSheet};
use crate::consts::{
    CROWD_SIZE, ENEMY_Y, HEART_BOTTOM_OFFSET, ROD_LEFT_X, RUNNER_COLLIDER_HEIGHT,
    RUNNER_COLLIDER_WIDTH, SAFE_ZONE_X, SCREEN_HEIGHT, SCREEN_WIDTH, TRACK_BOTTOM_OFFSET, TRACK_X,
};
use crate::events::audio::{AudioCmd, cues};
use crate::events::effect::effect_observer;
use crate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::audio::AudioBridge;
use crate::resources::fontstore::FontStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::roundclock::RoundClock;
use crate::resources::simrng::SimRng;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::TickSet;
use crate::systems::animation::{effect_animation, heart_animation, sprite_frames};
use crate::systems::collision::collision_response;
use crate::systems::crowd::crowd_controller;
use crate::systems::enemy::enemy_controller;
use crate::systems::gamestate::{check_pending_state, scene_input, state_is_playing};
use crate::systems::player::player_controller;
use crate::systems::rod::rod_controller;
use crate::systems::round::round_clock_system;

/// Vertical gap between the rod's bottom edge and the screen bottom.
const ROD_BOTTOM_GAP: f32 = 3.0;
/// How long setup waits for the audio thread to load every sound.
const SOUND_LOAD_TIMEOUT: Duration = Duration::from_secs(10);
/// The "man" sprite set is used for a random share of the crowd.
const MAN_COUNT_MIN: u32 = 40;
const MAN_COUNT_MAX: u32 = 80;

/// Insert the simulation resources, the observers and the scene hooks.
///
/// Leaves the game in [`GameStates::None`]; nothing is spawned yet.
pub fn init_world(world: &mut World, rng: SimRng) {
    world.insert_resource(WorldTime::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(RoundClock::new());
    world.insert_resource(InputState::default());
    world.insert_resource(rng);
    if !world.contains_resource::<Messages<AudioCmd>>() {
        world.init_resource::<Messages<AudioCmd>>();
    }

    world.add_observer(observe_gamestate_change_event);
    world.add_observer(effect_observer);
    world.add_observer(switch_debug_observer);

    let mut systems_store = SystemsStore::new();
    systems_store.insert("enter_menu", world.register_system(enter_menu));
    systems_store.insert("enter_result", world.register_system(enter_result));
    systems_store.insert("quit_game", world.register_system(quit_game));
    world.insert_resource(systems_store);

    world.flush();
}

/// Request `state` and apply it immediately, running its enter hook.
pub fn request_state(world: &mut World, state: GameStates) {
    world.resource_mut::<NextGameState>().set(state);
    world.trigger(GameStateChangedEvent {});
    world.flush();
}

/// Load every texture, font and sound the game needs.
///
/// Textures and fonts go into [`TextureStore`] and [`FontStore`]; sounds are
/// loaded by the audio thread and this call blocks until all of them have
/// been reported. Any missing asset is an error.
pub fn load_assets(
    world: &mut World,
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
) -> Result<(), String> {
    let config = world.resource::<GameConfig>().clone();

    let mut textures = TextureStore::new();
    for sheet in SpriteSheet::ALL {
        for frame in 1..=sheet.frame_count() {
            let path = config.asset("images").join(sheet.file_name(frame));
            let path = path.to_string_lossy();
            let texture = rl
                .load_texture(thread, &path)
                .map_err(|e| format!("Failed to load texture '{}': {}", path, e))?;
            textures.insert(sheet, frame, texture);
        }
    }
    debug!("{} textures loaded", textures.map.len());
    world.insert_resource(textures);

    let mut fonts = FontStore::new();
    for (id, file) in [("timer", "fonts/LAB디지털.ttf"), ("text", "fonts/DungGeunMo.ttf")] {
        let path = config.asset(file);
        let path = path.to_string_lossy();
        let font = rl
            .load_font(thread, &path)
            .map_err(|e| format!("Failed to load font '{}': {}", path, e))?;
        fonts.add(id, font);
    }
    world.insert_non_send_resource(fonts);

    let bridge = world
        .get_resource::<AudioBridge>()
        .ok_or_else(|| "Audio thread not started".to_string())?;
    for (id, file) in cues::FILES {
        let path = config.asset(file).to_string_lossy().into_owned();
        bridge
            .tx_cmd
            .send(AudioCmd::LoadFx {
                id: id.to_string(),
                path,
            })
            .map_err(|e| format!("Audio thread unavailable: {}", e))?;
    }
    let ids: Vec<&str> = cues::FILES.iter().map(|(id, _)| *id).collect();
    bridge.wait_for_fx(&ids, SOUND_LOAD_TIMEOUT)?;
    bridge
        .tx_cmd
        .send(AudioCmd::MasterVolume { vol: config.volume })
        .map_err(|e| format!("Audio thread unavailable: {}", e))?;

    info!("Assets loaded from {:?}", config.assets_path);
    Ok(())
}

/// Size of a sheet's first frame, or its nominal size when no texture is loaded.
fn sheet_size(world: &World, sheet: SpriteSheet) -> (f32, f32) {
    world
        .get_resource::<TextureStore>()
        .and_then(|store| store.get(sheet, 1))
        .map(|tex| (tex.width as f32, tex.height as f32))
        .unwrap_or_else(|| sheet.nominal_size())
}

fn sprite(world: &World, sheet: SpriteSheet) -> Sprite {
    let (w, h) = sheet_size(world, sheet);
    Sprite::new(sheet, w, h)
}

fn runner_collider(sprite: &Sprite) -> BoxCollider {
    BoxCollider::runner(
        sprite.width,
        sprite.height,
        RUNNER_COLLIDER_WIDTH,
        RUNNER_COLLIDER_HEIGHT,
    )
}

/// Spawn every entity of the round, then put them in their start state.
pub fn spawn_world(world: &mut World) {
    let background = sprite(world, SpriteSheet::Background);
    world.spawn((background, MapPosition::new(0.0, 0.0), RenderLayer::Back));

    let heart = sprite(world, SpriteSheet::Heart);
    world.spawn((
        Heart::default(),
        heart,
        MapPosition::new(0.0, SCREEN_HEIGHT - HEART_BOTTOM_OFFSET),
        RenderLayer::UiFront,
    ));

    let line = sprite(world, SpriteSheet::Line);
    world.spawn((
        line,
        MapPosition::new(TRACK_X, SCREEN_HEIGHT - TRACK_BOTTOM_OFFSET),
        RenderLayer::UiBack,
    ));

    let zone = sprite(world, SpriteSheet::SafeZone);
    let zone_collider = BoxCollider::new(zone.width, zone.height);
    world.spawn((
        SafeZone,
        zone,
        zone_collider,
        Group::Scenery,
        MapPosition::new(SAFE_ZONE_X, SCREEN_HEIGHT - TRACK_BOTTOM_OFFSET),
        RenderLayer::UiBack,
    ));

    let rod = sprite(world, SpriteSheet::Rod);
    let rod_y = SCREEN_HEIGHT - rod.height - ROD_BOTTOM_GAP;
    let rod_collider = BoxCollider::new(rod.width, rod.height);
    world.spawn((
        Rod::new(),
        rod,
        rod_collider,
        Group::Scenery,
        MapPosition::new(ROD_LEFT_X, rod_y),
        RenderLayer::UiMiddle,
    ));

    let mut effect = sprite(world, SpriteSheet::Effect);
    effect.frame = None;
    world.spawn((
        Effect::default(),
        effect,
        MapPosition::new(0.0, 0.0),
        RenderLayer::UiMiddle,
    ));

    let enemy = sprite(world, SpriteSheet::Enemy);
    let enemy_x = SCREEN_WIDTH / 2.0 - enemy.width / 2.0;
    world.spawn((
        Enemy::new(),
        enemy,
        MapPosition::new(enemy_x, ENEMY_Y),
        RenderLayer::Middle,
    ));

    let player = sprite(world, SpriteSheet::Player);
    let player_collider = runner_collider(&player);
    world.spawn((
        Player::new(),
        player,
        player_collider,
        Group::Player,
        MapPosition::new(0.0, 0.0),
        RenderLayer::Front2,
    ));

    let man_count = world
        .resource_mut::<SimRng>()
        .0
        .u32(MAN_COUNT_MIN..=MAN_COUNT_MAX) as usize;
    debug!("crowd: {} men, {} women", man_count, CROWD_SIZE - man_count);
    for i in 0..CROWD_SIZE {
        let sheet = if i < man_count {
            SpriteSheet::Man
        } else {
            SpriteSheet::Woman
        };
        let member = sprite(world, sheet);
        let member_collider = runner_collider(&member);
        world.spawn((
            CrowdMember::new(),
            member,
            member_collider,
            Group::Crowd,
            MapPosition::new(0.0, 0.0),
            RenderLayer::Front1,
        ));
    }

    reset_round(world);
}

/// Put the round back to its start: clock, enemy, runners, rod and
/// indicators. Crowd members get fresh random positions on the start line.
pub fn reset_round(world: &mut World) {
    world.resource_mut::<RoundClock>().reset();

    let mut enemies = world.query::<&mut Enemy>();
    for mut enemy in enemies.iter_mut(world) {
        *enemy = Enemy::new();
    }

    let mut players = world.query::<(&mut Player, &mut MapPosition, &Sprite)>();
    for (mut player, mut pos, sprite) in players.iter_mut(world) {
        *player = Player::new();
        pos.x = SCREEN_WIDTH / 2.0 - sprite.width / 2.0;
        pos.y = start_line_y(sprite.height);
    }

    world.resource_scope(|world, mut rng: Mut<SimRng>| {
        let mut crowd = world.query::<(&mut CrowdMember, &mut MapPosition, &Sprite)>();
        for (mut member, mut pos, sprite) in crowd.iter_mut(world) {
            *member = CrowdMember::new();
            let max_x = (SCREEN_WIDTH - sprite.width).max(0.0) as u32;
            pos.x = rng.0.u32(0..=max_x) as f32;
            pos.y = start_line_y(sprite.height);
        }
    });

    let mut rods = world.query::<(&mut Rod, &mut MapPosition)>();
    for (mut rod, mut pos) in rods.iter_mut(world) {
        rod.reset(&mut pos);
    }

    let mut hearts = world.query::<(&mut Heart, &mut Sprite)>();
    for (mut heart, mut sprite) in hearts.iter_mut(world) {
        *heart = Heart::default();
        sprite.frame = Some(1);
    }

    let mut effects = world.query::<(&mut Effect, &mut Sprite, &mut MapPosition)>();
    for (mut effect, mut sprite, mut pos) in effects.iter_mut(world) {
        *effect = Effect::default();
        sprite.frame = None;
        *pos = MapPosition::new(0.0, 0.0);
    }

    debug!("round reset");
}

/// Enter hook of [`GameStates::Menu`].
pub fn enter_menu(world: &mut World) {
    reset_round(world);
}

/// Enter hook of [`GameStates::Result`]: silence the round and, on success,
/// play the jingle.
pub fn enter_result(players: Query<&Player>, mut audio: MessageWriter<AudioCmd>) {
    audio.write(AudioCmd::stop(cues::VOICE));
    audio.write(AudioCmd::stop(cues::HEARTBEAT_SLOW));
    audio.write(AudioCmd::stop(cues::HEARTBEAT_FAST));
    if players
        .iter()
        .any(|player| player.state == RunnerState::Success)
    {
        audio.write(AudioCmd::play(cues::CLEAR));
    }
}

/// Enter hook of [`GameStates::Quitting`].
pub fn quit_game() {
    info!("Quitting");
}

/// Add the systems shared by the game and headless runs.
///
/// The binary adds keyboard polling to [`TickSet::Input`] and rendering plus
/// audio forwarding to [`TickSet::Present`]; headless runs set `InputState`
/// directly.
pub fn add_game_systems(schedule: &mut Schedule) {
    schedule.configure_sets(
        (
            TickSet::Input,
            TickSet::Scene,
            TickSet::Simulate.run_if(state_is_playing),
            TickSet::Present,
        )
            .chain(),
    );
    schedule.add_systems((scene_input, check_pending_state).chain().in_set(TickSet::Scene));
    schedule.add_systems(
        (
            round_clock_system,
            enemy_controller,
            player_controller,
            crowd_controller,
            rod_controller,
            collision_response,
        )
            .chain()
            .in_set(TickSet::Simulate),
    );
    // heartbeat and hit effect hold their last frame outside a round
    schedule.add_systems(
        (heart_animation, effect_animation)
            .run_if(state_is_playing)
            .in_set(TickSet::Present),
    );
    schedule.add_systems(sprite_frames.in_set(TickSet::Present));
}
