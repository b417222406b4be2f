//! Red Light, Green Light.
//!
//! Reach the goal line at the top of the field before the timer runs out,
//! and never move while the enemy is watching.
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the raylib window and start the audio thread
//! 2. Build the ECS world, load every asset and spawn the round
//! 3. Run the tick schedule until the window closes or the player quits
//! 4. Stop the audio thread
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};

use redlight::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use redlight::game;
use redlight::resources::audio::{setup_audio, shutdown_audio};
use redlight::resources::debugmode::DebugMode;
use redlight::resources::gameconfig::GameConfig;
use redlight::resources::gamestate::{GameState, GameStates};
use redlight::resources::simrng::SimRng;
use redlight::systems::TickSet;
use redlight::systems::animation::{effect_animation, heart_animation, sprite_frames};
use redlight::systems::audio::{forward_audio_cmds, update_bevy_audio_cmds};
use redlight::systems::input::update_input_state;
use redlight::systems::render::render_system;
use redlight::systems::time::update_world_time;

/// Red Light, Green Light
#[derive(Parser)]
#[command(version, about = "Cross the field while the enemy is not looking.")]
struct Cli {
    /// Path of the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Seed for the round's random draws.
    #[arg(long)]
    seed: Option<u64>,

    /// Start with the collider overlay enabled (toggle with F11).
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Config & window ---------------
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    let (window_width, window_height) = config.window_size(SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut builder = raylib::init();
    builder
        .size(window_width, window_height)
        .title("Red Light, Green Light");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Esc is a scene key, not a window close key
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let rng = match cli.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            SimRng::seeded(seed)
        }
        None => SimRng::from_entropy(),
    };

    let mut world = World::new();
    world.insert_resource(config);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    // Audio must be up before assets are loaded
    setup_audio(&mut world);
    game::init_world(&mut world, rng);
    game::request_state(&mut world, GameStates::Setup);

    if let Err(e) = game::load_assets(&mut world, &mut rl, &thread) {
        error!("{}", e);
        shutdown_audio(&mut world);
        std::process::exit(1);
    }
    game::spawn_world(&mut world);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    game::request_state(&mut world, GameStates::Menu);

    // --------------- Schedule ---------------
    let mut update = Schedule::default();
    game::add_game_systems(&mut update);
    update.add_systems(update_input_state.in_set(TickSet::Input));
    update.add_systems(
        // audio systems must be together
        (update_bevy_audio_cmds, forward_audio_cmds)
            .chain()
            .in_set(TickSet::Present),
    );
    update.add_systems(
        render_system
            .after(heart_animation)
            .after(effect_animation)
            .after(sprite_frames)
            .in_set(TickSet::Present),
    );

    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        shutdown_audio(&mut world);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !matches!(world.resource::<GameState>().get(), GameStates::Quitting)
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }
    shutdown_audio(&mut world);
}
