//! Red Light, Green Light library.
//!
//! A single-scene arcade round: the player and a crowd of AI runners race to the
//! goal line while the enemy alternates between *ready* (movement is safe) and
//! *watch* (movement is lethal). This crate exposes the ECS components,
//! resources, events and systems of the simulation so that the binary and the
//! integration tests share one implementation.
//!
//! - [`components`] – per-entity data (position, sprite, collider, controllers)
//! - [`events`] – audio commands, scene transitions, effect requests
//! - [`game`] – world spawning, round reset and schedule assembly
//! - [`resources`] – world time, round clock, scene state, input, RNG, asset stores
//! - [`systems`] – controllers, collision response, animation, rendering

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;

/// Gameplay constants. Timings are in seconds, distances in pixels.
pub mod consts {
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 900.0;

    /// Nominal simulation rate; the real delta is injected every tick.
    pub const TARGET_FPS: u32 = 60;

    pub const CROWD_SIZE: usize = 120;

    /// Height of the start platform at the bottom of the field.
    pub const PLATFORM_HEIGHT: f32 = 40.0;
    /// Any runner whose top edge reaches this line has crossed the goal.
    pub const GOAL_LINE_Y: f32 = 28.0;

    /// Collision box of every runner, bottom-centered in the sprite.
    pub const RUNNER_COLLIDER_WIDTH: f32 = 12.0;
    pub const RUNNER_COLLIDER_HEIGHT: f32 = 33.0;

    pub const READY_TIME: f32 = 4.0;
    pub const WATCH_TIME: f32 = 4.0;
    /// Length of a round. Reaching it kills the player.
    pub const REMAIN_TIME: f32 = 80.0;

    pub const BEAT_RATE_MIN: u32 = 5;
    pub const BEAT_RATE_MAX: u32 = 12;
    /// Beat rates up to this value use the slow heartbeat.
    pub const SLOW_BEAT_MAX: u32 = 8;

    pub const PLAYER_SPEED: f32 = 3.0;
    /// Player speed while standing on a fallen crowd member.
    pub const PLAYER_SLOWED_SPEED: f32 = 1.0;

    pub const CROWD_SPEED: f32 = 4.5;
    pub const CROWD_MOVE_INTERVAL: f32 = 0.1;
    pub const MOVE_RANGE_START: u32 = 10;
    pub const MOVE_RANGE_MID: u32 = 4;
    pub const MOVE_RANGE_LATE: u32 = 2;
    pub const MOVE_RANGE_MID_AFTER: f32 = 35.0;
    pub const MOVE_RANGE_LATE_AFTER: f32 = 44.0;
    /// The dash delay is drawn from `[0, WATCH_TIME - WATCH_DELAY_MARGIN)`.
    pub const WATCH_DELAY_MARGIN: f32 = 2.0;
    /// Time a dashing crowd member survives after its delay expires.
    pub const ELIMINATION_GRACE: f32 = 1.0;

    pub const ROD_LEFT_X: f32 = 18.0;
    pub const ROD_RIGHT_X: f32 = 300.0;
    pub const ROD_BASE_SPEED: f32 = 50.0;

    pub const ENEMY_Y: f32 = 18.0;
    pub const TRACK_X: f32 = 10.0;
    pub const SAFE_ZONE_X: f32 = 140.0;
    /// Distance of the rod track from the bottom edge.
    pub const TRACK_BOTTOM_OFFSET: f32 = 28.0;
    pub const HEART_BOTTOM_OFFSET: f32 = 45.0;

    pub const HEART_SLOW_PULSE: f32 = 0.53;
    pub const HEART_FAST_PULSE: f32 = 0.265;

    pub const EFFECT_FRAME_TIME: f32 = 0.05;
    pub const EFFECT_FRAMES: u8 = 5;
    pub const EFFECT_OFFSET: f32 = 6.0;
}
