//! ECS resources made available to systems.
//!
//! Long-lived data injected into the world and shared by the simulation and
//! presentation systems. Together, `worldtime`, `gamestate`, `roundclock`,
//! `simrng` and `input` form the context every controller reads each tick.
//!
//! Overview
//! - `audio` – bridge and channels for the background audio thread
//! - `debugmode` – presence toggles the collision overlay
//! - `fontstore` – fonts used by the HUD and scene texts
//! - `gameconfig` – INI-backed window, asset and audio settings
//! - `gamestate` – authoritative and pending scene
//! - `input` – per-tick keyboard state of the keys the game reads
//! - `roundclock` – round timer and crowd risk range
//! - `simrng` – the single seeded random source
//! - `systemsstore` – scene enter hooks registered by name
//! - `texturestore` – loaded sprite frames
//! - `worldtime` – tick delta and elapsed time
pub mod audio;
pub mod debugmode;
pub mod fontstore;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod roundclock;
pub mod simrng;
pub mod systemsstore;
pub mod texturestore;
pub mod worldtime;
