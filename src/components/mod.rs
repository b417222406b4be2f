//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the round. Generic components describe where an entity is and how it is
//! drawn and collided; behaviour components carry the state machine of one
//! entity kind.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned collision box, optionally inset in the sprite
//! - [`crowd`] – AI runner state machine
//! - [`effect`] – one-shot hit effect animation
//! - [`enemy`] – the ready/watch automaton that drives the round
//! - [`group`] – collision group tag
//! - [`heart`] – heartbeat indicator timer
//! - [`mapposition`] – world-space position (top-left of the sprite box)
//! - [`player`] – player runner state and edge-triggered keys
//! - [`renderlayer`] – ordered render layer tag
//! - [`rod`] – sweeping hazard line and the safe zone marker
//! - [`runnerstate`] – idle/move/dead/success state shared by runners
//! - [`sprite`] – sprite sheet, size and currently selected frame

pub mod boxcollider;
pub mod crowd;
pub mod effect;
pub mod enemy;
pub mod group;
pub mod heart;
pub mod mapposition;
pub mod player;
pub mod renderlayer;
pub mod rod;
pub mod runnerstate;
pub mod sprite;
