//! Game systems.
//!
//! Every tick runs four chained [`TickSet`]s. The simulation set only runs
//! while the game is [`Playing`](crate::resources::gamestate::GameStates::Playing)
//! and keeps a fixed controller order: the enemy decides the phase first,
//! then every reader of the phase runs within the same tick.
//!
//! Submodules overview
//! - [`animation`] – heart and effect timers, sprite frame selection
//! - [`audio`] – bridge with the audio thread (forward/poll message queues)
//! - [`collision`] – player slowdown over fallen crowd members
//! - [`crowd`] – crowd member controller
//! - [`enemy`] – phase automaton and its audio cues
//! - [`gamestate`] – scene input and pending transition checks
//! - [`input`] – read hardware input into [`crate::resources::input::InputState`]
//! - [`player`] – player controller and round end detection
//! - [`render`] – draw the scene with Raylib
//! - [`rod`] – hazard sweep and leg resolution
//! - [`round`] – round timer and time-out
//! - [`time`] – inject the tick delta into [`crate::resources::worldtime::WorldTime`]

use bevy_ecs::prelude::SystemSet;

pub mod animation;
pub mod audio;
pub mod collision;
pub mod crowd;
pub mod enemy;
pub mod gamestate;
pub mod input;
pub mod player;
pub mod render;
pub mod rod;
pub mod round;
pub mod time;

/// Ordered phases of one tick.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Read the keyboard.
    Input,
    /// React to scene keys and apply pending scene transitions.
    Scene,
    /// Controllers and collision response, only while playing.
    Simulate,
    /// Animation timers, frame selection, audio forwarding and drawing.
    Present,
}
