//! Event types and observers.
//!
//! Events decouple the systems that detect something from the code that
//! reacts to it.
//!
//! Submodules:
//! - [`audio`] – commands and replies for the background audio thread
//! - [`effect`] – request to play the hit effect at a position
//! - [`gamestate`] – scene transitions and their enter hooks
//! - [`switchdebug`] – toggle the collision overlay on/off
pub mod audio;
pub mod effect;
pub mod gamestate;
pub mod switchdebug;
