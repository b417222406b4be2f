//! Keyboard polling.
//!
//! [`update_input_state`] reads Raylib's key levels each tick and feeds them
//! to [`InputState`], which derives the press/release edges. The debug key
//! emits a [`SwitchDebugEvent`].
use bevy_ecs::prelude::*;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    for key in input.all_mut() {
        key.update(rl.is_key_down(key.key_binding));
    }

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
