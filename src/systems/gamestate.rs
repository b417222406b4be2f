use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use crate::resources::input::InputState;
use bevy_ecs::prelude::*;
use log::debug;

/// Emit [`GameStateChangedEvent`] when a transition has been requested.
pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    if let NextGameStates::Pending(_new_state) = next_state.get() {
        commands.trigger(GameStateChangedEvent {});
    }
}

pub fn state_is_playing(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Playing)
}

/// Scene keys: start from the menu, replay from the result screen, quit
/// from anywhere.
pub fn scene_input(
    input: Res<InputState>,
    state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
) {
    if input.action_back.just_pressed {
        debug!("quit requested");
        next_state.set(GameStates::Quitting);
        return;
    }
    if !input.confirm_pressed() {
        return;
    }
    match state.get() {
        GameStates::Menu => next_state.set(GameStates::Playing),
        GameStates::Result => next_state.set(GameStates::Menu),
        _ => {}
    }
}
