//! Scene transition event and observer.
//!
//! Systems request a change of scene by updating [`NextGameState`]. Emitting
//! a [`GameStateChangedEvent`] then triggers the observer in this module,
//! which applies the transition to [`GameState`] and runs the enter hook
//! registered for the new scene in [`SystemsStore`].
//!
//! Hooks:
//! - `"enter_menu"` – reset the round
//! - `"enter_result"` – silence the round cues, play the success jingle
//! - `"quit_game"` – log and let the main loop wind down
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending scene transition should be applied.
///
/// If [`NextGameState`] holds [`Pending`], the observer updates
/// [`GameState`], runs the enter hook and clears the request; if it is
/// [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending scene transition.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Option<Res<SystemsStore>>,
) {
    debug!("GameStateChangedEvent triggered");

    if let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    {
        match next_game_state.get().clone() {
            Pending(new_state) => {
                info!("Transitioning from {:?} to {:?}", game_state.get(), new_state);
                game_state.set(new_state.clone());
                next_game_state.reset();
                on_state_enter(&new_state, &mut commands, systems_store.as_deref());
            }
            Unchanged => {
                debug!("No state change pending.");
            }
        }
    } else {
        warn!(
            "Scene resources missing. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
    }
}

/// Name of the hook run when entering `state`, if it has one.
pub fn enter_hook_name(state: &GameStates) -> Option<&'static str> {
    match state {
        GameStates::Menu => Some("enter_menu"),
        GameStates::Result => Some("enter_result"),
        GameStates::Quitting => Some("quit_game"),
        GameStates::None | GameStates::Setup | GameStates::Playing => None,
    }
}

fn on_state_enter(state: &GameStates, commands: &mut Commands, systems_store: Option<&SystemsStore>) {
    let Some(name) = enter_hook_name(state) else {
        debug!("Entered {:?}", state);
        return;
    };
    match systems_store.and_then(|store| store.get(name)) {
        Some(id) => commands.run_system(*id),
        None => warn!("Hook '{}' not registered, entering {:?} without it", name, state),
    }
}
