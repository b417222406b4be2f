use bevy_ecs::prelude::*;
use log::info;

use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::player::{Player, PlayerStep};
use crate::components::runnerstate::RunnerState;
use crate::components::sprite::Sprite;
use crate::events::audio::AudioCmd;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::simrng::SimRng;

/// Move the player from the direction keys and detect the end of the round.
///
/// A terminal state set on one tick (by this controller, the rod or the
/// round timer) ends the round on the next tick: the result scene is
/// requested and, if the player died, a gunshot plays.
pub fn player_controller(
    input: Res<InputState>,
    enemies: Query<&Enemy>,
    mut players: Query<(&mut Player, &mut MapPosition, &Sprite)>,
    mut next_state: ResMut<NextGameState>,
    mut rng: ResMut<SimRng>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let watching = enemies.single().is_ok_and(|enemy| enemy.is_watching());
    let keys = input.direction_keys();

    for (mut player, mut pos, sprite) in players.iter_mut() {
        let step = player.step(keys, watching, &mut pos, (sprite.width, sprite.height));
        if let PlayerStep::RoundOver(state) = step {
            info!("round over: {:?}", state);
            if state == RunnerState::Dead {
                audio.write(AudioCmd::gunshot(&mut rng.0));
            }
            next_state.set(GameStates::Result);
        }
    }
}
