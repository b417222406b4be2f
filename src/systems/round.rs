use bevy_ecs::prelude::*;
use log::info;

use crate::components::player::Player;
use crate::resources::roundclock::RoundClock;
use crate::resources::worldtime::WorldTime;

/// Advance the round timer. Running out of time kills the player unless the
/// round is already decided.
pub fn round_clock_system(
    time: Res<WorldTime>,
    mut clock: ResMut<RoundClock>,
    mut players: Query<&mut Player>,
) {
    let range_before = clock.move_range;
    let timed_out = clock.advance(time.delta);
    if clock.move_range != range_before {
        info!(
            "crowd risk range narrowed to {} at {:.1}s",
            clock.move_range, clock.elapsed
        );
    }
    if timed_out {
        for mut player in players.iter_mut() {
            if !player.state.is_terminal() {
                info!("round time is up");
                player.kill();
            }
        }
    }
}
