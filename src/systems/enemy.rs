//! Enemy controller.
//!
//! Runs first in the simulation set so that every other controller sees the
//! phase of this tick. Also handles the debug key that forces the other
//! phase, and writes the phase's audio cues.
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::enemy::{Enemy, EnemyPhase, is_slow_beat};
use crate::events::audio::{AudioCmd, cues};
use crate::resources::input::InputState;
use crate::resources::simrng::SimRng;
use crate::resources::worldtime::WorldTime;

pub fn enemy_controller(
    time: Res<WorldTime>,
    input: Res<InputState>,
    mut rng: ResMut<SimRng>,
    mut enemies: Query<&mut Enemy>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let Ok(mut enemy) = enemies.single_mut() else {
        warn!("enemy_controller: expected exactly one enemy");
        return;
    };

    if input.toggle_phase.just_pressed {
        let phase = enemy.force_toggle(&mut rng.0);
        info!("phase forced to {:?}", phase);
        write_entry_cue(phase, &mut audio);
    }

    let tick = enemy.advance(time.delta, &mut rng.0);
    if tick.announce {
        audio.write(AudioCmd::stop(cues::HEARTBEAT_SLOW));
        audio.write(AudioCmd::stop(cues::HEARTBEAT_FAST));
        audio.write(AudioCmd::play(cues::VOICE));
    }
    if let Some(phase) = tick.entered {
        debug!("enemy entered {:?}", phase);
        write_entry_cue(phase, &mut audio);
    }
}

/// Entering Watch starts the heartbeat matching the drawn beat rate.
fn write_entry_cue(phase: EnemyPhase, audio: &mut MessageWriter<AudioCmd>) {
    if let EnemyPhase::Watch { beat_rate } = phase {
        let cue = if is_slow_beat(beat_rate) {
            cues::HEARTBEAT_SLOW
        } else {
            cues::HEARTBEAT_FAST
        };
        audio.write(AudioCmd::play(cue));
    }
}
