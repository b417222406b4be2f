use bevy_ecs::prelude::*;
use log::debug;

use crate::components::crowd::CrowdMember;
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::events::audio::AudioCmd;
use crate::resources::roundclock::RoundClock;
use crate::resources::simrng::SimRng;
use crate::resources::worldtime::WorldTime;

/// Step every crowd member; each elimination plays a gunshot.
pub fn crowd_controller(
    time: Res<WorldTime>,
    clock: Res<RoundClock>,
    enemies: Query<&Enemy>,
    mut members: Query<(&mut CrowdMember, &mut MapPosition, &Sprite)>,
    mut rng: ResMut<SimRng>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let watching = enemies.single().is_ok_and(|enemy| enemy.is_watching());
    let rng = &mut rng.0;

    for (mut member, mut pos, sprite) in members.iter_mut() {
        let eliminated = member.step(
            time.delta,
            watching,
            clock.move_range,
            rng,
            &mut pos,
            (sprite.width, sprite.height),
        );
        if eliminated {
            debug!("crowd member shot at ({:.0}, {:.0})", pos.x, pos.y);
            audio.write(AudioCmd::gunshot(rng));
        }
    }
}
