use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rod::{Rod, SafeZone};
use crate::events::effect::EffectEvent;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Sweep the rod while the enemy watches; park it while the enemy is ready.
///
/// The evade key shields the player only while the rod crosses the safe
/// zone. Resolving a leg with the key held plays the hit effect; a penalty
/// kills the player.
pub fn rod_controller(
    mut commands: Commands,
    time: Res<WorldTime>,
    input: Res<InputState>,
    enemies: Query<&Enemy>,
    mut rods: Query<(&mut Rod, &mut MapPosition, &BoxCollider)>,
    zones: Query<(&MapPosition, &BoxCollider), (With<SafeZone>, Without<Rod>)>,
    mut players: Query<&mut Player>,
) {
    let Ok(enemy) = enemies.single() else {
        return;
    };

    for (mut rod, mut pos, collider) in rods.iter_mut() {
        if !enemy.is_watching() {
            rod.reset(&mut pos);
            continue;
        }

        let in_safe_zone = |rod_pos: &MapPosition| {
            zones.iter().any(|(zone_pos, zone_collider)| {
                collider.overlaps(rod_pos.to_vec(), zone_collider, zone_pos.to_vec())
            })
        };
        let tick = rod.step(
            time.delta,
            enemy.beat_rate(),
            input.action_evade.active,
            &mut pos,
            in_safe_zone,
        );

        if let Some((x, y)) = tick.effect_at {
            commands.trigger(EffectEvent { x, y });
        }
        if tick.penalty {
            debug!("rod penalty at x={:.1}", pos.x);
            for mut player in players.iter_mut() {
                player.kill();
            }
        }
    }
}
