//! Collision response between the player and the crowd.
//!
//! Runs last in the simulation set: the player's speed is restored every
//! tick, then reduced while the player's box overlaps a fallen crowd member.
use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::crowd::CrowdMember;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::runnerstate::RunnerState;
use crate::consts::PLAYER_SLOWED_SPEED;

pub fn collision_response(
    mut players: Query<(&mut Player, &MapPosition, &BoxCollider)>,
    crowd: Query<(&CrowdMember, &MapPosition, &BoxCollider)>,
) {
    for (mut player, pos, collider) in players.iter_mut() {
        player.restore_speed();

        let over_fallen = crowd.iter().any(|(member, member_pos, member_collider)| {
            member.state == RunnerState::Dead
                && collider.overlaps(pos.to_vec(), member_collider, member_pos.to_vec())
        });
        if over_fallen {
            player.speed = PLAYER_SLOWED_SPEED;
        }
    }
}
