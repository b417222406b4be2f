//! Frame selection.
//!
//! Every drawable kind maps its state to a sprite frame through one table,
//! [`sprite_frame`]. Timed animations (the heartbeat indicator and the hit
//! effect) advance their timers here as well.
use bevy_ecs::prelude::*;

use crate::components::crowd::CrowdMember;
use crate::components::effect::Effect;
use crate::components::enemy::{Enemy, EnemyPhase};
use crate::components::heart::Heart;
use crate::components::player::Player;
use crate::components::runnerstate::RunnerState;
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

/// State of a drawable entity as far as frame selection is concerned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameKey {
    Runner(RunnerState),
    Enemy(EnemyPhase),
}

/// Sprite frame (1-based) for a drawable state.
pub fn sprite_frame(key: FrameKey) -> u8 {
    match key {
        FrameKey::Runner(RunnerState::Idle | RunnerState::Success) => 1,
        FrameKey::Runner(RunnerState::Move) => 2,
        FrameKey::Runner(RunnerState::Dead) => 3,
        FrameKey::Enemy(EnemyPhase::Ready) => 1,
        FrameKey::Enemy(EnemyPhase::Watch { .. }) => 2,
    }
}

/// Select the frames of the enemy and of every runner from their state.
pub fn sprite_frames(
    mut enemies: Query<(&Enemy, &mut Sprite), (Without<Player>, Without<CrowdMember>)>,
    mut players: Query<(&Player, &mut Sprite), Without<CrowdMember>>,
    mut crowd: Query<(&CrowdMember, &mut Sprite), Without<Player>>,
) {
    for (enemy, mut sprite) in enemies.iter_mut() {
        sprite.frame = Some(sprite_frame(FrameKey::Enemy(enemy.phase)));
    }
    for (player, mut sprite) in players.iter_mut() {
        sprite.frame = Some(sprite_frame(FrameKey::Runner(player.state)));
    }
    for (member, mut sprite) in crowd.iter_mut() {
        sprite.frame = Some(sprite_frame(FrameKey::Runner(member.state)));
    }
}

/// Pulse the heartbeat indicator with the enemy's tempo.
pub fn heart_animation(
    time: Res<WorldTime>,
    enemies: Query<&Enemy>,
    mut hearts: Query<(&mut Heart, &mut Sprite)>,
) {
    let beat_rate = match enemies.single().map(|enemy| enemy.phase) {
        Ok(EnemyPhase::Watch { beat_rate }) => Some(beat_rate),
        _ => None,
    };
    for (mut heart, mut sprite) in hearts.iter_mut() {
        sprite.frame = Some(heart.advance(time.delta, beat_rate));
    }
}

/// Play the hit effect; it is hidden once its frames run out.
pub fn effect_animation(time: Res<WorldTime>, mut effects: Query<(&mut Effect, &mut Sprite)>) {
    for (mut effect, mut sprite) in effects.iter_mut() {
        sprite.frame = effect.advance(time.delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runner_frames() {
        assert_eq!(sprite_frame(FrameKey::Runner(RunnerState::Idle)), 1);
        assert_eq!(sprite_frame(FrameKey::Runner(RunnerState::Move)), 2);
        assert_eq!(sprite_frame(FrameKey::Runner(RunnerState::Dead)), 3);
        assert_eq!(sprite_frame(FrameKey::Runner(RunnerState::Success)), 1);
    }

    #[test]
    fn enemy_frames() {
        assert_eq!(sprite_frame(FrameKey::Enemy(EnemyPhase::Ready)), 1);
        assert_eq!(
            sprite_frame(FrameKey::Enemy(EnemyPhase::Watch { beat_rate: 7 })),
            2
        );
    }
}
