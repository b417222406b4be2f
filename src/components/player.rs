//! Player runner component.
//!
//! Movement is edge-triggered: a direction key moves the player by `speed`
//! once when it goes down and sets [`RunnerState::Move`]; releasing it sets
//! [`RunnerState::Idle`]. Holding a key does not keep moving the player.
//!
//! Any movement while the enemy watches kills the player on the same tick.
//! Reaching the goal line wins the round unless the player is already dead.

use bevy_ecs::prelude::Component;

use crate::components::mapposition::MapPosition;
use crate::components::runnerstate::RunnerState;
use crate::consts::{GOAL_LINE_Y, PLATFORM_HEIGHT, PLAYER_SPEED, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Level state of the four direction keys for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl DirectionKeys {
    fn as_array(self) -> [bool; 4] {
        [self.left, self.right, self.up, self.down]
    }
}

/// Result of a player step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStep {
    Running,
    /// The round is over with the given terminal state.
    RoundOver(RunnerState),
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Player {
    pub state: RunnerState,
    pub speed: f32,
    /// Key levels seen on the previous tick, in left/right/up/down order.
    keys_down: [bool; 4],
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            state: RunnerState::Idle,
            speed: PLAYER_SPEED,
            keys_down: [false; 4],
        }
    }

    pub fn restore_speed(&mut self) {
        self.speed = PLAYER_SPEED;
    }

    /// Kill the player unless the round is already decided.
    pub fn kill(&mut self) {
        if !self.state.is_terminal() {
            self.state = RunnerState::Dead;
        }
    }

    /// Advance the player by one tick.
    ///
    /// `watching` is the enemy's phase for this tick, `sprite` the player's
    /// sprite size used for clamping.
    pub fn step(
        &mut self,
        keys: DirectionKeys,
        watching: bool,
        pos: &mut MapPosition,
        sprite: (f32, f32),
    ) -> PlayerStep {
        if self.state.is_terminal() {
            return PlayerStep::RoundOver(self.state);
        }

        let deltas = [(-1.0, 0.0), (1.0, 0.0), (0.0, -1.0), (0.0, 1.0)];
        for (i, down) in keys.as_array().into_iter().enumerate() {
            if down && !self.keys_down[i] {
                self.keys_down[i] = true;
                pos.x += deltas[i].0 * self.speed;
                pos.y += deltas[i].1 * self.speed;
                self.state = RunnerState::Move;
            } else if !down && self.keys_down[i] {
                self.keys_down[i] = false;
                self.state = RunnerState::Idle;
            }
        }

        if watching && self.state == RunnerState::Move {
            self.state = RunnerState::Dead;
        }

        clamp_to_field(pos, sprite);

        if pos.y <= GOAL_LINE_Y && self.state != RunnerState::Dead {
            self.state = RunnerState::Success;
        }
        PlayerStep::Running
    }
}

/// Keep a runner inside the screen horizontally and above the platform floor.
pub fn clamp_to_field(pos: &mut MapPosition, (width, height): (f32, f32)) {
    pos.x = pos.x.clamp(0.0, SCREEN_WIDTH - width);
    pos.y = pos.y.min(start_line_y(height));
}

/// Top of a runner of `height` standing on the start platform.
pub fn start_line_y(height: f32) -> f32 {
    SCREEN_HEIGHT - PLATFORM_HEIGHT - height
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPRITE: (f32, f32) = (24.0, 36.0);

    fn keys(left: bool, right: bool, up: bool, down: bool) -> DirectionKeys {
        DirectionKeys {
            left,
            right,
            up,
            down,
        }
    }

    #[test]
    fn press_moves_once_while_held() {
        let mut player = Player::new();
        let mut pos = MapPosition::new(300.0, 500.0);
        player.step(keys(false, false, true, false), false, &mut pos, SPRITE);
        assert_eq!(pos.y, 497.0);
        assert_eq!(player.state, RunnerState::Move);

        // Held: no further movement
        player.step(keys(false, false, true, false), false, &mut pos, SPRITE);
        player.step(keys(false, false, true, false), false, &mut pos, SPRITE);
        assert_eq!(pos.y, 497.0);
        assert_eq!(player.state, RunnerState::Move);

        player.step(keys(false, false, false, false), false, &mut pos, SPRITE);
        assert_eq!(player.state, RunnerState::Idle);

        player.step(keys(false, false, true, false), false, &mut pos, SPRITE);
        assert_eq!(pos.y, 494.0);
    }

    #[test]
    fn moving_during_watch_is_lethal() {
        let mut player = Player::new();
        let mut pos = MapPosition::new(300.0, 500.0);
        player.step(keys(true, false, false, false), true, &mut pos, SPRITE);
        assert_eq!(player.state, RunnerState::Dead);
    }

    #[test]
    fn standing_still_during_watch_is_safe() {
        let mut player = Player::new();
        let mut pos = MapPosition::new(300.0, 500.0);
        player.step(DirectionKeys::default(), true, &mut pos, SPRITE);
        assert_eq!(player.state, RunnerState::Idle);
    }

    #[test]
    fn clamps_to_screen_and_floor() {
        let mut player = Player::new();
        let mut pos = MapPosition::new(1.0, start_line_y(36.0));
        player.step(keys(true, false, false, false), false, &mut pos, SPRITE);
        assert_eq!(pos.x, 0.0);

        player.step(keys(false, false, false, true), false, &mut pos, SPRITE);
        assert_eq!(pos.y, start_line_y(36.0));

        let mut pos = MapPosition::new(SCREEN_WIDTH - 25.0, 500.0);
        player.step(keys(false, true, false, false), false, &mut pos, SPRITE);
        assert_eq!(pos.x, SCREEN_WIDTH - 24.0);
    }

    #[test]
    fn crossing_goal_line_wins() {
        let mut player = Player::new();
        let mut pos = MapPosition::new(300.0, 27.0);
        player.step(DirectionKeys::default(), false, &mut pos, SPRITE);
        assert_eq!(player.state, RunnerState::Success);
        assert_eq!(
            player.step(DirectionKeys::default(), false, &mut pos, SPRITE),
            PlayerStep::RoundOver(RunnerState::Success)
        );
    }

    #[test]
    fn death_is_not_overridden_by_goal() {
        let mut player = Player::new();
        let mut pos = MapPosition::new(300.0, 30.0);
        // Step over the line during watch: dead wins
        player.step(keys(false, false, true, false), true, &mut pos, SPRITE);
        assert_eq!(pos.y, 27.0);
        assert_eq!(player.state, RunnerState::Dead);
    }

    #[test]
    fn kill_respects_terminal_states() {
        let mut player = Player::new();
        player.state = RunnerState::Success;
        player.kill();
        assert_eq!(player.state, RunnerState::Success);

        let mut player = Player::new();
        player.kill();
        assert_eq!(player.state, RunnerState::Dead);
    }
}
