//! Crowd member AI.
//!
//! Each member runs its own small automaton:
//!
//! - **Ready**: every [`CROWD_MOVE_INTERVAL`] of accumulated time the member
//!   takes one weighted random step (advance 75%, left 10%, right 10%,
//!   retreat 5%); between steps it is idle.
//! - **Watch**: on the first Watch tick the member draws a risk slot in
//!   `[1, move_range]`. Only slot 1 acts: it waits a random delay, then keeps
//!   stepping as in Ready until it is shot [`ELIMINATION_GRACE`] seconds later.
//!
//! Members that are dead or past the goal line are frozen for the round.

use bevy_ecs::prelude::Component;
use fastrand::Rng;

use crate::components::mapposition::MapPosition;
use crate::components::player::clamp_to_field;
use crate::components::runnerstate::RunnerState;
use crate::consts::{
    CROWD_MOVE_INTERVAL, CROWD_SPEED, ELIMINATION_GRACE, GOAL_LINE_Y, WATCH_DELAY_MARGIN,
    WATCH_TIME,
};

#[derive(Component, Debug, Clone, PartialEq)]
pub struct CrowdMember {
    pub state: RunnerState,
    pub speed: f32,
    /// Time accumulated toward the next step.
    pub move_time: f32,
    /// Risk slot drawn for the current Watch phase.
    pub risk_slot: Option<u32>,
    /// Time spent waiting in the current Watch phase.
    pub wait_time: f32,
    /// Delay before dashing, drawn on the first waiting tick.
    pub dash_delay: Option<f32>,
}

impl Default for CrowdMember {
    fn default() -> Self {
        Self::new()
    }
}

impl CrowdMember {
    pub fn new() -> Self {
        Self {
            state: RunnerState::Idle,
            speed: CROWD_SPEED,
            move_time: 0.0,
            risk_slot: None,
            wait_time: 0.0,
            dash_delay: None,
        }
    }

    /// Frozen members take no further updates this round.
    pub fn is_frozen(&self, pos: &MapPosition) -> bool {
        pos.y <= GOAL_LINE_Y || self.state == RunnerState::Dead
    }

    /// Advance the member by one tick. Returns `true` when it was eliminated
    /// on this tick.
    pub fn step(
        &mut self,
        dt: f32,
        watching: bool,
        move_range: u32,
        rng: &mut Rng,
        pos: &mut MapPosition,
        sprite: (f32, f32),
    ) -> bool {
        if self.is_frozen(pos) {
            return false;
        }

        let mut eliminated = false;
        if !watching {
            self.risk_slot = None;
            self.wait_time = 0.0;
            self.dash_delay = None;
            self.try_step(dt, rng, pos);
        } else {
            let slot = *self
                .risk_slot
                .get_or_insert_with(|| rng.u32(1..=move_range.max(1)));
            if slot == 1 {
                let delay = *self
                    .dash_delay
                    .get_or_insert_with(|| rng.f32() * (WATCH_TIME - WATCH_DELAY_MARGIN));
                self.wait_time += dt;
                if self.wait_time >= delay {
                    self.try_step(dt, rng, pos);
                }
                if self.wait_time >= delay + ELIMINATION_GRACE {
                    self.state = RunnerState::Dead;
                    eliminated = true;
                }
            } else {
                self.state = RunnerState::Idle;
            }
        }

        clamp_to_field(pos, sprite);
        eliminated
    }

    fn try_step(&mut self, dt: f32, rng: &mut Rng, pos: &mut MapPosition) {
        self.move_time += dt;
        if self.move_time < CROWD_MOVE_INTERVAL {
            self.state = RunnerState::Idle;
            return;
        }
        self.move_time = 0.0;
        self.state = RunnerState::Move;
        match rng.u8(1..=20) {
            1..=15 => pos.y -= self.speed,
            16..=17 => pos.x -= self.speed,
            18..=19 => pos.x += self.speed,
            _ => pos.y += self.speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::player::start_line_y;

    const SPRITE: (f32, f32) = (24.0, 36.0);

    #[test]
    fn steps_on_cadence_during_ready() {
        let mut rng = Rng::with_seed(3);
        let mut member = CrowdMember::new();
        let mut pos = MapPosition::new(300.0, 500.0);

        member.step(0.05, false, 10, &mut rng, &mut pos, SPRITE);
        assert_eq!(member.state, RunnerState::Idle);
        assert_eq!(pos, MapPosition::new(300.0, 500.0));

        member.step(0.05, false, 10, &mut rng, &mut pos, SPRITE);
        assert_eq!(member.state, RunnerState::Move);
        assert_ne!(pos, MapPosition::new(300.0, 500.0));
        assert_eq!(member.move_time, 0.0);
    }

    #[test]
    fn mostly_advances() {
        let mut rng = Rng::with_seed(11);
        let mut advanced = 0;
        let trials = 2000;
        for _ in 0..trials {
            let mut member = CrowdMember::new();
            let mut pos = MapPosition::new(300.0, 500.0);
            member.step(0.1, false, 10, &mut rng, &mut pos, SPRITE);
            if pos.y < 500.0 {
                advanced += 1;
            }
        }
        let ratio = advanced as f32 / trials as f32;
        assert!(ratio > 0.68 && ratio < 0.82, "advance ratio {ratio}");
    }

    #[test]
    fn risk_slot_drawn_once_per_watch_and_cleared_on_ready() {
        let mut rng = Rng::with_seed(5);
        let mut member = CrowdMember::new();
        let mut pos = MapPosition::new(300.0, 500.0);

        member.step(0.016, true, 10, &mut rng, &mut pos, SPRITE);
        let slot = member.risk_slot.expect("slot drawn");
        assert!((1..=10).contains(&slot));
        member.step(0.016, true, 10, &mut rng, &mut pos, SPRITE);
        assert_eq!(member.risk_slot, Some(slot));

        member.step(0.016, false, 10, &mut rng, &mut pos, SPRITE);
        assert_eq!(member.risk_slot, None);
        assert_eq!(member.dash_delay, None);
        assert_eq!(member.wait_time, 0.0);
    }

    #[test]
    fn risk_slot_spans_the_move_range_and_narrowing_raises_the_odds() {
        let mut rng = Rng::with_seed(17);
        let trials = 4000;
        let mut shares = Vec::new();
        for range in [10, 4, 2] {
            let mut seen = vec![false; range as usize];
            let mut chosen = 0;
            for _ in 0..trials {
                let mut member = CrowdMember::new();
                let mut pos = MapPosition::new(300.0, 500.0);
                member.step(0.016, true, range, &mut rng, &mut pos, SPRITE);
                let slot = member.risk_slot.expect("slot drawn");
                assert!((1..=range).contains(&slot), "slot {slot} out of 1..={range}");
                seen[slot as usize - 1] = true;
                if slot == 1 {
                    chosen += 1;
                }
            }
            assert!(seen.iter().all(|s| *s), "range {range} left slots undrawn");
            let share = chosen as f32 / trials as f32;
            let expected = 1.0 / range as f32;
            assert!((share - expected).abs() < 0.04, "range {range}: share {share}");
            shares.push(share);
        }
        assert!(shares[0] < shares[1] && shares[1] < shares[2], "{shares:?}");
    }

    #[test]
    fn unchosen_members_hold_still_during_watch() {
        let mut rng = Rng::with_seed(8);
        let mut member = CrowdMember::new();
        member.risk_slot = Some(2);
        let mut pos = MapPosition::new(300.0, 500.0);
        for _ in 0..240 {
            assert!(!member.step(1.0 / 60.0, true, 10, &mut rng, &mut pos, SPRITE));
        }
        assert_eq!(pos, MapPosition::new(300.0, 500.0));
        assert_eq!(member.state, RunnerState::Idle);
    }

    #[test]
    fn chosen_member_is_eliminated_after_delay_and_grace() {
        let mut rng = Rng::with_seed(9);
        let mut member = CrowdMember::new();
        member.risk_slot = Some(1);
        member.dash_delay = Some(0.5);
        let mut pos = MapPosition::new(300.0, 500.0);

        let mut eliminated_at = None;
        for i in 1..=40 {
            if member.step(0.05, true, 10, &mut rng, &mut pos, SPRITE) {
                eliminated_at = Some(i);
                break;
            }
        }
        // 0.5 s delay + 1 s grace at 0.05 s per tick
        let tick = eliminated_at.expect("eliminated");
        assert!((29..=31).contains(&tick), "eliminated on tick {tick}");
        assert_eq!(member.state, RunnerState::Dead);
        assert!(member.is_frozen(&pos));

        let frozen = pos;
        assert!(!member.step(0.05, false, 10, &mut rng, &mut pos, SPRITE));
        assert_eq!(pos, frozen);
    }

    #[test]
    fn dash_delay_is_within_watch_window() {
        let mut rng = Rng::with_seed(21);
        for _ in 0..200 {
            let mut member = CrowdMember::new();
            member.risk_slot = Some(1);
            let mut pos = MapPosition::new(300.0, 500.0);
            member.step(0.0, true, 10, &mut rng, &mut pos, SPRITE);
            let delay = member.dash_delay.expect("delay drawn");
            assert!((0.0..WATCH_TIME - WATCH_DELAY_MARGIN).contains(&delay));
        }
    }

    #[test]
    fn members_past_the_goal_are_frozen() {
        let mut rng = Rng::with_seed(4);
        let mut member = CrowdMember::new();
        let mut pos = MapPosition::new(300.0, GOAL_LINE_Y);
        member.step(0.2, false, 10, &mut rng, &mut pos, SPRITE);
        assert_eq!(pos, MapPosition::new(300.0, GOAL_LINE_Y));
    }

    #[test]
    fn clamps_like_the_player() {
        let mut rng = Rng::with_seed(6);
        let mut member = CrowdMember::new();
        let mut pos = MapPosition::new(-10.0, start_line_y(36.0) + 20.0);
        member.step(0.0, false, 10, &mut rng, &mut pos, SPRITE);
        assert_eq!(pos.x, 0.0);
        assert_eq!(pos.y, start_line_y(36.0));
    }
}
