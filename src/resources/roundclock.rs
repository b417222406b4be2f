//! Global round timer.
//!
//! Tracks the seconds elapsed in the current round and narrows the crowd's
//! risk range as the round goes on: the smaller the range, the more crowd
//! members are picked to dash (and get shot) during each Watch phase.

use bevy_ecs::prelude::Resource;

use crate::consts::{
    MOVE_RANGE_LATE, MOVE_RANGE_LATE_AFTER, MOVE_RANGE_MID, MOVE_RANGE_MID_AFTER,
    MOVE_RANGE_START, REMAIN_TIME,
};

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct RoundClock {
    pub elapsed: f32,
    /// Upper bound of the risk slot drawn by each crowd member per Watch.
    pub move_range: u32,
}

impl Default for RoundClock {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundClock {
    pub fn new() -> Self {
        RoundClock {
            elapsed: 0.0,
            move_range: MOVE_RANGE_START,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance by `dt`. Returns `true` once the round time has run out; the
    /// clock then stays clamped at the limit.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed > MOVE_RANGE_MID_AFTER {
            self.move_range = MOVE_RANGE_MID;
        }
        if self.elapsed > MOVE_RANGE_LATE_AFTER {
            self.move_range = MOVE_RANGE_LATE;
        }
        if self.elapsed >= REMAIN_TIME {
            self.elapsed = REMAIN_TIME;
            return true;
        }
        false
    }

    /// Seconds left in the round, never negative.
    pub fn remaining(&self) -> f32 {
        (REMAIN_TIME - self.elapsed).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_narrows_over_time() {
        let mut clock = RoundClock::new();
        clock.advance(35.0);
        assert_eq!(clock.move_range, 10);
        clock.advance(0.1);
        assert_eq!(clock.move_range, 4);
        clock.advance(9.0);
        assert_eq!(clock.move_range, 2);
    }

    #[test]
    fn times_out_and_clamps() {
        let mut clock = RoundClock::new();
        assert!(!clock.advance(79.9));
        assert!(clock.advance(0.5));
        assert_eq!(clock.elapsed, REMAIN_TIME);
        assert_eq!(clock.remaining(), 0.0);
        assert!(clock.advance(1.0));
        assert_eq!(clock.elapsed, REMAIN_TIME);
    }

    #[test]
    fn reset_restores_start_values() {
        let mut clock = RoundClock::new();
        clock.advance(50.0);
        clock.reset();
        assert_eq!(clock, RoundClock::new());
        assert_eq!(clock.remaining(), 80.0);
    }
}
