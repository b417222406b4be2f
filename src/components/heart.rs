//! Heartbeat indicator.

use bevy_ecs::prelude::Component;

use crate::components::enemy::is_slow_beat;
use crate::consts::{HEART_FAST_PULSE, HEART_SLOW_PULSE};

/// Heartbeat indicator shown in the corner of the track.
///
/// During Watch it pulses with the enemy's tempo: enlarged (frame 2) for the
/// first pulse of each cycle, normal (frame 1) for the second. Outside Watch
/// it always shows frame 1. It only advances while a round is being played.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct Heart {
    pub render_time: f32,
}

impl Heart {
    /// Advance the pulse timer and return the frame to show.
    ///
    /// `beat_rate` is `Some` while the enemy watches.
    pub fn advance(&mut self, dt: f32, beat_rate: Option<u32>) -> u8 {
        self.render_time += dt;
        let Some(beat) = beat_rate else {
            return 1;
        };
        let pulse = if is_slow_beat(beat) {
            HEART_SLOW_PULSE
        } else {
            HEART_FAST_PULSE
        };
        if self.render_time < pulse {
            2
        } else if self.render_time < pulse * 2.0 {
            1
        } else {
            self.render_time = 0.0;
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_during_ready() {
        let mut heart = Heart::default();
        assert_eq!(heart.advance(0.1, None), 1);
        assert_eq!(heart.advance(0.1, None), 1);
    }

    #[test]
    fn slow_cycle() {
        let mut heart = Heart::default();
        assert_eq!(heart.advance(0.5, Some(6)), 2);
        assert_eq!(heart.advance(0.5, Some(6)), 1);
        // 1.1 s: past the cycle, restart
        assert_eq!(heart.advance(0.1, Some(6)), 1);
        assert_eq!(heart.render_time, 0.0);
        assert_eq!(heart.advance(0.1, Some(6)), 2);
    }

    #[test]
    fn fast_cycle() {
        let mut heart = Heart::default();
        assert_eq!(heart.advance(0.2, Some(11)), 2);
        assert_eq!(heart.advance(0.2, Some(11)), 1);
        assert_eq!(heart.advance(0.2, Some(11)), 1);
        assert_eq!(heart.render_time, 0.0);
    }
}
