//! The enemy automaton.
//!
//! The [`Enemy`] alternates between [`EnemyPhase::Ready`] ("green light") and
//! [`EnemyPhase::Watch`] ("red light"). It is the only writer of the phase;
//! the player, crowd and rod controllers read it within the same tick, after
//! the enemy controller has run.
//!
//! Entering Watch draws a beat rate that sets both the heartbeat tempo cue and
//! the rod sweep speed. Every Ready phase starts with exactly one voice
//! announcement, tracked by `voice_ready`.

use bevy_ecs::prelude::Component;
use fastrand::Rng;

use crate::consts::{BEAT_RATE_MAX, BEAT_RATE_MIN, READY_TIME, SLOW_BEAT_MAX, WATCH_TIME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyPhase {
    Ready,
    Watch { beat_rate: u32 },
}

/// What happened during one [`Enemy::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnemyTick {
    /// The one-shot voice announcement of this Ready phase is due.
    pub announce: bool,
    /// The phase the enemy switched to, if any.
    pub entered: Option<EnemyPhase>,
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Enemy {
    pub phase: EnemyPhase,
    /// Seconds spent in the current phase.
    pub state_time: f32,
    pub voice_ready: bool,
}

impl Default for Enemy {
    fn default() -> Self {
        Self::new()
    }
}

impl Enemy {
    pub fn new() -> Self {
        Self {
            phase: EnemyPhase::Ready,
            state_time: 0.0,
            voice_ready: true,
        }
    }

    pub fn is_watching(&self) -> bool {
        matches!(self.phase, EnemyPhase::Watch { .. })
    }

    /// Beat rate of the current Watch phase, 0 while Ready.
    pub fn beat_rate(&self) -> u32 {
        match self.phase {
            EnemyPhase::Ready => 0,
            EnemyPhase::Watch { beat_rate } => beat_rate,
        }
    }

    /// Accumulate `dt` and switch phase when the current one has run its course.
    pub fn advance(&mut self, dt: f32, rng: &mut Rng) -> EnemyTick {
        let mut tick = EnemyTick::default();
        self.state_time += dt;

        match self.phase {
            EnemyPhase::Ready => {
                if self.voice_ready {
                    self.voice_ready = false;
                    tick.announce = true;
                }
                if self.state_time >= READY_TIME {
                    tick.entered = Some(self.enter_watch(rng));
                }
            }
            EnemyPhase::Watch { .. } => {
                if self.state_time >= WATCH_TIME {
                    tick.entered = Some(self.enter_ready());
                }
            }
        }
        tick
    }

    /// Debug override: switch to the other phase immediately.
    pub fn force_toggle(&mut self, rng: &mut Rng) -> EnemyPhase {
        match self.phase {
            EnemyPhase::Ready => self.enter_watch(rng),
            EnemyPhase::Watch { .. } => self.enter_ready(),
        }
    }

    fn enter_watch(&mut self, rng: &mut Rng) -> EnemyPhase {
        self.state_time = 0.0;
        self.phase = EnemyPhase::Watch {
            beat_rate: rng.u32(BEAT_RATE_MIN..=BEAT_RATE_MAX),
        };
        self.phase
    }

    fn enter_ready(&mut self) -> EnemyPhase {
        self.state_time = 0.0;
        self.phase = EnemyPhase::Ready;
        self.voice_ready = true;
        self.phase
    }
}

/// True when `beat_rate` selects the slow heartbeat.
pub fn is_slow_beat(beat_rate: u32) -> bool {
    beat_rate <= SLOW_BEAT_MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announces_once_per_ready_phase() {
        let mut rng = Rng::with_seed(7);
        let mut enemy = Enemy::new();
        assert!(enemy.advance(0.1, &mut rng).announce);
        assert!(!enemy.advance(0.1, &mut rng).announce);
        assert!(!enemy.advance(0.1, &mut rng).announce);
    }

    #[test]
    fn ready_to_watch_after_ready_time() {
        let mut rng = Rng::with_seed(1);
        let mut enemy = Enemy::new();
        for _ in 0..7 {
            let tick = enemy.advance(0.5, &mut rng);
            assert_eq!(tick.entered, None);
        }
        let tick = enemy.advance(0.5, &mut rng);
        assert!(matches!(tick.entered, Some(EnemyPhase::Watch { .. })));
        let beat = enemy.beat_rate();
        assert!((BEAT_RATE_MIN..=BEAT_RATE_MAX).contains(&beat));
        assert_eq!(enemy.state_time, 0.0);
    }

    #[test]
    fn watch_to_ready_after_watch_time_rearms_voice() {
        let mut rng = Rng::with_seed(2);
        let mut enemy = Enemy::new();
        enemy.force_toggle(&mut rng);
        assert!(enemy.is_watching());
        for _ in 0..7 {
            enemy.advance(0.5, &mut rng);
        }
        assert!(enemy.is_watching());
        let tick = enemy.advance(0.5, &mut rng);
        assert_eq!(tick.entered, Some(EnemyPhase::Ready));
        assert!(enemy.voice_ready);
        assert_eq!(enemy.beat_rate(), 0);
    }

    #[test]
    fn beat_rates_stay_in_range() {
        let mut rng = Rng::with_seed(99);
        let mut enemy = Enemy::new();
        for _ in 0..500 {
            if let EnemyPhase::Watch { beat_rate } = enemy.force_toggle(&mut rng) {
                assert!((5..=12).contains(&beat_rate));
            }
        }
    }

    #[test]
    fn slow_beat_threshold() {
        assert!(is_slow_beat(5));
        assert!(is_slow_beat(8));
        assert!(!is_slow_beat(9));
        assert!(!is_slow_beat(12));
    }
}
