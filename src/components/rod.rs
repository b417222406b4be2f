//! Sweeping hazard ("rod") and the safe window on the track.
//!
//! While the enemy watches, the rod sweeps between [`ROD_LEFT_X`] and
//! [`ROD_RIGHT_X`] at `beat_rate * speed` pixels per second. Each one-way pass
//! is a *leg*, and every leg must be resolved exactly once:
//!
//! - holding the evade key with the rod inside the [`SafeZone`] resolves the
//!   leg safely,
//! - holding the key anywhere else penalizes the player,
//! - reaching the end of the leg unresolved penalizes the player as a fallback.
//!
//! The tick that reaches a bound only clamps, flips and applies the fallback;
//! the key is not checked on that tick.

use bevy_ecs::prelude::Component;

use crate::components::mapposition::MapPosition;
use crate::consts::{EFFECT_OFFSET, ROD_BASE_SPEED, ROD_LEFT_X, ROD_RIGHT_X};

/// Marker for the safe window drawn on the track.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct SafeZone;

/// How the current leg was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegResolution {
    Safe,
    Penalized,
}

/// Outcome of one rod tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RodTick {
    /// Where to play the hit effect, if anywhere.
    pub effect_at: Option<(f32, f32)>,
    /// The player must be killed.
    pub penalty: bool,
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Rod {
    pub sweeping_right: bool,
    /// Base speed, multiplied by the enemy's beat rate.
    pub speed: f32,
    pub key_held: bool,
    pub resolution: Option<LegResolution>,
}

impl Default for Rod {
    fn default() -> Self {
        Self::new()
    }
}

impl Rod {
    pub fn new() -> Self {
        Self {
            sweeping_right: true,
            speed: ROD_BASE_SPEED,
            key_held: false,
            resolution: None,
        }
    }

    /// Back to the left rest position, ready for the next Watch phase.
    pub fn reset(&mut self, pos: &mut MapPosition) {
        *self = Self::new();
        pos.x = ROD_LEFT_X;
    }

    /// Advance one Watch tick.
    ///
    /// `in_safe_zone` reports whether the rod at its new position overlaps the
    /// safe window; it is only consulted while the key is held.
    pub fn step(
        &mut self,
        dt: f32,
        beat_rate: u32,
        key_held: bool,
        pos: &mut MapPosition,
        in_safe_zone: impl FnOnce(&MapPosition) -> bool,
    ) -> RodTick {
        let mut tick = RodTick::default();
        self.key_held = key_held;

        let travel = beat_rate as f32 * self.speed * dt;
        let within = if self.sweeping_right {
            pos.x += travel;
            pos.x < ROD_RIGHT_X
        } else {
            pos.x -= travel;
            pos.x > ROD_LEFT_X
        };

        if within {
            if self.key_held && self.resolution.is_none() {
                tick.effect_at = Some((pos.x - EFFECT_OFFSET, pos.y - EFFECT_OFFSET));
                if in_safe_zone(pos) {
                    self.resolution = Some(LegResolution::Safe);
                } else {
                    self.resolution = Some(LegResolution::Penalized);
                    tick.penalty = true;
                }
            }
        } else {
            pos.x = if self.sweeping_right {
                ROD_RIGHT_X
            } else {
                ROD_LEFT_X
            };
            self.sweeping_right = !self.sweeping_right;
            if self.resolution.is_none() {
                tick.penalty = true;
            }
            self.resolution = None;
        }
        tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn at(x: f32) -> MapPosition {
        MapPosition::new(x, 875.0)
    }

    #[test]
    fn speed_scales_with_beat_rate() {
        let mut rod = Rod::new();
        let mut pos = at(ROD_LEFT_X);
        rod.step(0.1, 6, false, &mut pos, |_| false);
        assert!((pos.x - (ROD_LEFT_X + 30.0)).abs() < 1e-3);

        let mut rod = Rod::new();
        let mut pos = at(ROD_LEFT_X);
        rod.step(0.1, 12, false, &mut pos, |_| false);
        assert!((pos.x - (ROD_LEFT_X + 60.0)).abs() < 1e-3);
    }

    #[test]
    fn reaching_right_bound_clamps_and_flips() {
        let mut rod = Rod::new();
        rod.resolution = Some(LegResolution::Safe);
        let mut pos = at(299.0);
        let tick = rod.step(DT, 12, false, &mut pos, |_| false);
        assert_eq!(pos.x, ROD_RIGHT_X);
        assert!(!rod.sweeping_right);
        assert!(!tick.penalty);
        assert_eq!(rod.resolution, None);
    }

    #[test]
    fn unresolved_leg_penalizes_at_bound() {
        let mut rod = Rod::new();
        let mut pos = at(299.0);
        let tick = rod.step(DT, 12, false, &mut pos, |_| false);
        assert!(tick.penalty);
        assert_eq!(tick.effect_at, None);
    }

    #[test]
    fn holding_in_safe_zone_resolves_leg_once() {
        let mut rod = Rod::new();
        let mut pos = at(150.0);
        let tick = rod.step(DT, 6, true, &mut pos, |_| true);
        assert!(!tick.penalty);
        let (ex, ey) = tick.effect_at.expect("effect");
        assert!((ex - (pos.x - 6.0)).abs() < 1e-4);
        assert_eq!(ey, 869.0);
        assert_eq!(rod.resolution, Some(LegResolution::Safe));

        let tick = rod.step(DT, 6, true, &mut pos, |_| false);
        assert_eq!(tick, RodTick::default());
    }

    #[test]
    fn holding_outside_safe_zone_penalizes_once_per_leg() {
        let mut rod = Rod::new();
        let mut pos = at(60.0);
        let tick = rod.step(DT, 6, true, &mut pos, |_| false);
        assert!(tick.penalty);
        assert!(tick.effect_at.is_some());

        let tick = rod.step(DT, 6, true, &mut pos, |_| false);
        assert!(!tick.penalty);

        // Already resolved: no fallback at the bound either
        pos.x = 299.9;
        let tick = rod.step(DT, 6, false, &mut pos, |_| false);
        assert!(!tick.penalty);
        assert!(!rod.sweeping_right);
    }

    #[test]
    fn key_is_ignored_on_the_bound_tick() {
        let mut rod = Rod::new();
        rod.sweeping_right = false;
        let mut pos = at(ROD_LEFT_X + 0.5);
        let tick = rod.step(DT, 10, true, &mut pos, |_| true);
        assert_eq!(pos.x, ROD_LEFT_X);
        assert!(rod.sweeping_right);
        assert!(tick.penalty);
        assert_eq!(tick.effect_at, None);
    }

    #[test]
    fn reset_returns_to_rest() {
        let mut rod = Rod::new();
        rod.sweeping_right = false;
        rod.key_held = true;
        rod.resolution = Some(LegResolution::Penalized);
        let mut pos = at(220.0);
        rod.reset(&mut pos);
        assert_eq!(rod, Rod::new());
        assert_eq!(pos, at(ROD_LEFT_X));
    }
}
