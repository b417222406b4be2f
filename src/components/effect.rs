//! Rod hit effect.
//!
//! Five frames, [`EFFECT_FRAME_TIME`] each, then hidden until the next
//! trigger.

use bevy_ecs::prelude::Component;

use crate::consts::{EFFECT_FRAMES, EFFECT_FRAME_TIME};

/// One-shot hit animation played where the rod resolves a leg.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct Effect {
    pub render_time: f32,
    pub active: bool,
}

impl Effect {
    /// Restart the animation from its first frame.
    pub fn trigger(&mut self) {
        self.render_time = 0.0;
        self.active = true;
    }

    /// Advance the animation; `None` once it has finished (or never started).
    pub fn advance(&mut self, dt: f32) -> Option<u8> {
        if !self.active {
            return None;
        }
        self.render_time += dt;
        let frame = (self.render_time / EFFECT_FRAME_TIME) as u8 + 1;
        if frame > EFFECT_FRAMES {
            self.active = false;
            return None;
        }
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_five_frames_then_hides() {
        let mut effect = Effect::default();
        assert_eq!(effect.advance(0.01), None);

        effect.trigger();
        let frames: Vec<_> = (0..6).map(|_| effect.advance(0.045)).collect();
        assert_eq!(
            frames,
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None]
        );
        assert!(!effect.active);
    }

    #[test]
    fn retrigger_restarts() {
        let mut effect = Effect::default();
        effect.trigger();
        effect.advance(0.12);
        effect.trigger();
        assert_eq!(effect.advance(0.01), Some(1));
    }
}
