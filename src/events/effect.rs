//! Hit effect requests.
//!
//! The rod controller triggers an [`EffectEvent`] whenever it resolves a leg
//! with the evade key held. The observer moves the single effect entity to
//! the requested position and restarts its animation.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::effect::Effect;
use crate::components::mapposition::MapPosition;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct EffectEvent {
    pub x: f32,
    pub y: f32,
}

pub fn effect_observer(trigger: On<EffectEvent>, mut query: Query<(&mut Effect, &mut MapPosition)>) {
    let event = trigger.event();
    debug!("effect at ({:.1}, {:.1})", event.x, event.y);
    for (mut effect, mut pos) in query.iter_mut() {
        pos.x = event.x;
        pos.y = event.y;
        effect.trigger();
    }
}
