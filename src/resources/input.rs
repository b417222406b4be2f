//! Per-tick keyboard input resource.
//!
//! Captures the keys the game reads and exposes them to systems via the
//! [`InputState`] resource. Arrow keys move the player, Space is the evade
//! key during play and the confirm key on the menu and result screens.
use bevy_ecs::prelude::*;
use raylib::prelude::KeyboardKey;

use crate::components::player::DirectionKeys;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is down this tick.
    pub active: bool,
    /// Whether the key went down this tick.
    pub just_pressed: bool,
    /// Whether the key went up this tick.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }

    /// Feed the level read for this tick and derive the edges from the
    /// previous one.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// Resource capturing the per-tick keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub direction_up: BoolState,
    pub direction_down: BoolState,
    pub direction_left: BoolState,
    pub direction_right: BoolState,
    /// Evade during play, start/replay elsewhere.
    pub action_evade: BoolState,
    /// Alternative start/replay key.
    pub action_confirm: BoolState,
    pub action_back: BoolState,
    /// Debug: force the enemy into its other phase.
    pub toggle_phase: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            direction_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            direction_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            direction_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            direction_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            action_evade: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            action_confirm: BoolState::bound_to(KeyboardKey::KEY_ENTER),
            action_back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            toggle_phase: BoolState::bound_to(KeyboardKey::KEY_D),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// All key states, for polling.
    pub fn all_mut(&mut self) -> [&mut BoolState; 9] {
        [
            &mut self.direction_up,
            &mut self.direction_down,
            &mut self.direction_left,
            &mut self.direction_right,
            &mut self.action_evade,
            &mut self.action_confirm,
            &mut self.action_back,
            &mut self.toggle_phase,
            &mut self.mode_debug,
        ]
    }

    /// Direction key levels for the player controller.
    pub fn direction_keys(&self) -> DirectionKeys {
        DirectionKeys {
            left: self.direction_left.active,
            right: self.direction_right.active,
            up: self.direction_up.active,
            down: self.direction_down.active,
        }
    }

    /// Start or replay was requested this tick.
    pub fn confirm_pressed(&self) -> bool {
        self.action_evade.just_pressed || self.action_confirm.just_pressed
    }
}
