//! Collider overlay toggle.
//!
//! F11 (or `--debug` at startup) shows every collision box on top of the
//! scene. The overlay is on exactly while the [`DebugMode`] resource exists.
use crate::resources::debugmode::DebugMode;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Insert or remove [`DebugMode`].
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    match debug_mode {
        Some(_) => {
            commands.remove_resource::<DebugMode>();
            info!("Collider overlay hidden");
        }
        None => {
            commands.insert_resource(DebugMode {});
            info!("Collider overlay shown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_switch_flips_the_overlay() {
        let mut world = World::new();
        world.add_observer(switch_debug_observer);
        world.flush();

        world.trigger(SwitchDebugEvent {});
        world.flush();
        assert!(world.contains_resource::<DebugMode>());

        world.trigger(SwitchDebugEvent {});
        world.flush();
        assert!(!world.contains_resource::<DebugMode>());
    }
}
