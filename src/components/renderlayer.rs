//! Render layer component for draw ordering.
//!
//! The [`RenderLayer`] component replaces a free z-index with a fixed set of
//! layers. The renderer sorts by layer and draws back to front, so the world
//! layers always end up below the UI layers.

use bevy_ecs::prelude::Component;

/// Ordered render layer. Later variants are drawn on top.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RenderLayer {
    Back,
    Middle,
    Front1,
    Front2,
    UiBack,
    UiMiddle,
    UiFront,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_layers_sort_after_world_layers() {
        let mut layers = vec![
            RenderLayer::UiFront,
            RenderLayer::Front2,
            RenderLayer::Back,
            RenderLayer::UiBack,
            RenderLayer::Middle,
            RenderLayer::UiMiddle,
            RenderLayer::Front1,
        ];
        layers.sort();
        assert_eq!(
            layers,
            vec![
                RenderLayer::Back,
                RenderLayer::Middle,
                RenderLayer::Front1,
                RenderLayer::Front2,
                RenderLayer::UiBack,
                RenderLayer::UiMiddle,
                RenderLayer::UiFront,
            ]
        );
    }
}
