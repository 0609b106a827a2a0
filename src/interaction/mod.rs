pub mod dispatch;
pub mod pointer;
pub mod reset;
pub mod state;

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::{configure_sandbox_sets, SandboxSet};
use crate::gameplay::spawn::SpawnCommitted;
use dispatch::process_pointer_events;
use pointer::{InteractionSurface, PointerEvent, PointerTracker};

/// Pointer tracker + per-shape state machine. Expects an `InteractionPolicy`
/// (see `PlatformPlugin`) and a `FeedbackPalette` resource.
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        configure_sandbox_sets(app);
        let half_extent = app
            .world()
            .get_resource::<GameConfig>()
            .map(|cfg| cfg.surface.half_extent)
            .unwrap_or_else(|| InteractionSurface::default().half_extent);
        app.add_event::<PointerEvent>()
            .add_event::<SpawnCommitted>()
            .init_resource::<PointerTracker>()
            .insert_resource(InteractionSurface { half_extent })
            .add_systems(Update, process_pointer_events.in_set(SandboxSet::InputProcess));
    }
}
