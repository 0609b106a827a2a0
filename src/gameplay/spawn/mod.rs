//! Spawn registry (ordered records) and realization of records into
//! physics-simulated shape entities.

use bevy::prelude::*;

pub mod catalog;
pub mod realize;
pub mod registry;

pub use catalog::{AssetAvailability, ShapeAsset, ShapeCatalog};
pub use realize::{sync_shapes_with_registry, ShapeIndex};
pub use registry::{SpawnCommitted, SpawnRecord, SpawnRegistry};

use crate::core::system::system_order::{configure_sandbox_sets, SandboxSet};

pub struct SpawnPlugin;

impl Plugin for SpawnPlugin {
    fn build(&self, app: &mut App) {
        configure_sandbox_sets(app);
        app.add_event::<SpawnCommitted>()
            .init_resource::<SpawnRegistry>()
            .init_resource::<ShapeIndex>()
            .init_resource::<ShapeCatalog>()
            .add_systems(Update, sync_shapes_with_registry.in_set(SandboxSet::Realize));
    }
}
