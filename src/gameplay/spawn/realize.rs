use std::collections::{HashMap, HashSet};

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::catalog::{AssetAvailability, ShapeCatalog};
use super::registry::{SpawnRecord, SpawnRegistry};
use crate::core::components::{
    InteractionState, PickShape, ShapeColor, SpawnId, SpawnKind, SpawnedShape,
};
use crate::core::config::GameConfig;

/// Maps each realized record to its shape entity. Holds the registry
/// generation it was last synchronized with so a reset is noticed even when
/// records were committed again in the same frame.
#[derive(Resource, Debug, Default)]
pub struct ShapeIndex {
    generation: u64,
    by_id: HashMap<SpawnId, Entity>,
    omitted: HashSet<SpawnId>,
    failure_logged: HashSet<SpawnKind>,
}

impl ShapeIndex {
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Records skipped because their kind's asset failed to load.
    pub fn omitted(&self) -> usize {
        self.omitted.len()
    }
}

/// Tear down everything after a registry reset, then realize any record that
/// has no shape yet.
pub fn sync_shapes_with_registry(
    mut commands: Commands,
    registry: Res<SpawnRegistry>,
    catalog: Res<ShapeCatalog>,
    cfg: Res<GameConfig>,
    mut index: ResMut<ShapeIndex>,
) {
    if index.generation != registry.generation() {
        let released = index.by_id.len();
        for (_, entity) in index.by_id.drain() {
            commands.entity(entity).despawn();
        }
        index.omitted.clear();
        index.generation = registry.generation();
        info!(target: "spawn", "reset released {released} shape bodies");
    }

    for record in registry.records() {
        let id = record.id();
        if index.by_id.contains_key(&id) || index.omitted.contains(&id) {
            continue;
        }
        match catalog.availability(record.kind()) {
            AssetAvailability::Ready => {
                let entity = spawn_shape(&mut commands, record, &catalog, &cfg);
                index.by_id.insert(id, entity);
                debug!(
                    target: "spawn",
                    "realized {} {} at {:?} -> {:?}",
                    record.kind().label(),
                    id,
                    record.origin(),
                    entity
                );
            }
            AssetAvailability::Pending => {}
            AssetAvailability::Failed => {
                index.omitted.insert(id);
                if index.failure_logged.insert(record.kind()) {
                    warn!(
                        target: "assets",
                        "{} mesh unavailable; omitting {} shapes",
                        record.kind().label(),
                        record.kind().label()
                    );
                }
            }
        }
    }
}

fn spawn_shape(
    commands: &mut Commands,
    record: &SpawnRecord,
    catalog: &ShapeCatalog,
    cfg: &GameConfig,
) -> Entity {
    let sp = &cfg.spawn;
    let (collider, pick) = match record.kind() {
        SpawnKind::Primary => {
            let h = sp.cube_half_extents();
            (
                Collider::cuboid(h.x, h.y, h.z),
                PickShape::Cuboid { half_extents: h },
            )
        }
        SpawnKind::Secondary => (
            Collider::ball(sp.orb_radius),
            PickShape::Sphere {
                radius: sp.orb_radius,
            },
        ),
    };
    commands
        .spawn((
            Name::new(format!("{} {}", record.kind().label(), record.id())),
            SpawnedShape {
                id: record.id(),
                kind: record.kind(),
            },
            InteractionState::Idle,
            ShapeColor(cfg.feedback.idle()),
            pick,
            Transform::from_translation(record.origin()),
            RigidBody::Dynamic,
            collider,
            ColliderMassProperties::Mass(sp.body_mass),
            Velocity::zero(),
            ExternalForce::default(),
            Restitution::coefficient(sp.restitution),
            Friction::coefficient(sp.friction),
            Mesh3d(catalog.get(record.kind()).mesh.clone()),
        ))
        .id()
}
