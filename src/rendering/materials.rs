use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::core::components::{Floor, ShapeColor, SpawnKind, SpawnedShape};
use crate::core::config::GameConfig;
use crate::gameplay::spawn::{AssetAvailability, ShapeAsset, ShapeCatalog};

pub struct MaterialsPlugin;

impl Plugin for MaterialsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, build_shape_catalog).add_systems(
            Update,
            (
                track_shape_assets,
                attach_shape_materials,
                sync_shape_materials.after(attach_shape_materials),
                attach_floor_visual,
            ),
        );
    }
}

/// Built-in sphere for orbs; cuboid or configured glTF mesh for cubes.
fn build_shape_catalog(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    asset_server: Res<AssetServer>,
    cfg: Res<GameConfig>,
) {
    let sp = &cfg.spawn;
    let orb = ShapeAsset::ready(meshes.add(Sphere::new(sp.orb_radius).mesh().uv(32, 18)));
    let cube = match &sp.cube_model {
        Some(path) => {
            info!(target: "assets", "loading cube model {path}");
            ShapeAsset::pending(
                asset_server.load(
                    GltfAssetLabel::Primitive {
                        mesh: 0,
                        primitive: 0,
                    }
                    .from_asset(path.clone()),
                ),
            )
        }
        None => ShapeAsset::ready(meshes.add(Cuboid::from_size(sp.cube_half_extents() * 2.0))),
    };
    commands.insert_resource(ShapeCatalog::new(cube, orb));
}

/// Promote pending meshes to Ready or Failed once the asset server knows.
fn track_shape_assets(asset_server: Res<AssetServer>, mut catalog: ResMut<ShapeCatalog>) {
    for kind in [SpawnKind::Primary, SpawnKind::Secondary] {
        if catalog.availability(kind) != AssetAvailability::Pending {
            continue;
        }
        let id = catalog.get(kind).mesh.id();
        match asset_server.get_load_state(id) {
            Some(LoadState::Loaded) => {
                info!(target: "assets", "{} mesh loaded", kind.label());
                catalog.set_availability(kind, AssetAvailability::Ready);
            }
            Some(LoadState::Failed(err)) => {
                warn!(target: "assets", "{} mesh failed to load: {err}", kind.label());
                catalog.set_availability(kind, AssetAvailability::Failed);
            }
            _ => {}
        }
    }
}

fn shape_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        perceptual_roughness: 0.6,
        ..default()
    }
}

fn attach_shape_materials(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    q: Query<(Entity, &ShapeColor), Added<SpawnedShape>>,
) {
    for (entity, color) in &q {
        let handle = materials.add(shape_material(color.0));
        commands.entity(entity).insert(MeshMaterial3d(handle));
    }
}

/// Copy the feedback color into each shape's own material.
fn sync_shape_materials(
    mut materials: ResMut<Assets<StandardMaterial>>,
    q: Query<(&ShapeColor, &MeshMaterial3d<StandardMaterial>), Changed<ShapeColor>>,
) {
    for (color, handle) in &q {
        if let Some(mat) = materials.get_mut(&handle.0) {
            mat.base_color = color.0;
        }
    }
}

fn attach_floor_visual(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<GameConfig>,
    q: Query<Entity, Added<Floor>>,
) {
    let he = cfg.surface.half_extent;
    for entity in &q {
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Plane3d::default().mesh().size(he * 2.0, he * 2.0))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.9, 0.9, 0.9),
                perceptual_roughness: 0.9,
                ..default()
            })),
        ));
    }
}
