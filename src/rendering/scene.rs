use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use crate::app::platform::ActiveScenePreset;
use crate::core::config::GameConfig;

/// Camera + lights from the preset chosen at startup. Nothing here reacts to
/// reset.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, setup_lighting));
    }
}

fn setup_camera(mut commands: Commands, preset: Res<ActiveScenePreset>, cfg: Res<GameConfig>) {
    let [r, g, b] = cfg.background;
    commands.insert_resource(ClearColor(Color::srgb(r, g, b)));
    commands.spawn((
        Name::new("camera"),
        Camera3d::default(),
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::WindowSize,
            scale: 1.0 / preset.camera_zoom.max(f32::EPSILON),
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_translation(Vec3::from_array(preset.camera_position))
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn setup_lighting(mut commands: Commands, preset: Res<ActiveScenePreset>) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: preset.ambient_brightness,
        ..default()
    });
    let spot = Vec3::from_array(preset.spot_position);
    commands.spawn((
        Name::new("spot light"),
        SpotLight {
            intensity: preset.spot_intensity,
            range: spot.length() * 3.0,
            outer_angle: 0.3,
            inner_angle: 0.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(spot).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
