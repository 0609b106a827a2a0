use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::components::Floor;
use crate::core::config::GameConfig;

/// Floor collider half thickness; its top face sits at y = 0.
const FLOOR_HALF_THICKNESS: f32 = 0.5;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier & the static floor

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let debug_render = app
            .world()
            .get_resource::<GameConfig>()
            .is_some_and(|cfg| cfg.rapier_debug);
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            .add_systems(Startup, spawn_floor_body)
            .add_systems(Update, configure_gravity);
        if debug_render {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

fn configure_gravity(
    mut contexts: Query<&mut RapierConfiguration, Added<RapierConfiguration>>,
    cfg: Res<GameConfig>,
) {
    for mut rapier_cfg in &mut contexts {
        rapier_cfg.gravity = Vect::new(0.0, cfg.gravity.y, 0.0);
        info!(target: "physics", "gravity set to {:?}", rapier_cfg.gravity);
    }
}

/// Static floor; survives every reset.
pub fn spawn_floor_body(mut commands: Commands, cfg: Res<GameConfig>) {
    let he = cfg.surface.half_extent;
    commands.spawn((
        Name::new("floor"),
        Floor,
        Transform::default(),
        RigidBody::Fixed,
        Collider::compound(vec![(
            Vect::new(0.0, -FLOOR_HALF_THICKNESS, 0.0),
            Quat::IDENTITY,
            Collider::cuboid(he, FLOOR_HALF_THICKNESS, he),
        )]),
        Friction::coefficient(cfg.spawn.friction),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_spawned_once() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<GameConfig>()
            .add_systems(Startup, spawn_floor_body);
        app.update();
        let world = app.world_mut();
        let floors = world.query_filtered::<&RigidBody, With<Floor>>().iter(world).count();
        assert_eq!(floors, 1);
    }
}
