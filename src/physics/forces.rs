//! Force applicator: every frame, Active shapes get an upward push plus a
//! lateral component taken from the cursor's position on screen. The force
//! acts at an off-centre point, so shapes also tumble. All other shapes have
//! their external force cleared on the same frame.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::components::{InteractionState, SpawnedShape};
use crate::core::config::{ForceConfig, GameConfig};
use crate::core::system::system_order::{configure_sandbox_sets, SandboxSet};
use crate::interaction::pointer::PointerTracker;

/// World force for an Active shape given the cursor in [-1, 1] (+y up).
/// Screen x maps to world X, screen y to world -Z (away from the viewer).
pub fn active_force(cfg: &ForceConfig, cursor_ndc: Vec2) -> Vec3 {
    let lateral = cursor_ndc * cfg.lateral_sign * cfg.lateral_gain;
    Vec3::new(lateral.x, cfg.upward, -lateral.y)
}

/// `force` applied at the body-local `offset`: the force plus the torque it
/// produces around the body origin.
pub fn force_at_offset(force: Vec3, rotation: Quat, offset: Vec3) -> ExternalForce {
    let arm = rotation * offset;
    ExternalForce {
        force,
        torque: arm.cross(force),
    }
}

pub fn apply_active_forces(
    cfg: Res<GameConfig>,
    tracker: Res<PointerTracker>,
    mut q: Query<(&InteractionState, &Transform, &mut ExternalForce), With<SpawnedShape>>,
) {
    let force = active_force(&cfg.forces, tracker.cursor_ndc());
    let offset = Vec3::from_array(cfg.forces.application_offset);
    for (state, tf, mut ext) in &mut q {
        if *state == InteractionState::Active {
            *ext = force_at_offset(force, tf.rotation, offset);
        } else if ext.force != Vec3::ZERO || ext.torque != Vec3::ZERO {
            *ext = ExternalForce::default();
        }
    }
}

pub struct ForceApplicatorPlugin;

impl Plugin for ForceApplicatorPlugin {
    fn build(&self, app: &mut App) {
        configure_sandbox_sets(app);
        app.init_resource::<PointerTracker>()
            .add_systems(Update, apply_active_forces.in_set(SandboxSet::PrePhysics));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_cursor_pushes_straight_up() {
        let cfg = ForceConfig::default();
        assert_eq!(active_force(&cfg, Vec2::ZERO), Vec3::new(0.0, 10.0, 0.0));
    }

    #[test]
    fn lateral_sign_controls_direction() {
        let mut cfg = ForceConfig::default();
        let right = Vec2::new(0.5, 0.0);
        let up = Vec2::new(0.0, 1.0);
        assert!(active_force(&cfg, right).x < 0.0);
        assert!(active_force(&cfg, up).z > 0.0);
        cfg.lateral_sign = 1.0;
        assert!(active_force(&cfg, right).x > 0.0);
        assert!(active_force(&cfg, up).z < 0.0);
    }

    #[test]
    fn off_centre_point_adds_torque() {
        let ext = force_at_offset(Vec3::Y * 10.0, Quat::IDENTITY, Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(ext.force, Vec3::Y * 10.0);
        assert!(ext.torque.length() > 0.0);
        let centred = force_at_offset(Vec3::Y * 10.0, Quat::IDENTITY, Vec3::Y);
        assert_eq!(centred.torque, Vec3::ZERO);
    }
}
