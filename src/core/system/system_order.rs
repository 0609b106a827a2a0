//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. InputCollect (raw mouse/touch -> `PointerEvent`)
//! 2. InputProcess (pointer tracker, registry commits, interaction transitions, reset)
//! 3. Realize (registry records -> shape entities with bodies)
//! 4. PrePhysics (forces for Active shapes before Rapier)
//! 5. Rapier (handled by plugin)
//! 6. Feedback (per-frame colors)
//! 7. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum SandboxSet {
    InputCollect,
    InputProcess,
    Realize,
    PrePhysics,
    Feedback,
}

pub fn configure_sandbox_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            SandboxSet::InputCollect,
            SandboxSet::InputProcess,
            SandboxSet::Realize,
            SandboxSet::PrePhysics,
            SandboxSet::Feedback,
        )
            .chain(),
    );
}
