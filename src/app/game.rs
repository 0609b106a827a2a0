// This file is part of Shape Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::app::platform::PlatformPlugin;
use crate::core::system::system_order::configure_sandbox_sets;
use crate::debug::DebugPlugin;
use crate::gameplay::spawn::SpawnPlugin;
use crate::interaction::pointer::PointerInputPlugin;
use crate::interaction::reset::{ResetButtonPlugin, ResetPlugin};
use crate::interaction::InteractionPlugin;
use crate::physics::forces::ForceApplicatorPlugin;
use crate::physics::rapier_physics::PhysicsSetupPlugin;
use crate::rendering::feedback::FeedbackPlugin;
use crate::rendering::RenderingPlugin;

/// Spawn/interaction logic without window, renderer or physics engine.
/// Headless tests drive it with `PointerEvent`s.
pub struct SandboxCorePlugin;

impl Plugin for SandboxCorePlugin {
    fn build(&self, app: &mut App) {
        configure_sandbox_sets(app);
        app.add_plugins((
            PlatformPlugin,
            SpawnPlugin,
            FeedbackPlugin,
            InteractionPlugin,
            ForceApplicatorPlugin,
            ResetPlugin,
        ));
    }
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            SandboxCorePlugin,
            PhysicsSetupPlugin,
            PointerInputPlugin,
            RenderingPlugin,
            ResetButtonPlugin,
            DebugPlugin,
        ));
    }
}
