//! Platform adapter: picks the input profile once at startup and installs the
//! matching `InteractionPolicy` plus its camera/lighting preset. There is no
//! runtime switching.

use bevy::prelude::*;

use crate::core::config::{GameConfig, PlatformChoice, ScenePreset};
use crate::interaction::state::{InputProfile, InteractionPolicy};

/// Camera + lighting preset for the selected profile.
#[derive(Resource, Debug, Clone, Deref)]
pub struct ActiveScenePreset(pub ScenePreset);

/// Best guess of the host's input capability.
pub fn detect_input_profile() -> InputProfile {
    #[cfg(target_arch = "wasm32")]
    {
        let touch_points = web_sys::window()
            .map(|w| w.navigator().max_touch_points())
            .unwrap_or(0);
        if touch_points > 0 {
            return InputProfile::Touch;
        }
    }
    InputProfile::Desktop
}

/// Explicit choices win; `Auto` defers to `detect`.
pub fn resolve_profile(choice: PlatformChoice, detect: impl FnOnce() -> InputProfile) -> InputProfile {
    match choice {
        PlatformChoice::Desktop => InputProfile::Desktop,
        PlatformChoice::Touch => InputProfile::Touch,
        PlatformChoice::Auto => detect(),
    }
}

pub struct PlatformPlugin;

impl Plugin for PlatformPlugin {
    fn build(&self, app: &mut App) {
        let cfg = app
            .world()
            .get_resource::<GameConfig>()
            .cloned()
            .unwrap_or_default();
        // A policy inserted up front (tests, embedding) is kept as is.
        let policy = match app.world().get_resource::<InteractionPolicy>() {
            Some(policy) => *policy,
            None => InteractionPolicy::for_profile(resolve_profile(cfg.platform, detect_input_profile)),
        };
        let preset = match policy.profile() {
            InputProfile::Desktop => cfg.presets.desktop.clone(),
            InputProfile::Touch => cfg.presets.touch.clone(),
        };
        info!(
            target: "platform",
            "input profile: {} (config {:?})",
            policy.profile().label(),
            cfg.platform
        );
        app.insert_resource(policy)
            .insert_resource(ActiveScenePreset(preset));
    }
}
