use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Shape Sandbox".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -10.0 }
    }
}

/// Spawn point derivation + rigid body parameters for realized shapes.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    /// Added to the surface hit's Y so shapes drop in from above.
    pub vertical_offset: f32,
    /// Press->release screen distance (pixels) below which a release counts as a click.
    pub click_delta_threshold: f32,
    pub body_mass: f32,
    pub cube_half_extents: [f32; 3],
    pub orb_radius: f32,
    pub restitution: f32,
    pub friction: f32,
    /// Optional glTF model for Primary shapes (first mesh primitive is used).
    pub cube_model: Option<String>,
}
impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            vertical_offset: 5.0,
            click_delta_threshold: 2.0,
            body_mass: 1.0,
            cube_half_extents: [1.0, 1.0, 1.0],
            orb_radius: 1.0,
            restitution: 0.3,
            friction: 0.5,
            cube_model: None,
        }
    }
}
impl SpawnConfig {
    pub fn cube_half_extents(&self) -> Vec3 {
        Vec3::from_array(self.cube_half_extents)
    }
}

/// Invisible interaction surface (ground plane + view plane) bounds.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SurfaceConfig {
    pub half_extent: f32,
}
impl Default for SurfaceConfig {
    fn default() -> Self {
        Self { half_extent: 25.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ForceConfig {
    /// Constant +Y component applied to every Active shape.
    pub upward: f32,
    /// Scale of the lateral component taken from the normalized cursor position.
    pub lateral_gain: f32,
    /// -1.0 pushes away from the cursor side of the screen, 1.0 towards it.
    pub lateral_sign: f32,
    /// Body-local point the force is applied at (off-centre -> torque).
    pub application_offset: [f32; 3],
}
impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            upward: 10.0,
            lateral_gain: 1.0,
            lateral_sign: -1.0,
            application_offset: [0.5, 0.5, 0.0],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FeedbackConfig {
    /// sRGB baseline color for Idle shapes.
    pub idle_color: [f32; 3],
}
impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            idle_color: [1.0, 0.647, 0.0],
        }
    }
}
impl FeedbackConfig {
    pub fn idle(&self) -> Color {
        let [r, g, b] = self.idle_color;
        Color::srgb(r, g, b)
    }
}

/// Input profile override. `Auto` defers to platform detection.
/// Written as a string in RON (`platform: "touch"`).
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum PlatformChoice {
    #[default]
    Auto,
    Desktop,
    Touch,
}

impl TryFrom<String> for PlatformChoice {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "auto" => Ok(PlatformChoice::Auto),
            "desktop" | "mouse" => Ok(PlatformChoice::Desktop),
            "touch" | "mobile" => Ok(PlatformChoice::Touch),
            other => Err(format!(
                "unknown platform '{other}' (expected auto, desktop or touch)"
            )),
        }
    }
}

/// Camera + lighting companion preset for one input profile.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScenePreset {
    pub camera_position: [f32; 3],
    /// Pixels per world unit of the orthographic camera.
    pub camera_zoom: f32,
    pub ambient_brightness: f32,
    pub spot_intensity: f32,
    pub spot_position: [f32; 3],
}
impl Default for ScenePreset {
    fn default() -> Self {
        Self {
            camera_position: [0.0, 100.0, 50.0],
            camera_zoom: 50.0,
            ambient_brightness: 250.0,
            spot_intensity: 4_000_000.0,
            spot_position: [30.0, 30.0, 30.0],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PresetsConfig {
    pub desktop: ScenePreset,
    pub touch: ScenePreset,
}
impl Default for PresetsConfig {
    fn default() -> Self {
        Self {
            desktop: ScenePreset::default(),
            touch: ScenePreset {
                camera_position: [0.0, 60.0, 30.0],
                camera_zoom: 30.0,
                ambient_brightness: 400.0,
                spot_intensity: 6_000_000.0,
                spot_position: [20.0, 30.0, 20.0],
            },
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub spawn: SpawnConfig,
    pub surface: SurfaceConfig,
    pub forces: ForceConfig,
    pub feedback: FeedbackConfig,
    pub platform: PlatformChoice,
    pub presets: PresetsConfig,
    pub background: [f32; 3],
    pub rapier_debug: bool,
    /// Seconds between debug stats log lines (debug feature).
    pub stats_interval: f32,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            gravity: Default::default(),
            spawn: Default::default(),
            surface: Default::default(),
            forces: Default::default(),
            feedback: Default::default(),
            platform: PlatformChoice::Auto,
            presets: Default::default(),
            background: [0.5, 0.0, 0.5],
            rapier_debug: false,
            stats_interval: 5.0,
        }
    }
}

impl GameConfig {
    /// Deep-merge RON files in order (later keys win) and deserialize the result.
    /// Returns the config, the paths actually used, and any read/parse errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        if let Some((_, ev)) = bm.iter_mut().find(|(ek, _)| **ek == k) {
                            if let Some(val) = incoming.take() {
                                merge_value(ev, val);
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }

    /// Non-fatal sanity checks; each entry is a human readable warning.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.gravity.y.abs() < 1e-4 {
            w.push("gravity.y magnitude near zero; shapes will float".into());
        }
        if self.gravity.y > 0.0 {
            w.push(format!(
                "gravity.y is positive ({}); shapes will fall upwards",
                self.gravity.y
            ));
        }
        let sp = &self.spawn;
        if sp.body_mass <= 0.0 {
            w.push(format!("spawn.body_mass {} must be > 0", sp.body_mass));
        }
        if sp.cube_half_extents.iter().any(|h| *h <= 0.0) {
            w.push(format!(
                "spawn.cube_half_extents {:?} must all be > 0",
                sp.cube_half_extents
            ));
        }
        if sp.orb_radius <= 0.0 {
            w.push(format!("spawn.orb_radius {} must be > 0", sp.orb_radius));
        }
        if sp.click_delta_threshold <= 0.0 {
            w.push("spawn.click_delta_threshold <= 0; desktop clicks will never spawn".into());
        }
        if sp.vertical_offset < 0.0 {
            w.push(format!(
                "spawn.vertical_offset {} negative; shapes spawn below the surface",
                sp.vertical_offset
            ));
        }
        if !(0.0..=1.5).contains(&sp.restitution) {
            w.push(format!(
                "spawn.restitution {} outside recommended 0..1.5",
                sp.restitution
            ));
        }
        if self.surface.half_extent <= 0.0 {
            w.push("surface.half_extent must be > 0; no pointer hits possible".into());
        }
        if self.forces.upward == 0.0 && self.forces.lateral_gain == 0.0 {
            w.push("forces.upward and forces.lateral_gain are both 0; Active shapes get no push".into());
        }
        if self.forces.lateral_sign.abs() > 1.0 + f32::EPSILON {
            w.push(format!(
                "forces.lateral_sign {} should be -1.0 or 1.0 (use lateral_gain for magnitude)",
                self.forces.lateral_sign
            ));
        }
        for (label, preset) in [("desktop", &self.presets.desktop), ("touch", &self.presets.touch)] {
            if preset.camera_zoom <= 0.0 {
                w.push(format!("presets.{label}.camera_zoom must be > 0"));
            }
        }
        if self.stats_interval <= 0.0 {
            w.push("stats_interval <= 0; stats logging disabled".into());
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_clean() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
        assert_eq!(cfg.spawn.vertical_offset, 5.0);
        assert_eq!(cfg.spawn.click_delta_threshold, 2.0);
        assert_eq!(cfg.spawn.body_mass, 1.0);
    }

    #[test]
    fn partial_ron_keeps_defaults() {
        let cfg: GameConfig = ron::from_str(r#"(spawn: (vertical_offset: 3.0), platform: "touch")"#)
            .expect("parse");
        assert_eq!(cfg.spawn.vertical_offset, 3.0);
        assert_eq!(cfg.spawn.click_delta_threshold, 2.0);
        assert_eq!(cfg.platform, PlatformChoice::Touch);
        assert_eq!(cfg.forces, ForceConfig::default());
    }

    #[test]
    fn validate_flags_bad_values() {
        let mut cfg = GameConfig::default();
        cfg.spawn.body_mass = 0.0;
        cfg.gravity.y = 4.0;
        cfg.surface.half_extent = 0.0;
        let warns = cfg.validate();
        assert!(warns.iter().any(|w| w.contains("body_mass")));
        assert!(warns.iter().any(|w| w.contains("gravity.y is positive")));
        assert!(warns.iter().any(|w| w.contains("surface.half_extent")));
    }

    #[test]
    fn unknown_platform_rejected() {
        let res: Result<GameConfig, _> = ron::from_str(r#"(platform: "console")"#);
        assert!(res.is_err());
    }
}
