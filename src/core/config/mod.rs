pub mod config;
pub mod report;

pub use config::{
    FeedbackConfig, ForceConfig, GameConfig, GravityConfig, PlatformChoice, PresetsConfig,
    ScenePreset, SpawnConfig, SurfaceConfig, WindowConfig,
};
pub use report::{log_config_report, ConfigReport};
