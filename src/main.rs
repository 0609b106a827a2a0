use std::path::PathBuf;

use anyhow::Result;
use bevy::prelude::*;
use clap::{Parser, ValueEnum};

use shape_sandbox::core::config::{log_config_report, ConfigReport, GameConfig, PlatformChoice};
use shape_sandbox::GamePlugin;

const BASE_CONFIG: &str = "assets/config/game.ron";
const LOCAL_CONFIG: &str = "assets/config/game.local.ron";

#[derive(Parser, Debug)]
#[command(author, version, about = "Click to drop physics shapes onto a floor", long_about = None)]
struct Cli {
    /// Config layer (RON); repeat to stack. Defaults to assets/config/game.ron (+ game.local.ron if present).
    #[arg(long = "config")]
    config: Vec<PathBuf>,
    /// Force an input profile instead of detecting it.
    #[arg(long, value_enum)]
    platform: Option<PlatformArg>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PlatformArg {
    Auto,
    Desktop,
    Touch,
}

impl From<PlatformArg> for PlatformChoice {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Auto => PlatformChoice::Auto,
            PlatformArg::Desktop => PlatformChoice::Desktop,
            PlatformArg::Touch => PlatformChoice::Touch,
        }
    }
}

fn config_layers(cli: &Cli) -> Vec<PathBuf> {
    if !cli.config.is_empty() {
        return cli.config.clone();
    }
    let mut layers = vec![PathBuf::from(BASE_CONFIG)];
    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
        layers.push(local);
    }
    layers
}

fn main() -> Result<()> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let cli = Cli::parse();
    let (mut cfg, used, errors) = GameConfig::load_layered(config_layers(&cli));
    if let Some(platform) = cli.platform {
        cfg.platform = platform.into();
    }
    let warnings = cfg.validate();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ConfigReport {
            used,
            errors,
            warnings,
        })
        .insert_resource(cfg)
        .add_systems(Startup, log_config_report)
        .add_plugins(GamePlugin)
        .run();
    Ok(())
}
