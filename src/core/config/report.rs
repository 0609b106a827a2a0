use bevy::prelude::*;

/// Outcome of loading + validating the layered config, logged once the log
/// plugin is up.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigReport {
    pub used: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

pub fn log_config_report(report: Option<Res<ConfigReport>>) {
    let Some(report) = report else {
        return;
    };
    if report.used.is_empty() {
        info!(target: "config", "no config files loaded; using defaults");
    } else {
        info!(target: "config", "loaded config layers: {}", report.used.join(", "));
    }
    for e in &report.errors {
        warn!(target: "config", "{e}");
    }
    for w in &report.warnings {
        warn!(target: "config", "validation: {w}");
    }
}
