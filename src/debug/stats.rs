use bevy::prelude::*;

use crate::core::components::{InteractionState, SpawnedShape};
use crate::gameplay::spawn::{SpawnCommitted, SpawnRegistry};

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub frame_counter: u64,
    pub time_accum: f32,
    /// Seconds between log lines; <= 0 disables logging.
    pub log_interval: f32,
}

impl DebugState {
    pub fn new(log_interval: f32) -> Self {
        Self {
            log_interval,
            ..default()
        }
    }
}

#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    /// Commits seen since startup; unlike `registry_len` it survives resets.
    pub commits_total: u64,
    pub registry_len: usize,
    pub shape_count: usize,
    pub hovered_count: usize,
    pub active_count: usize,
}

pub fn debug_stats_collect_system(
    time: Res<Time>,
    registry: Res<SpawnRegistry>,
    mut commits: EventReader<SpawnCommitted>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
    q_shapes: Query<&InteractionState, With<SpawnedShape>>,
) {
    state.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    if stats.fps == 0.0 {
        stats.fps = inst_fps;
    } else {
        stats.fps = stats.fps * 0.9 + inst_fps * 0.1;
    }
    let inst_ms = dt * 1000.0;
    if stats.frame_time_ms == 0.0 {
        stats.frame_time_ms = inst_ms;
    } else {
        stats.frame_time_ms = stats.frame_time_ms * 0.9 + inst_ms * 0.1;
    }
    stats.commits_total += commits.read().count() as u64;
    stats.registry_len = registry.len();
    stats.shape_count = 0;
    stats.hovered_count = 0;
    stats.active_count = 0;
    for state in &q_shapes {
        stats.shape_count += 1;
        match state {
            InteractionState::Hovered => stats.hovered_count += 1,
            InteractionState::Active => stats.active_count += 1,
            InteractionState::Idle => {}
        }
    }
}
