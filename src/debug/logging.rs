use bevy::prelude::*;

use super::stats::{DebugState, DebugStats};

pub fn debug_logging_system(time: Res<Time>, mut state: ResMut<DebugState>, stats: Res<DebugStats>) {
    if state.log_interval <= 0.0 {
        return;
    }
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!(
            target: "stats",
            "SANDBOX frame={} t={:.3}s fps={:.1} ft_ms={:.1} commits={} records={} shapes={} hovered={} active={}",
            state.frame_counter,
            time.elapsed_secs(),
            stats.fps,
            stats.frame_time_ms,
            stats.commits_total,
            stats.registry_len,
            stats.shape_count,
            stats.hovered_count,
            stats.active_count
        );
    }
}
