//! Visual feedback: display color as a function of interaction state.
//!
//! Idle shapes show the configured baseline color. Hovered and Active shapes
//! draw a fresh color from the palette's `ColorSource` on every recompute, so
//! they flicker while disturbed. The source is swappable for deterministic
//! tests.

use bevy::prelude::*;
use rand::Rng;

use crate::core::components::{InteractionState, ShapeColor, SpawnedShape};
use crate::core::config::GameConfig;
use crate::core::system::system_order::{configure_sandbox_sets, SandboxSet};

/// Generator for "disturbed" colors.
pub trait ColorSource: Send + Sync + 'static {
    fn next_color(&mut self) -> Color;
}

/// Uniform random 24-bit sRGB color.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomColors;

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Color {
        let rgb: u32 = rand::thread_rng().gen_range(0..=0xFF_FFFF);
        let [_, r, g, b] = rgb.to_be_bytes();
        Color::srgb_u8(r, g, b)
    }
}

/// Cycles through a fixed list.
#[derive(Debug, Clone)]
pub struct SequenceColors {
    colors: Vec<Color>,
    cursor: usize,
}

impl SequenceColors {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors, cursor: 0 }
    }
}

impl ColorSource for SequenceColors {
    fn next_color(&mut self) -> Color {
        if self.colors.is_empty() {
            return Color::WHITE;
        }
        let c = self.colors[self.cursor % self.colors.len()];
        self.cursor = self.cursor.wrapping_add(1);
        c
    }
}

#[derive(Resource)]
pub struct FeedbackPalette {
    source: Box<dyn ColorSource>,
}

impl FeedbackPalette {
    pub fn new(source: impl ColorSource) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    pub fn next_color(&mut self) -> Color {
        self.source.next_color()
    }
}

impl Default for FeedbackPalette {
    fn default() -> Self {
        Self::new(RandomColors)
    }
}

/// Color for `state`: baseline when Idle, a fresh palette draw otherwise.
pub fn feedback_color(state: InteractionState, idle: Color, palette: &mut FeedbackPalette) -> Color {
    if state.is_disturbed() {
        palette.next_color()
    } else {
        idle
    }
}

/// Per-frame recompute; disturbed shapes get a new color every frame.
pub fn refresh_feedback_colors(
    cfg: Res<GameConfig>,
    mut palette: ResMut<FeedbackPalette>,
    mut q: Query<(&InteractionState, &mut ShapeColor), With<SpawnedShape>>,
) {
    let idle = cfg.feedback.idle();
    for (state, mut color) in &mut q {
        let next = feedback_color(*state, idle, &mut palette);
        if color.0 != next {
            color.0 = next;
        }
    }
}

pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        configure_sandbox_sets(app);
        if !app.world().contains_resource::<FeedbackPalette>() {
            app.init_resource::<FeedbackPalette>();
        }
        app.add_systems(Update, refresh_feedback_colors.in_set(SandboxSet::Feedback));
    }
}
