use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::dispatch::process_pointer_events;
use super::pointer::PointerTracker;
use crate::core::system::system_order::{configure_sandbox_sets, SandboxSet};
use crate::gameplay::spawn::SpawnRegistry;

/// Request to clear every spawned shape. Camera, lights and floor are untouched.
#[derive(Event, Debug, Default, Clone, Copy)]
pub struct ResetRequested;

/// Reset request handling + `R` hotkey. Works headless.
pub struct ResetPlugin;

impl Plugin for ResetPlugin {
    fn build(&self, app: &mut App) {
        configure_sandbox_sets(app);
        app.add_event::<ResetRequested>().add_systems(
            Update,
            (
                reset_hotkey.in_set(SandboxSet::InputCollect),
                apply_reset_requests
                    .in_set(SandboxSet::InputProcess)
                    .before(process_pointer_events),
            ),
        );
    }
}

fn reset_hotkey(keys: Option<Res<ButtonInput<KeyCode>>>, mut out: EventWriter<ResetRequested>) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_released(KeyCode::KeyR) {
        out.write(ResetRequested);
    }
}

pub fn apply_reset_requests(
    mut requests: EventReader<ResetRequested>,
    mut registry: ResMut<SpawnRegistry>,
    mut tracker: ResMut<PointerTracker>,
) {
    if requests.read().count() == 0 {
        return;
    }
    let cleared = registry.reset();
    tracker.clear_hover();
    info!(target: "spawn", "reset: cleared {cleared} records");
}

/// On-screen reset button (press-and-release). Needs `bevy_ui`.
pub struct ResetButtonPlugin;

impl Plugin for ResetButtonPlugin {
    fn build(&self, app: &mut App) {
        configure_sandbox_sets(app);
        app.add_event::<ResetRequested>()
            .add_systems(Startup, spawn_reset_button)
            .add_systems(Update, reset_button_system.in_set(SandboxSet::InputCollect));
    }
}

#[derive(Component, Default)]
pub struct ResetButton {
    armed: bool,
}

const BUTTON_IDLE: Color = Color::srgba(0.1, 0.1, 0.1, 0.7);
const BUTTON_HOVER: Color = Color::srgba(0.25, 0.25, 0.25, 0.8);
const BUTTON_PRESSED: Color = Color::srgba(0.4, 0.15, 0.4, 0.9);

fn spawn_reset_button(mut commands: Commands) {
    commands
        .spawn((
            Button,
            ResetButton::default(),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(12.0),
                top: Val::Px(12.0),
                padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(BUTTON_IDLE),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Reset"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

fn reset_button_system(
    mut q: Query<
        (
            &Interaction,
            &ComputedNode,
            &GlobalTransform,
            &mut ResetButton,
            &mut BackgroundColor,
        ),
        Changed<Interaction>,
    >,
    touches: Option<Res<Touches>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut out: EventWriter<ResetRequested>,
) {
    // UI nodes are laid out in physical pixels, touches arrive in logical ones.
    let scale = windows.single().map(|w| w.scale_factor()).unwrap_or(1.0);
    for (interaction, node, tf, mut button, mut bg) in &mut q {
        match interaction {
            Interaction::Pressed => {
                button.armed = true;
                bg.0 = BUTTON_PRESSED;
            }
            Interaction::Hovered => {
                if std::mem::take(&mut button.armed) {
                    out.write(ResetRequested);
                }
                bg.0 = BUTTON_HOVER;
            }
            Interaction::None => {
                // A lifted finger goes straight from Pressed to None.
                let rect = Rect::from_center_size(tf.translation().truncate(), node.size());
                let lifted_inside = touches.as_ref().is_some_and(|t| {
                    t.iter_just_released()
                        .any(|touch| rect.contains(touch.position() * scale))
                });
                if std::mem::take(&mut button.armed) && lifted_inside {
                    out.write(ResetRequested);
                }
                bg.0 = BUTTON_IDLE;
            }
        }
    }
}
