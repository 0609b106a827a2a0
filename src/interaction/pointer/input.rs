use bevy::prelude::*;
use bevy::window::{CursorLeft, CursorMoved, PrimaryWindow};

use super::{screen_to_ndc, PointerEvent, PointerEventKind};
use crate::core::system::system_order::{configure_sandbox_sets, SandboxSet};

/// Turns raw mouse + touch input into `PointerEvent`s. Needs a window and a
/// 3D camera, so headless apps leave it out and write `PointerEvent`s directly.
pub struct PointerInputPlugin;

impl Plugin for PointerInputPlugin {
    fn build(&self, app: &mut App) {
        configure_sandbox_sets(app);
        app.add_event::<PointerEvent>()
            .add_systems(Update, collect_pointer_events.in_set(SandboxSet::InputCollect));
    }
}

pub fn collect_pointer_events(
    mut moved: EventReader<CursorMoved>,
    mut left: EventReader<CursorLeft>,
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    ui: Query<&Interaction, With<Button>>,
    mut last_cursor: Local<Vec2>,
    mut out: EventWriter<PointerEvent>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let camera = cameras.iter().find(|(cam, _)| cam.is_active);
    let size = window.size();
    let make = |kind: PointerEventKind, screen: Vec2| {
        let ray = camera.and_then(|(cam, tf)| cam.viewport_to_world(tf, screen).ok());
        PointerEvent::new(kind, screen, screen_to_ndc(screen, size), ray)
    };
    let over_ui = ui.iter().any(|i| *i != Interaction::None);
    let cursor = window.cursor_position();

    for ev in moved.read() {
        *last_cursor = ev.position;
        out.write(make(PointerEventKind::Move, ev.position));
    }
    if let Some(pos) = cursor {
        *last_cursor = pos;
    }
    if left.read().count() > 0 {
        out.write(make(PointerEventKind::Leave, *last_cursor));
    }

    if let Some(buttons) = buttons.as_ref() {
        if buttons.just_pressed(MouseButton::Left) && !over_ui {
            if let Some(pos) = cursor {
                out.write(make(PointerEventKind::Down, pos));
            }
        }
        if buttons.just_released(MouseButton::Left) {
            let up = match cursor {
                Some(pos) => make(PointerEventKind::Up, pos),
                // Released outside the window: end the press, but there is
                // nothing under the pointer to spawn on.
                None => PointerEvent::new(
                    PointerEventKind::Up,
                    *last_cursor,
                    screen_to_ndc(*last_cursor, size),
                    None,
                ),
            };
            out.write(up);
        }
    }

    if let Some(touches) = touches.as_ref() {
        for touch in touches.iter_just_pressed() {
            if !over_ui {
                out.write(make(PointerEventKind::Down, touch.position()));
            }
        }
        for touch in touches.iter() {
            if touch.delta() != Vec2::ZERO {
                out.write(make(PointerEventKind::Move, touch.position()));
            }
        }
        for touch in touches.iter_just_released() {
            out.write(make(PointerEventKind::Up, touch.position()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::input::mouse::MouseButtonInput;
    use bevy::input::touch::{TouchInput, TouchPhase};
    use bevy::input::{ButtonState, InputPlugin};

    use crate::core::config::GameConfig;
    use crate::interaction::state::InteractionPolicy;
    use crate::interaction::pointer::PointerTracker;
    use crate::SandboxCorePlugin;

    #[derive(Resource, Default)]
    struct Seen(Vec<PointerEvent>);

    fn record(mut events: EventReader<PointerEvent>, mut seen: ResMut<Seen>) {
        seen.0.extend(events.read().copied());
    }

    fn input_app() -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, InputPlugin))
            .add_event::<CursorMoved>()
            .add_event::<CursorLeft>()
            .init_resource::<Seen>()
            .add_plugins(PointerInputPlugin)
            .add_systems(PostUpdate, record);
        let window = app
            .world_mut()
            .spawn((
                Window {
                    resolution: (800.0, 600.0).into(),
                    ..default()
                },
                PrimaryWindow,
            ))
            .id();
        (app, window)
    }

    fn set_cursor(app: &mut App, window: Entity, pos: Option<Vec2>) {
        if let Some(mut w) = app.world_mut().get_mut::<Window>(window) {
            w.set_cursor_position(pos);
        }
    }

    fn mouse(app: &mut App, window: Entity, state: ButtonState) {
        app.world_mut().send_event(MouseButtonInput {
            button: MouseButton::Left,
            state,
            window,
        });
    }

    fn touch(app: &mut App, window: Entity, phase: TouchPhase, position: Vec2) {
        app.world_mut().send_event(TouchInput {
            phase,
            position,
            window,
            force: None,
            id: 7,
        });
    }

    fn drain(app: &mut App) -> Vec<PointerEvent> {
        std::mem::take(&mut app.world_mut().resource_mut::<Seen>().0)
    }

    fn kinds(events: &[PointerEvent]) -> Vec<PointerEventKind> {
        events.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn mouse_click_becomes_down_then_up() {
        let (mut app, window) = input_app();
        set_cursor(&mut app, window, Some(Vec2::new(400.0, 300.0)));
        mouse(&mut app, window, ButtonState::Pressed);
        app.update();
        let down = drain(&mut app);
        assert_eq!(kinds(&down), vec![PointerEventKind::Down]);
        assert_eq!(down[0].screen, Vec2::new(400.0, 300.0));
        assert_eq!(down[0].ndc, Vec2::ZERO);
        // No camera in this app.
        assert!(down[0].ray.is_none());

        mouse(&mut app, window, ButtonState::Released);
        app.update();
        assert_eq!(kinds(&drain(&mut app)), vec![PointerEventKind::Up]);
    }

    #[test]
    fn cursor_moves_then_leaves() {
        let (mut app, window) = input_app();
        app.world_mut().send_event(CursorMoved {
            window,
            position: Vec2::new(200.0, 150.0),
            delta: None,
        });
        app.update();
        let moved = drain(&mut app);
        assert_eq!(kinds(&moved), vec![PointerEventKind::Move]);
        assert_eq!(moved[0].ndc, Vec2::new(-0.5, 0.5));

        app.world_mut().send_event(CursorLeft { window });
        app.update();
        let left = drain(&mut app);
        assert_eq!(kinds(&left), vec![PointerEventKind::Leave]);
        assert_eq!(left[0].screen, Vec2::new(200.0, 150.0));
    }

    #[test]
    fn press_over_ui_is_skipped_but_release_is_not() {
        let (mut app, window) = input_app();
        app.world_mut().spawn((Button, Interaction::Hovered));
        set_cursor(&mut app, window, Some(Vec2::new(30.0, 20.0)));
        mouse(&mut app, window, ButtonState::Pressed);
        app.update();
        assert!(drain(&mut app).is_empty());

        mouse(&mut app, window, ButtonState::Released);
        app.update();
        assert_eq!(kinds(&drain(&mut app)), vec![PointerEventKind::Up]);
    }

    #[test]
    fn touch_lifecycle() {
        let (mut app, window) = input_app();
        touch(&mut app, window, TouchPhase::Started, Vec2::new(50.0, 60.0));
        app.update();
        assert_eq!(kinds(&drain(&mut app)), vec![PointerEventKind::Down]);

        touch(&mut app, window, TouchPhase::Moved, Vec2::new(70.0, 60.0));
        app.update();
        let moved = drain(&mut app);
        assert_eq!(kinds(&moved), vec![PointerEventKind::Move]);
        assert_eq!(moved[0].screen, Vec2::new(70.0, 60.0));

        touch(&mut app, window, TouchPhase::Ended, Vec2::new(70.0, 60.0));
        app.update();
        assert_eq!(kinds(&drain(&mut app)), vec![PointerEventKind::Up]);
    }

    #[test]
    fn release_outside_window_still_ends_the_press() {
        let (mut app, window) = input_app();
        app.insert_resource(GameConfig::default())
            .insert_resource(InteractionPolicy::desktop())
            .add_plugins(SandboxCorePlugin);
        set_cursor(&mut app, window, Some(Vec2::new(100.0, 100.0)));
        mouse(&mut app, window, ButtonState::Pressed);
        app.update();
        drain(&mut app);

        set_cursor(&mut app, window, None);
        mouse(&mut app, window, ButtonState::Released);
        app.update();
        let up = drain(&mut app);
        assert_eq!(kinds(&up), vec![PointerEventKind::Up]);
        assert_eq!(up[0].screen, Vec2::new(100.0, 100.0));
        assert!(up[0].ray.is_none());
        let mut tracker = app.world_mut().resource_mut::<PointerTracker>();
        assert!(tracker.end_press().is_none());
    }
}
