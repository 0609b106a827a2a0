use bevy::prelude::*;

use super::pointer::{
    is_click, nearest_hit, InteractionSurface, PointerEvent, PointerEventKind,
    PointerTracker,
};
use super::state::{CommitTrigger, InteractionInput, InteractionPolicy};
use crate::core::components::{InteractionState, PickShape, ShapeColor, SpawnedShape};
use crate::core::config::GameConfig;
use crate::gameplay::spawn::{SpawnCommitted, SpawnRegistry};
use crate::rendering::feedback::{feedback_color, FeedbackPalette};

type ShapeQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static Transform,
        &'static PickShape,
        &'static mut InteractionState,
        &'static mut ShapeColor,
    ),
    With<SpawnedShape>,
>;

/// Handles pointer events in arrival order. Each event fully updates the
/// tracker, the registry and any shape state before the next one is read.
pub fn process_pointer_events(
    mut events: EventReader<PointerEvent>,
    policy: Res<InteractionPolicy>,
    surface: Res<InteractionSurface>,
    cfg: Res<GameConfig>,
    mut tracker: ResMut<PointerTracker>,
    mut registry: ResMut<SpawnRegistry>,
    mut palette: ResMut<FeedbackPalette>,
    mut shapes: ShapeQuery,
    mut committed: EventWriter<SpawnCommitted>,
) {
    let idle = cfg.feedback.idle();
    let offset = cfg.spawn.vertical_offset;
    let mut stimulate = |shapes: &mut ShapeQuery, entity: Entity, input: InteractionInput| {
        let Ok((_, _, _, mut state, mut color)) = shapes.get_mut(entity) else {
            return;
        };
        let from = *state;
        if policy.apply(&mut state, input) {
            color.0 = feedback_color(*state, idle, &mut palette);
            debug!(
                target: "interaction",
                "{entity:?} {from:?} --{input:?}--> {:?}",
                *state
            );
        }
    };

    for ev in events.read() {
        tracker.set_cursor(ev.ndc);
        let shape_hit = ev.ray.and_then(|ray| {
            nearest_hit(
                ray,
                shapes.iter().map(|(e, tf, pick, _, _)| (e, *tf, *pick)),
            )
        });
        let surface_hit = ev.ray.and_then(|ray| surface.intersect(ray));

        match ev.kind {
            PointerEventKind::Move => {
                if policy.supports_hover() {
                    update_hover(&mut tracker, shape_hit, |e, input| {
                        stimulate(&mut shapes, e, input)
                    });
                }
                if let Some(hit) = surface_hit {
                    tracker.track_hit(hit);
                }
            }
            PointerEventKind::Leave => {
                if policy.supports_hover() {
                    update_hover(&mut tracker, None, |e, input| stimulate(&mut shapes, e, input));
                }
            }
            PointerEventKind::Down => {
                if let Some(entity) = shape_hit {
                    tracker.begin_press(ev.screen, true);
                    stimulate(&mut shapes, entity, InteractionInput::Press);
                    continue;
                }
                tracker.begin_press(ev.screen, false);
                let Some(hit) = surface_hit else {
                    continue;
                };
                tracker.track_hit(hit);
                if policy.commit_trigger() != CommitTrigger::Press {
                    continue;
                }
                if let Some(origin) = tracker.spawn_point(offset) {
                    commit(&mut registry, &mut committed, origin);
                }
            }
            PointerEventKind::Up => {
                let active: Vec<Entity> = shapes
                    .iter()
                    .filter(|(_, _, _, state, _)| **state == InteractionState::Active)
                    .map(|(e, ..)| e)
                    .collect();
                for entity in active {
                    stimulate(&mut shapes, entity, InteractionInput::Release);
                }
                let Some((start, consumed)) = tracker.end_press() else {
                    continue;
                };
                if consumed || policy.commit_trigger() != CommitTrigger::ClickRelease {
                    continue;
                }
                let Some(hit) = surface_hit else {
                    continue;
                };
                tracker.track_hit(hit);
                if !is_click(start, ev.screen, cfg.spawn.click_delta_threshold) {
                    debug!(target: "spawn", "drag release ignored");
                } else if let Some(origin) = tracker.spawn_point(offset) {
                    commit(&mut registry, &mut committed, origin);
                }
            }
        }
    }
}

fn update_hover(
    tracker: &mut PointerTracker,
    under_pointer: Option<Entity>,
    mut stimulate: impl FnMut(Entity, InteractionInput),
) {
    if tracker.hovered() == under_pointer {
        return;
    }
    if let Some(prev) = tracker.set_hovered(under_pointer) {
        stimulate(prev, InteractionInput::Leave);
    }
    if let Some(next) = under_pointer {
        stimulate(next, InteractionInput::Enter);
    }
}

fn commit(registry: &mut SpawnRegistry, committed: &mut EventWriter<SpawnCommitted>, origin: Vec3) {
    let id = registry.commit(origin);
    let Some(record) = registry.get(id) else {
        return;
    };
    info!(
        target: "spawn",
        "commit #{} {} {} at {:?}",
        registry.len() - 1,
        record.kind().label(),
        id,
        origin
    );
    committed.write(SpawnCommitted {
        id,
        kind: record.kind(),
        origin,
    });
}
