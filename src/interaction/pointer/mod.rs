//! Pointer tracking: normalized pointer events, the tracked spawn point and
//! the hit tests used to route events to shapes or the surface.

use bevy::math::Ray3d;
use bevy::prelude::*;

pub mod input;
pub mod picking;
pub mod surface;

pub use input::{collect_pointer_events, PointerInputPlugin};
pub use picking::{nearest_hit, ray_hit_distance};
pub use surface::{spawn_point, InteractionSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Move,
    Down,
    Up,
    /// Pointer left the window/interaction area entirely.
    Leave,
}

/// One mouse or touch callback, already projected into the world.
#[derive(Event, Debug, Clone, Copy)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Window position in logical pixels (origin top-left).
    pub screen: Vec2,
    /// Cursor in [-1, 1], +x right, +y up.
    pub ndc: Vec2,
    /// World ray through the pointer; `None` when no camera projection exists.
    pub ray: Option<Ray3d>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, screen: Vec2, ndc: Vec2, ray: Option<Ray3d>) -> Self {
        Self {
            kind,
            screen,
            ndc,
            ray,
        }
    }
}

/// Last-known pointer state shared by spawn commits, hover routing and forces.
#[derive(Resource, Debug, Default, Clone)]
pub struct PointerTracker {
    last_hit: Option<Vec3>,
    press_screen: Option<Vec2>,
    press_consumed: bool,
    hovered: Option<Entity>,
    cursor_ndc: Vec2,
}

impl PointerTracker {
    /// Last tracked surface point raised by `vertical_offset`.
    pub fn spawn_point(&self, vertical_offset: f32) -> Option<Vec3> {
        self.last_hit.map(|hit| spawn_point(hit, vertical_offset))
    }

    pub fn hovered(&self) -> Option<Entity> {
        self.hovered
    }

    pub fn cursor_ndc(&self) -> Vec2 {
        self.cursor_ndc
    }

    pub(crate) fn track_hit(&mut self, hit: Vec3) {
        self.last_hit = Some(hit);
    }

    pub(crate) fn set_cursor(&mut self, ndc: Vec2) {
        self.cursor_ndc = ndc;
    }

    pub(crate) fn set_hovered(&mut self, hovered: Option<Entity>) -> Option<Entity> {
        std::mem::replace(&mut self.hovered, hovered)
    }

    pub(crate) fn begin_press(&mut self, screen: Vec2, consumed: bool) {
        self.press_screen = Some(screen);
        self.press_consumed = consumed;
    }

    /// Ends the current press, returning where it started and whether a shape
    /// consumed it.
    pub(crate) fn end_press(&mut self) -> Option<(Vec2, bool)> {
        let start = self.press_screen.take()?;
        Some((start, std::mem::take(&mut self.press_consumed)))
    }

    /// Forget hover (used on reset so despawned shapes are not referenced).
    pub(crate) fn clear_hover(&mut self) {
        self.hovered = None;
    }
}

/// Window position -> [-1, 1] with +y up. Degenerate sizes map to the centre.
pub fn screen_to_ndc(screen: Vec2, size: Vec2) -> Vec2 {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(screen.x / size.x * 2.0 - 1.0, 1.0 - screen.y / size.y * 2.0)
}

/// True when a press->release pair moved less than `threshold` pixels.
pub fn is_click(press: Vec2, release: Vec2, threshold: f32) -> bool {
    press.distance(release) < threshold
}
