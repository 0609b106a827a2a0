use std::fmt;

use bevy::prelude::*;
use uuid::Uuid;

/// Opaque identity of a committed spawn. Shared by the registry record and the
/// shape entity realized from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnId(Uuid);

impl SpawnId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SpawnId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SpawnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // First block of the hyphenated form is plenty for log lines.
        let s = self.0.simple().to_string();
        write!(f, "{}", &s[..8])
    }
}

/// Which of the two shape families a record realizes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpawnKind {
    /// Cube (optionally the configured glTF model).
    Primary,
    /// Orb.
    Secondary,
}

impl SpawnKind {
    /// Kind for registry position `index`: even -> Secondary, odd -> Primary.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            SpawnKind::Secondary
        } else {
            SpawnKind::Primary
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpawnKind::Primary => "cube",
            SpawnKind::Secondary => "orb",
        }
    }
}

/// Marker + identity for a dynamically spawned shape (holds physics body & collider).
/// The entity itself is the body handle inside the Rapier world.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpawnedShape {
    pub id: SpawnId,
    pub kind: SpawnKind,
}

/// Per-shape interaction state driven by the active `InteractionPolicy`.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovered,
    Active,
}

impl InteractionState {
    /// Hovered or Active shapes show the "disturbed" look.
    pub fn is_disturbed(self) -> bool {
        !matches!(self, InteractionState::Idle)
    }
}

/// Last color computed by visual feedback; the renderer copies it into the material.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone, PartialEq)]
pub struct ShapeColor(pub Color);

/// Pick volume used for pointer hit tests, in the shape's local space.
#[derive(Component, Debug, Copy, Clone, PartialEq)]
pub enum PickShape {
    Sphere { radius: f32 },
    Cuboid { half_extents: Vec3 },
}

/// Static floor (never touched by reset).
#[derive(Component)]
pub struct Floor;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_alternates_by_index() {
        let kinds: Vec<_> = (0..5).map(SpawnKind::for_index).collect();
        assert_eq!(
            kinds,
            vec![
                SpawnKind::Secondary,
                SpawnKind::Primary,
                SpawnKind::Secondary,
                SpawnKind::Primary,
                SpawnKind::Secondary,
            ]
        );
    }

    #[test]
    fn spawn_ids_are_unique() {
        let a = SpawnId::new();
        let b = SpawnId::new();
        assert_ne!(a, b);
        assert_eq!(a.to_string().len(), 8);
    }
}
