use bevy::prelude::*;

use crate::core::components::SpawnKind;

/// Load status of the mesh backing one shape kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetAvailability {
    Ready,
    /// Still loading; records of this kind wait unrealized.
    Pending,
    /// Load failed for good; records of this kind are omitted.
    Failed,
}

#[derive(Debug, Clone)]
pub struct ShapeAsset {
    pub mesh: Handle<Mesh>,
    pub availability: AssetAvailability,
}

impl ShapeAsset {
    pub fn ready(mesh: Handle<Mesh>) -> Self {
        Self {
            mesh,
            availability: AssetAvailability::Ready,
        }
    }

    pub fn pending(mesh: Handle<Mesh>) -> Self {
        Self {
            mesh,
            availability: AssetAvailability::Pending,
        }
    }
}

/// Mesh per shape kind plus its availability.
#[derive(Resource, Debug, Clone)]
pub struct ShapeCatalog {
    primary: ShapeAsset,
    secondary: ShapeAsset,
}

impl Default for ShapeCatalog {
    /// Both kinds ready with placeholder handles (headless use).
    fn default() -> Self {
        Self::new(
            ShapeAsset::ready(Handle::default()),
            ShapeAsset::ready(Handle::default()),
        )
    }
}

impl ShapeCatalog {
    pub fn new(primary: ShapeAsset, secondary: ShapeAsset) -> Self {
        Self { primary, secondary }
    }

    pub fn get(&self, kind: SpawnKind) -> &ShapeAsset {
        match kind {
            SpawnKind::Primary => &self.primary,
            SpawnKind::Secondary => &self.secondary,
        }
    }

    pub fn get_mut(&mut self, kind: SpawnKind) -> &mut ShapeAsset {
        match kind {
            SpawnKind::Primary => &mut self.primary,
            SpawnKind::Secondary => &mut self.secondary,
        }
    }

    pub fn availability(&self, kind: SpawnKind) -> AssetAvailability {
        self.get(kind).availability
    }

    pub fn set_availability(&mut self, kind: SpawnKind, availability: AssetAvailability) {
        self.get_mut(kind).availability = availability;
    }
}
