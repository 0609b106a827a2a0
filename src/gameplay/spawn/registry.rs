use bevy::prelude::*;

use crate::core::components::{SpawnId, SpawnKind};

/// One committed spawn. Immutable once created; only the registry constructs them.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnRecord {
    id: SpawnId,
    kind: SpawnKind,
    origin: Vec3,
}

impl SpawnRecord {
    pub fn id(&self) -> SpawnId {
        self.id
    }
    pub fn kind(&self) -> SpawnKind {
        self.kind
    }
    /// World-space spawn point (already includes the vertical drop offset).
    pub fn origin(&self) -> Vec3 {
        self.origin
    }
}

/// Ordered, append-only list of spawn records. The only mutations are
/// `commit` (append) and `reset` (clear everything at once).
#[derive(Resource, Debug, Default)]
pub struct SpawnRegistry {
    records: Vec<SpawnRecord>,
    generation: u64,
}

impl SpawnRegistry {
    /// Append a record at `origin`. Kind is derived from the current length.
    pub fn commit(&mut self, origin: Vec3) -> SpawnId {
        let id = SpawnId::new();
        let kind = SpawnKind::for_index(self.records.len());
        self.records.push(SpawnRecord { id, kind, origin });
        id
    }

    /// Drop every record. Returns how many were cleared.
    pub fn reset(&mut self) -> usize {
        let cleared = self.records.len();
        self.records.clear();
        self.generation += 1;
        cleared
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SpawnRecord] {
        &self.records
    }

    pub fn get(&self, id: SpawnId) -> Option<&SpawnRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Bumped by every `reset`; dependents compare it to detect teardown.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Emitted after a record is appended.
#[derive(Event, Debug, Clone, Copy)]
pub struct SpawnCommitted {
    pub id: SpawnId,
    pub kind: SpawnKind,
    pub origin: Vec3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_index_parity() {
        let mut reg = SpawnRegistry::default();
        for i in 0..7 {
            reg.commit(Vec3::new(i as f32, 5.0, 0.0));
        }
        assert_eq!(reg.len(), 7);
        for (i, rec) in reg.records().iter().enumerate() {
            assert_eq!(rec.kind(), SpawnKind::for_index(i), "index {i}");
        }
    }

    #[test]
    fn fourth_commit_is_primary() {
        let mut reg = SpawnRegistry::default();
        for _ in 0..3 {
            reg.commit(Vec3::ZERO);
        }
        let kinds: Vec<_> = reg.records().iter().map(|r| r.kind()).collect();
        assert_eq!(
            kinds,
            vec![SpawnKind::Secondary, SpawnKind::Primary, SpawnKind::Secondary]
        );
        let id = reg.commit(Vec3::ZERO);
        assert_eq!(reg.get(id).map(|r| r.kind()), Some(SpawnKind::Primary));
    }

    #[test]
    fn reset_empties_and_restarts_alternation() {
        let mut reg = SpawnRegistry::default();
        reg.commit(Vec3::ZERO);
        reg.commit(Vec3::ZERO);
        let gen = reg.generation();
        assert_eq!(reg.reset(), 2);
        assert!(reg.is_empty());
        assert_eq!(reg.generation(), gen + 1);
        let id = reg.commit(Vec3::ONE);
        assert_eq!(reg.get(id).map(|r| r.kind()), Some(SpawnKind::Secondary));
    }

    #[test]
    fn reset_on_empty_is_harmless() {
        let mut reg = SpawnRegistry::default();
        assert_eq!(reg.reset(), 0);
        assert_eq!(reg.len(), 0);
    }
}
