use crate::entity::{Entity, EntityId};

/// The set of currently live entities, keyed by id. Backed by a `Vec`
/// because the matching scan runs over previous entries in insertion
/// order; a hash map would not preserve it.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<Entity>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            entries: Vec::with_capacity(cap),
        }
    }

    /// Caller guarantees the id is not already present; the tracker is
    /// the only writer and allocates ids from a monotonic counter.
    pub(crate) fn insert(&mut self, entity: Entity) {
        self.entries.push(entity);
    }

    pub(crate) fn into_entries(self) -> Vec<Entity> {
        self.entries
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entries.iter().find(|e| e.id == id)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entries.iter()
    }

    #[inline]
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
