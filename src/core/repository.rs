//! Repository-Abstraktion je Entitätsart mit In-Memory-Implementierung.

use indexmap::IndexMap;
use thiserror::Error;

use super::content::{Entity, EntityId, ValidationIssue};

/// Fehler bei Repository-Operationen.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{kind} #{id} nicht gefunden")]
    NotFound { kind: &'static str, id: EntityId },
    #[error("{kind} ungültig: {issue}")]
    Invalid {
        kind: &'static str,
        issue: ValidationIssue,
    },
    #[error("{kind} '{value}' existiert bereits")]
    Duplicate { kind: &'static str, value: String },
}

/// CRUD-Vertrag für eine Entitätsart; austauschbar gegen echte Datenbanken.
pub trait Repository<T: Entity> {
    /// Alle Einträge in Einfügereihenfolge.
    fn get_all(&self) -> Vec<&T>;
    fn get_by_id(&self, id: EntityId) -> Option<&T>;
    /// Vergibt eine neue ID, validiert und speichert.
    fn create(&mut self, item: T) -> Result<EntityId, RepositoryError>;
    /// Ersetzt einen bestehenden Eintrag (gleiche ID).
    fn update(&mut self, item: T) -> Result<(), RepositoryError>;
    /// Entfernt einen Eintrag und gibt ihn zurück.
    fn delete(&mut self, id: EntityId) -> Result<T, RepositoryError>;

    fn len(&self) -> usize {
        self.get_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn validated<T: Entity>(item: &T) -> Result<(), RepositoryError> {
    item.validate().map_err(|issue| RepositoryError::Invalid {
        kind: T::KIND_LABEL,
        issue,
    })
}

/// In-Memory-Store mit stabiler Einfügereihenfolge.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T: Entity> {
    items: IndexMap<EntityId, T>,
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }

    /// Übernimmt bereits gespeicherte Einträge unverändert (IDs bleiben erhalten).
    ///
    /// Doppelte IDs: der spätere Eintrag gewinnt.
    pub fn from_items(items: Vec<T>) -> Self {
        let mut map = IndexMap::with_capacity(items.len());
        for item in items {
            map.insert(item.id(), item);
        }
        Self { items: map }
    }

    /// Klont alle Einträge (für Serialisierung).
    pub fn to_vec(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    /// Iteriert in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    fn next_id(&self) -> EntityId {
        self.items.keys().copied().max().unwrap_or(0) + 1
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn get_all(&self) -> Vec<&T> {
        self.items.values().collect()
    }

    fn get_by_id(&self, id: EntityId) -> Option<&T> {
        self.items.get(&id)
    }

    fn create(&mut self, mut item: T) -> Result<EntityId, RepositoryError> {
        validated(&item)?;
        let id = self.next_id();
        item.set_id(id);
        self.items.insert(id, item);
        log::debug!("{} #{} angelegt", T::KIND_LABEL, id);
        Ok(id)
    }

    fn update(&mut self, item: T) -> Result<(), RepositoryError> {
        validated(&item)?;
        let id = item.id();
        let slot = self.items.get_mut(&id).ok_or(RepositoryError::NotFound {
            kind: T::KIND_LABEL,
            id,
        })?;
        *slot = item;
        Ok(())
    }

    fn delete(&mut self, id: EntityId) -> Result<T, RepositoryError> {
        self.items
            .shift_remove(&id)
            .ok_or(RepositoryError::NotFound {
                kind: T::KIND_LABEL,
                id,
            })
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
