//! Sammelt alle Repositories und persistiert sie im Key-Value-Speicher.

use serde::{Deserialize, Serialize};

use super::content::{
    is_valid_email, BlogPost, Entity, EntityId, Founder, Project, Review, Subscriber, TeamMember,
};
use super::repository::{InMemoryRepository, Repository, RepositoryError};
use super::seed;
use super::storage::{KeyValueStore, StorageError};

/// Herkunft einer geladenen Sammlung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Aus dem Speicher gelesen
    Stored,
    /// Schlüssel fehlte: Beispieldaten (erster Start)
    Seeded,
    /// Gespeicherter Wert war defekt: Beispieldaten
    Recovered,
}

/// Zusammenfassung eines Ladevorgangs (eine Quelle je Sammlung).
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub sources: Vec<(&'static str, LoadSource)>,
}

impl LoadReport {
    /// Ob mindestens eine Sammlung neu befüllt wurde und gespeichert werden sollte.
    pub fn needs_save(&self) -> bool {
        self.sources
            .iter()
            .any(|(_, source)| *source != LoadSource::Stored)
    }
}

/// Vollständiger Export aller Sammlungen (Backup-Datei).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSnapshot {
    pub blogs: Vec<BlogPost>,
    pub projects: Vec<Project>,
    pub team: Vec<TeamMember>,
    pub founders: Vec<Founder>,
    pub reviews: Vec<Review>,
    pub subscribers: Vec<Subscriber>,
}

/// Alle Inhalte des Studios.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    pub blogs: InMemoryRepository<BlogPost>,
    pub projects: InMemoryRepository<Project>,
    pub team: InMemoryRepository<TeamMember>,
    pub founders: InMemoryRepository<Founder>,
    pub reviews: InMemoryRepository<Review>,
    pub subscribers: InMemoryRepository<Subscriber>,
}

fn load_collection<T: Entity>(
    kv: &dyn KeyValueStore,
    fallback: fn() -> Vec<T>,
    report: &mut LoadReport,
) -> InMemoryRepository<T> {
    let (items, source) = match kv.get_string(T::STORAGE_KEY) {
        None => (fallback(), LoadSource::Seeded),
        Some(raw) => match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => (items, LoadSource::Stored),
            Err(e) => {
                log::warn!(
                    "Gespeicherte Daten unter '{}' fehlerhaft, verwende Beispieldaten: {}",
                    T::STORAGE_KEY,
                    e
                );
                (fallback(), LoadSource::Recovered)
            }
        },
    };
    report.sources.push((T::STORAGE_KEY, source));
    InMemoryRepository::from_items(items)
}

fn save_collection<T: Entity>(
    kv: &mut dyn KeyValueStore,
    repo: &InMemoryRepository<T>,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(&repo.to_vec())?;
    kv.set_string(T::STORAGE_KEY, json);
    Ok(())
}

impl ContentStore {
    /// Alle Speicherschlüssel in Ladereihenfolge.
    pub const STORAGE_KEYS: [&'static str; 6] = [
        BlogPost::STORAGE_KEY,
        Project::STORAGE_KEY,
        TeamMember::STORAGE_KEY,
        Founder::STORAGE_KEY,
        Review::STORAGE_KEY,
        Subscriber::STORAGE_KEY,
    ];

    /// Leerer Store ohne Inhalte.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store mit Beispieldaten.
    pub fn seeded() -> Self {
        Self {
            blogs: InMemoryRepository::from_items(seed::blog_posts()),
            projects: InMemoryRepository::from_items(seed::projects()),
            team: InMemoryRepository::from_items(seed::team_members()),
            founders: InMemoryRepository::from_items(seed::founders()),
            reviews: InMemoryRepository::from_items(seed::reviews()),
            subscribers: InMemoryRepository::from_items(seed::subscribers()),
        }
    }

    /// Lädt alle Sammlungen. Fehlende Schlüssel werden mit Beispieldaten befüllt.
    pub fn load(kv: &dyn KeyValueStore) -> (Self, LoadReport) {
        let mut report = LoadReport::default();
        let store = Self {
            blogs: load_collection(kv, seed::blog_posts, &mut report),
            projects: load_collection(kv, seed::projects, &mut report),
            team: load_collection(kv, seed::team_members, &mut report),
            founders: load_collection(kv, seed::founders, &mut report),
            reviews: load_collection(kv, seed::reviews, &mut report),
            subscribers: load_collection(kv, seed::subscribers, &mut report),
        };
        log::info!(
            "Inhalte geladen: {} Blogs, {} Projekte, {} Team, {} Gründer, {} Reviews, {} Abonnenten",
            store.blogs.len(),
            store.projects.len(),
            store.team.len(),
            store.founders.len(),
            store.reviews.len(),
            store.subscribers.len()
        );
        (store, report)
    }

    /// Schreibt alle Sammlungen in den Speicher.
    pub fn save(&self, kv: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        save_collection(kv, &self.blogs)?;
        save_collection(kv, &self.projects)?;
        save_collection(kv, &self.team)?;
        save_collection(kv, &self.founders)?;
        save_collection(kv, &self.reviews)?;
        save_collection(kv, &self.subscribers)?;
        log::debug!("Inhalte gespeichert");
        Ok(())
    }

    /// Setzt alle Sammlungen auf die Beispieldaten zurück.
    pub fn reset_to_seed(&mut self) {
        *self = Self::seeded();
        log::info!("Inhalte auf Beispieldaten zurückgesetzt");
    }

    /// Meldet eine E-Mail-Adresse an (getrimmt, kleingeschrieben, ohne Duplikate).
    pub fn subscribe(&mut self, email: &str, now_unix: u64) -> Result<EntityId, RepositoryError> {
        let email = email.trim().to_lowercase();
        if !is_valid_email(&email) {
            // Validierung im Repository liefert die passende Fehlermeldung
            return self.subscribers.create(Subscriber {
                id: 0,
                email,
                subscribed_at: now_unix,
            });
        }
        if self.subscribers.iter().any(|s| s.email == email) {
            return Err(RepositoryError::Duplicate {
                kind: Subscriber::KIND_LABEL,
                value: email,
            });
        }
        self.subscribers.create(Subscriber {
            id: 0,
            email,
            subscribed_at: now_unix,
        })
    }

    /// Momentaufnahme aller Sammlungen.
    pub fn snapshot(&self) -> ContentSnapshot {
        ContentSnapshot {
            blogs: self.blogs.to_vec(),
            projects: self.projects.to_vec(),
            team: self.team.to_vec(),
            founders: self.founders.to_vec(),
            reviews: self.reviews.to_vec(),
            subscribers: self.subscribers.to_vec(),
        }
    }

    /// Ersetzt alle Sammlungen durch eine Momentaufnahme.
    pub fn restore(&mut self, snapshot: ContentSnapshot) {
        self.blogs = InMemoryRepository::from_items(snapshot.blogs);
        self.projects = InMemoryRepository::from_items(snapshot.projects);
        self.team = InMemoryRepository::from_items(snapshot.team);
        self.founders = InMemoryRepository::from_items(snapshot.founders);
        self.reviews = InMemoryRepository::from_items(snapshot.reviews);
        self.subscribers = InMemoryRepository::from_items(snapshot.subscribers);
    }

    /// Exportiert alle Inhalte als JSON-Datei.
    pub fn export_to_file(&self, path: &std::path::Path) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(&self.snapshot())?;
        std::fs::write(path, content)?;
        log::info!("Inhalte exportiert nach: {}", path.display());
        Ok(())
    }

    /// Importiert Inhalte aus einer JSON-Datei und ersetzt den aktuellen Stand.
    pub fn import_from_file(&mut self, path: &std::path::Path) -> Result<(), StorageError> {
        let content = std::fs::read_to_string(path)?;
        let snapshot: ContentSnapshot = serde_json::from_str(&content)?;
        self.restore(snapshot);
        log::info!("Inhalte importiert aus: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryKeyValueStore;

    #[test]
    fn test_first_load_seeds_everything() {
        let kv = MemoryKeyValueStore::new();
        let (store, report) = ContentStore::load(&kv);
        assert!(report.needs_save());
        assert!(report
            .sources
            .iter()
            .all(|(_, source)| *source == LoadSource::Seeded));
        assert_eq!(store.reviews.len(), seed::reviews().len());
    }

    #[test]
    fn test_malformed_collection_is_recovered() {
        let mut kv = MemoryKeyValueStore::new();
        kv.set_string(Review::STORAGE_KEY, "{not json".into());
        let (store, report) = ContentStore::load(&kv);
        assert!(report
            .sources
            .contains(&(Review::STORAGE_KEY, LoadSource::Recovered)));
        assert_eq!(store.reviews.len(), seed::reviews().len());
    }

    #[test]
    fn test_subscribe_normalizes_and_rejects_duplicates() {
        let mut store = ContentStore::empty();
        let id = store.subscribe("  Hello@Studio.Design ", 10).expect("subscribe");
        assert_eq!(
            store.subscribers.get_by_id(id).map(|s| s.email.as_str()),
            Some("hello@studio.design")
        );
        assert!(matches!(
            store.subscribe("hello@studio.design", 11),
            Err(RepositoryError::Duplicate { .. })
        ));
        assert!(matches!(
            store.subscribe("not-an-email", 12),
            Err(RepositoryError::Invalid { .. })
        ));
        assert_eq!(store.subscribers.len(), 1);
    }
}
