//! Opaker Key-Value-Speicher (Pendant zum Local Storage des Browsers).

use std::collections::BTreeMap;
use thiserror::Error;

/// Fehler beim Lesen/Schreiben persistierter Inhalte.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Datei-I/O fehlgeschlagen: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON ungültig: {0}")]
    Json(#[from] serde_json::Error),
}

/// Minimaler String-Speicher. Keine Transaktionen, keine Garantien.
pub trait KeyValueStore {
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&mut self, key: &str, value: String);
}

/// Flüchtiger Speicher für Tests und Sessions ohne Host-Persistenz.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: BTreeMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}
