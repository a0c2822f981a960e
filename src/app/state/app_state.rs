use crate::app::CommandLog;
use crate::core::{ContentStore, Repository};
use crate::shared::ShowcaseOptions;

use super::{AdminState, SiteState, UiState};

/// Oberste Ansicht: öffentliche Website oder Admin-Dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Site,
    Admin,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle Inhalte (Blogs, Projekte, Team, Gründer, Reviews, Abonnenten)
    pub content: ContentStore,
    /// Aktive Ansicht
    pub mode: ViewMode,
    /// Website-State
    pub site: SiteState,
    /// Dashboard-State
    pub admin: AdminState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Seitengrößen, Bogengeometrie)
    pub options: ShowcaseOptions,
    /// Inhalte wurden geändert und müssen persistiert werden
    pub content_dirty: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit leerem Content-Store
    pub fn new() -> Self {
        Self::with_content(ContentStore::empty())
    }

    /// Erstellt einen App-State mit bereits geladenen Inhalten
    pub fn with_content(content: ContentStore) -> Self {
        Self {
            content,
            mode: ViewMode::Site,
            site: SiteState::new(),
            admin: AdminState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: ShowcaseOptions::default(),
            content_dirty: false,
            should_exit: false,
        }
    }

    /// Anzahl der Elemente der Bogen-Sektion (eine je Review)
    pub fn arc_item_count(&self) -> usize {
        self.content.reviews.len()
    }

    /// Markiert die Inhalte als geändert
    pub fn mark_content_dirty(&mut self) {
        self.content_dirty = true;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
