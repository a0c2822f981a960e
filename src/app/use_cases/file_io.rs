//! Use-Case-Funktionen für Export, Import und Zurücksetzen der Inhalte.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use std::path::Path;

/// Öffnet den Export-Dialog über UI-State.
pub fn request_export(state: &mut AppState) {
    state.ui.show_export_dialog = true;
}

/// Öffnet den Import-Dialog über UI-State.
pub fn request_import(state: &mut AppState) {
    state.ui.show_import_dialog = true;
}

/// Schreibt alle Inhalte als JSON-Backup.
pub fn export(state: &mut AppState, path: String) -> anyhow::Result<()> {
    state.content.export_to_file(Path::new(&path))?;
    state.ui.status_message = Some(format!("Inhalte exportiert: {}", path));
    Ok(())
}

/// Ersetzt alle Inhalte durch ein JSON-Backup.
///
/// Bei Lese- oder Formatfehlern bleibt der bisherige Stand erhalten.
pub fn import(state: &mut AppState, path: String) -> anyhow::Result<()> {
    state.content.import_from_file(Path::new(&path))?;
    state.site.portfolio_page = 1;
    state.site.blog_page = 1;
    state.admin.page = 1;
    state.ui.status_message = Some(format!("Inhalte importiert: {}", path));
    state.mark_content_dirty();
    Ok(())
}

/// Setzt alle Inhalte auf die Beispieldaten zurück.
pub fn reset_content(state: &mut AppState) {
    state.content.reset_to_seed();
    state.site.portfolio_page = 1;
    state.site.blog_page = 1;
    state.admin.page = 1;
    state.ui.status_message = Some("Inhalte auf Beispieldaten zurückgesetzt".to_string());
    state.mark_content_dirty();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ContentStore, Repository};

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("studio_showcase_{}_{}.json", name, std::process::id()))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn export_then_import_restores_content() {
        let path = temp_path("roundtrip");
        let mut source = AppState::with_content(ContentStore::seeded());
        source
            .content
            .reviews
            .delete(1)
            .expect("Review 1 existiert");
        export(&mut source, path.clone()).expect("Export möglich");

        let mut target = AppState::with_content(ContentStore::seeded());
        import(&mut target, path.clone()).expect("Import möglich");

        assert_eq!(target.content.reviews.len(), 4);
        assert!(target.content_dirty);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn failed_import_keeps_content() {
        let path = temp_path("broken");
        std::fs::write(&path, "{ kein json").expect("Temp-Datei schreibbar");
        let mut state = AppState::with_content(ContentStore::seeded());

        assert!(import(&mut state, path.clone()).is_err());
        assert_eq!(state.content.blogs.len(), 7);
        assert!(!state.content_dirty);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn reset_restores_seed() {
        let mut state = AppState::with_content(ContentStore::empty());
        reset_content(&mut state);
        assert_eq!(state.content.reviews.len(), 5);
        assert!(state.content_dirty);
    }
}
