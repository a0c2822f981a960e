//! Handler für Datei-Operationen (Export, Import, Zurücksetzen).

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Export-Dialog.
pub fn request_export(state: &mut AppState) {
    use_cases::file_io::request_export(state);
}

/// Öffnet den Import-Dialog.
pub fn request_import(state: &mut AppState) {
    use_cases::file_io::request_import(state);
}

/// Exportiert alle Inhalte in den übergebenen Pfad.
pub fn export(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::export(state, path)
}

/// Importiert alle Inhalte aus dem übergebenen Pfad.
pub fn import(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::import(state, path)
}

/// Setzt die Inhalte auf Beispieldaten zurück.
pub fn reset_content(state: &mut AppState) {
    use_cases::file_io::reset_content(state);
}
