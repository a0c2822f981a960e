//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::ShowcaseOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Zeigt die Rückfrage zum Zurücksetzen der Inhalte.
pub fn show_reset_confirm(state: &mut AppState) {
    state.ui.show_reset_confirm = true;
}

/// Schließt die Rückfrage zum Zurücksetzen.
pub fn hide_reset_confirm(state: &mut AppState) {
    state.ui.show_reset_confirm = false;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Wendet geänderte Optionen an und speichert sie.
pub fn apply_options(state: &mut AppState, options: ShowcaseOptions) -> anyhow::Result<()> {
    use_cases::options::apply(state, options)
}

/// Setzt die Optionen auf Standardwerte zurück.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::options::reset(state)
}

/// Blendet die Statusmeldung aus.
pub fn clear_status(state: &mut AppState) {
    state.ui.status_message = None;
}
