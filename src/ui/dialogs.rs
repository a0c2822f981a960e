//! Datei-Dialoge und modale Fenster.

use crate::app::{AppIntent, UiState};

const BACKUP_FILE_NAME: &str = "studio_content.json";

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Export-Dialog
    if ui_state.show_export_dialog {
        ui_state.show_export_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Studio-Backup", &["json"])
            .set_file_name(BACKUP_FILE_NAME)
            .save_file()
        {
            events.push(AppIntent::ExportPathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Import-Dialog
    if ui_state.show_import_dialog {
        ui_state.show_import_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Studio-Backup", &["json"])
            .pick_file()
        {
            events.push(AppIntent::ImportPathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}

/// Zeigt die Rückfrage vor dem Zurücksetzen aller Inhalte.
pub fn show_reset_confirm(ctx: &egui::Context, show: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !show {
        return events;
    }

    egui::Window::new("Beispieldaten wiederherstellen")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label("Alle Blogs, Projekte, Team-Einträge, Reviews und Abonnenten");
                ui.label("werden durch die Beispieldaten ersetzt.");
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button("Zurücksetzen").clicked() {
                        events.push(AppIntent::ResetContentConfirmed);
                    }

                    if ui.button("Abbrechen").clicked() {
                        events.push(AppIntent::ResetContentCancelled);
                    }
                });
            });
        });

    events
}
