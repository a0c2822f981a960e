//! Top-Menü (Datei, Ansicht, Bearbeiten).

use crate::app::{AppIntent, AppState, ViewMode};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Inhalte exportieren...").clicked() {
                    events.push(AppIntent::ExportRequested);
                    ui.close();
                }

                if ui.button("Inhalte importieren...").clicked() {
                    events.push(AppIntent::ImportRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beispieldaten wiederherstellen...").clicked() {
                    events.push(AppIntent::ResetContentRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Bearbeiten", |ui| {
                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.separator();

            // Ansicht direkt umschaltbar
            for (mode, label) in [(ViewMode::Site, "Website"), (ViewMode::Admin, "Dashboard")] {
                if ui.selectable_label(state.mode == mode, label).clicked() && state.mode != mode {
                    events.push(AppIntent::ViewModeSelected { mode });
                }
            }
        });
    });

    events
}
