//! Admin-Dashboard: Reiter, Tabellen und Bearbeitungsformulare.

mod blog_editor;
mod forms;
mod table;

use crate::app::{AdminTab, AppIntent, AppState};

/// Breite des Bearbeitungs-Panels.
const EDITOR_PANEL_WIDTH: f32 = 420.0;

/// Rendert das Dashboard und gibt erzeugte Events zurück.
pub fn render_admin(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("admin_tabs").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for tab in AdminTab::ALL {
                if ui
                    .selectable_label(state.admin.tab == tab, tab.label())
                    .clicked()
                {
                    events.push(AppIntent::AdminTabSelected { tab });
                }
            }
        });
    });

    if state.admin.draft.is_some() {
        egui::SidePanel::right("admin_editor")
            .resizable(true)
            .default_width(EDITOR_PANEL_WIDTH)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    events.extend(forms::render_draft_form(ui, state));
                });
            });
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(state.admin.tab.label());
            if state.admin.tab == AdminTab::Subscribers {
                ui.separator();
                let input = ui.add(
                    egui::TextEdit::singleline(&mut state.admin.subscriber_email)
                        .hint_text("E-Mail hinzufügen")
                        .desired_width(220.0),
                );
                let submitted =
                    input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if (ui.button("Hinzufügen").clicked() || submitted)
                    && !state.admin.subscriber_email.trim().is_empty()
                {
                    events.push(AppIntent::SubscriberAddRequested {
                        email: state.admin.subscriber_email.clone(),
                    });
                }
            } else if ui.button("＋ Neu").clicked() {
                events.push(AppIntent::NewRecordRequested);
            }
        });
        ui.separator();
        events.extend(table::render_record_table(ui, state));
    });

    events
}
