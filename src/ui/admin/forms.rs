//! Bearbeitungsformulare für Entwürfe.

use super::blog_editor::render_blog_form;
use crate::app::{AppIntent, AppState, Draft};
use crate::core::Review;

/// Rendert das Formular des offenen Entwurfs.
///
/// Textfelder bearbeiten den Entwurf direkt; Speichern und Abbrechen
/// laufen als Intents über den Controller.
pub(super) fn render_draft_form(ui: &mut egui::Ui, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let selected_section = state.admin.selected_section;

    let Some(draft) = state.admin.draft.as_mut() else {
        return events;
    };

    let title = if draft.is_new() {
        format!("{} anlegen", draft.tab().label())
    } else {
        format!("{} #{} bearbeiten", draft.tab().label(), draft.id())
    };
    ui.heading(title);
    ui.separator();

    match draft {
        Draft::Blog(post) => events.extend(render_blog_form(ui, post, selected_section)),
        Draft::Project(project) => {
            egui::Grid::new("project_form").num_columns(2).show(ui, |ui| {
                text_row(ui, "Titel", &mut project.title);
                text_row(ui, "Slug", &mut project.slug);
                text_row(ui, "Kategorie", &mut project.category);
                text_row(ui, "Ort", &mut project.location);
                ui.label("Jahr");
                ui.add(egui::DragValue::new(&mut project.year).range(1900..=2100));
                ui.end_row();
                text_row(ui, "Titelbild", &mut project.cover_image);
                optional_row(ui, "Vorher-Bild", &mut project.before_image);
                optional_row(ui, "Nachher-Bild", &mut project.after_image);
            });
            ui.label("Kurzbeschreibung");
            ui.text_edit_multiline(&mut project.summary);
        }
        Draft::Team(member) => {
            egui::Grid::new("team_form").num_columns(2).show(ui, |ui| {
                text_row(ui, "Name", &mut member.name);
                text_row(ui, "Rolle", &mut member.role);
                text_row(ui, "Foto", &mut member.photo);
            });
            ui.label("Bio");
            ui.text_edit_multiline(&mut member.bio);
        }
        Draft::Founder(founder) => {
            egui::Grid::new("founder_form").num_columns(2).show(ui, |ui| {
                text_row(ui, "Name", &mut founder.name);
                text_row(ui, "Titel", &mut founder.title);
                text_row(ui, "Foto", &mut founder.photo);
            });
            ui.label("Zitat");
            ui.text_edit_multiline(&mut founder.quote);
        }
        Draft::Review(review) => {
            egui::Grid::new("review_form").num_columns(2).show(ui, |ui| {
                text_row(ui, "Autor", &mut review.author);
                text_row(ui, "Firma", &mut review.company);
                ui.label("Sterne");
                ui.add(egui::Slider::new(&mut review.rating, 1..=Review::MAX_RATING));
                ui.end_row();
            });
            ui.label("Text");
            ui.text_edit_multiline(&mut review.text);
        }
    }

    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Speichern").clicked() {
            events.push(AppIntent::DraftSaveRequested);
        }
        if ui.button("Abbrechen").clicked() {
            events.push(AppIntent::DraftCancelled);
        }
    });

    events
}

fn text_row(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.text_edit_singleline(value);
    ui.end_row();
}

/// Leeres Feld = kein Bild.
fn optional_row(ui: &mut egui::Ui, label: &str, value: &mut Option<String>) {
    let mut text = value.clone().unwrap_or_default();
    ui.label(label);
    if ui.text_edit_singleline(&mut text).changed() {
        *value = (!text.trim().is_empty()).then_some(text);
    }
    ui.end_row();
}
