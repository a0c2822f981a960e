//! Paginierte Eintragstabelle je Reiter.

use crate::app::{AdminTab, AppIntent, AppState};
use crate::core::{EntityId, Pagination};
use crate::ui::pagination::render_pagination;
use egui_extras::{Column, TableBuilder};

const ROW_HEIGHT: f32 = 22.0;

/// Eine Tabellenzeile: ID und Spaltentexte.
struct Row {
    id: EntityId,
    cells: Vec<String>,
}

fn headers(tab: AdminTab) -> &'static [&'static str] {
    match tab {
        AdminTab::Blogs => &["Titel", "Kategorie", "Datum", "Abschnitte"],
        AdminTab::Projects => &["Titel", "Kategorie", "Ort", "Jahr"],
        AdminTab::Team => &["Name", "Rolle"],
        AdminTab::Founders => &["Name", "Titel"],
        AdminTab::Reviews => &["Autor", "Firma", "Sterne"],
        AdminTab::Subscribers => &["E-Mail", "Angemeldet (Unix)"],
    }
}

fn rows(state: &AppState, tab: AdminTab) -> Vec<Row> {
    let content = &state.content;
    match tab {
        AdminTab::Blogs => content
            .blogs
            .iter()
            .map(|p| Row {
                id: p.id,
                cells: vec![
                    p.title.clone(),
                    p.category.clone(),
                    p.published_on.clone(),
                    p.sections.len().to_string(),
                ],
            })
            .collect(),
        AdminTab::Projects => content
            .projects
            .iter()
            .map(|p| Row {
                id: p.id,
                cells: vec![
                    p.title.clone(),
                    p.category.clone(),
                    p.location.clone(),
                    p.year.to_string(),
                ],
            })
            .collect(),
        AdminTab::Team => content
            .team
            .iter()
            .map(|m| Row {
                id: m.id,
                cells: vec![m.name.clone(), m.role.clone()],
            })
            .collect(),
        AdminTab::Founders => content
            .founders
            .iter()
            .map(|f| Row {
                id: f.id,
                cells: vec![f.name.clone(), f.title.clone()],
            })
            .collect(),
        AdminTab::Reviews => content
            .reviews
            .iter()
            .map(|r| Row {
                id: r.id,
                cells: vec![r.author.clone(), r.company.clone(), r.rating.to_string()],
            })
            .collect(),
        AdminTab::Subscribers => content
            .subscribers
            .iter()
            .map(|s| Row {
                id: s.id,
                cells: vec![s.email.clone(), s.subscribed_at.to_string()],
            })
            .collect(),
    }
}

/// Rendert die Tabelle des aktiven Reiters mit Bearbeiten/Löschen-Aktionen.
pub(super) fn render_record_table(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let tab = state.admin.tab;
    let all_rows = rows(state, tab);

    if all_rows.is_empty() {
        ui.label("Keine Einträge.");
        return events;
    }

    let pagination = Pagination::new(
        all_rows.len(),
        state.options.admin_page_size,
        state.admin.page,
    );
    let editing = state.admin.draft.as_ref().map(|d| d.id());
    let columns = headers(tab);
    let editable = tab != AdminTab::Subscribers;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::exact(40.0))
        .columns(Column::remainder().at_least(80.0), columns.len())
        .column(Column::auto())
        .header(ROW_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            for title in columns {
                header.col(|ui| {
                    ui.strong(*title);
                });
            }
            header.col(|ui| {
                ui.strong("Aktionen");
            });
        })
        .body(|mut body| {
            for row in pagination.slice(&all_rows) {
                body.row(ROW_HEIGHT, |mut table_row| {
                    table_row.set_selected(editing == Some(row.id));
                    table_row.col(|ui| {
                        ui.label(row.id.to_string());
                    });
                    for cell in &row.cells {
                        table_row.col(|ui| {
                            ui.add(egui::Label::new(cell).truncate());
                        });
                    }
                    table_row.col(|ui| {
                        if editable && ui.small_button("Bearbeiten").clicked() {
                            events.push(AppIntent::EditRecordRequested { id: row.id });
                        }
                        if ui.small_button("Löschen").clicked() {
                            events.push(AppIntent::DeleteRecordRequested { tab, id: row.id });
                        }
                    });
                });
            }
        });

    ui.add_space(6.0);
    if let Some(page) = render_pagination(ui, &pagination, state.options.pagination_max_buttons) {
        events.push(AppIntent::AdminPageRequested { page });
    }

    events
}
