//! Portfolio-Raster und Projekt-Detailseite.

use super::before_after::render_before_after;
use crate::app::{AppIntent, AppState, SitePage};
use crate::core::{EntityId, Pagination, Project, Repository};
use crate::ui::pagination::render_pagination;

const CARD_WIDTH: f32 = 240.0;

pub(super) fn render_portfolio(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.heading("Portfolio");
    ui.add_space(8.0);

    let projects = state.content.projects.get_all();
    let pagination = Pagination::new(
        projects.len(),
        state.options.portfolio_page_size,
        state.site.portfolio_page,
    );

    if projects.is_empty() {
        ui.label("Noch keine Projekte veröffentlicht.");
        return events;
    }

    ui.horizontal_wrapped(|ui| {
        for project in pagination.slice(&projects) {
            if project_card(ui, project).clicked() {
                events.push(AppIntent::NavigateRequested {
                    page: SitePage::Project(project.id),
                });
            }
        }
    });

    ui.add_space(8.0);
    if let Some(page) = render_pagination(ui, &pagination, state.options.pagination_max_buttons) {
        events.push(AppIntent::PortfolioPageRequested { page });
    }

    events
}

fn project_card(ui: &mut egui::Ui, project: &Project) -> egui::Response {
    egui::Frame::group(ui.style())
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.strong(&project.title);
            ui.label(format!(
                "{} · {} · {}",
                project.category, project.location, project.year
            ));
            ui.small(&project.summary);
            if project.has_comparison() {
                ui.small("Vorher/Nachher verfügbar");
            }
        })
        .response
        .interact(egui::Sense::click())
}

pub(super) fn render_project(ui: &mut egui::Ui, state: &AppState, id: EntityId) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui.link("‹ Zurück zum Portfolio").clicked() {
        events.push(AppIntent::NavigateRequested {
            page: SitePage::Portfolio,
        });
    }

    let Some(project) = state.content.projects.get_by_id(id) else {
        ui.label("Projekt nicht gefunden.");
        return events;
    };

    ui.heading(&project.title);
    ui.label(format!(
        "{} · {} · {}",
        project.category, project.location, project.year
    ));
    ui.add_space(8.0);
    ui.label(&project.summary);
    ui.add_space(12.0);

    if project.has_comparison() {
        events.extend(render_before_after(ui, &state.site.slider, project));
    } else {
        ui.weak(format!("Titelbild: {}", project.cover_image));
    }

    events
}
