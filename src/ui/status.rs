//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppIntent, AppState, SitePage, ViewMode};
use crate::core::Repository;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let content = &state.content;
            ui.label(format!(
                "Blogs: {} | Projekte: {} | Team: {} | Reviews: {} | Abonnenten: {}",
                content.blogs.len(),
                content.projects.len(),
                content.team.len() + content.founders.len(),
                content.reviews.len(),
                content.subscribers.len()
            ));

            ui.separator();

            match state.mode {
                ViewMode::Site => {
                    let page = match state.site.page {
                        SitePage::Home => "Start",
                        SitePage::Portfolio => "Portfolio",
                        SitePage::Project(_) => "Projekt",
                        SitePage::Blog => "Blog",
                        SitePage::BlogPost(_) => "Blogpost",
                        SitePage::Studio => "Studio",
                    };
                    ui.label(format!("Seite: {}", page));
                }
                ViewMode::Admin => {
                    ui.label(format!("Dashboard: {}", state.admin.tab.label()));
                }
            }

            // Fortschritt nur bei gemounteter Bogen-Sektion
            if let Some(arc) = state.site.arc.as_ref() {
                ui.separator();
                ui.label(format!("Bogen: {:.0}%", arc.progress() * 100.0));
            }

            if state.content_dirty {
                ui.separator();
                ui.label("● ungespeichert");
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
                if ui.small_button("✖").clicked() {
                    events.push(AppIntent::StatusDismissed);
                }
            }
        });
    });

    events
}
