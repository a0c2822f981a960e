//! Öffentliche Website: Navigation und Seiten.

mod arc_section;
mod before_after;
mod blog;
mod newsletter;
mod portfolio;
mod studio;

use crate::app::{AppIntent, AppState, SitePage};

const VIEWPORT_EPSILON: f32 = 0.5;

/// Rendert Navigation und aktuelle Seite der Website.
pub fn render_site(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("site_nav").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Studio");
            ui.separator();
            for (page, label) in [
                (SitePage::Home, "Start"),
                (SitePage::Portfolio, "Portfolio"),
                (SitePage::Blog, "Blog"),
                (SitePage::Studio, "Studio"),
            ] {
                if ui
                    .selectable_label(is_section_of(state.site.page, page), label)
                    .clicked()
                    && state.site.page != page
                {
                    events.push(AppIntent::NavigateRequested { page });
                }
            }
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        let page = state.site.page;
        egui::ScrollArea::vertical()
            .id_salt(page_scroll_id(page))
            .auto_shrink([false, false])
            .show(ui, |ui| {
                // Sichtbarer Ausschnitt = Viewport der Seite
                let visible = ui.clip_rect();
                let size = [visible.width(), visible.height()];
                let known = state.site.viewport_size;
                if (size[0] - known[0]).abs() > VIEWPORT_EPSILON
                    || (size[1] - known[1]).abs() > VIEWPORT_EPSILON
                {
                    events.push(AppIntent::ViewportResized { size });
                }

                match page {
                    SitePage::Home => events.extend(render_home(ui, state)),
                    SitePage::Portfolio => events.extend(portfolio::render_portfolio(ui, state)),
                    SitePage::Project(id) => events.extend(portfolio::render_project(ui, state, id)),
                    SitePage::Blog => events.extend(blog::render_blog_list(ui, state)),
                    SitePage::BlogPost(id) => events.extend(blog::render_blog_post(ui, state, id)),
                    SitePage::Studio => studio::render_studio(ui, state),
                }

                ui.add_space(24.0);
                ui.separator();
                events.extend(newsletter::render_newsletter(
                    ui,
                    &mut state.site.newsletter_email,
                ));
            });
    });

    events
}

fn render_home(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.add_space(16.0);
    ui.heading("Architektur, die zuhört.");
    ui.label("Scrollen Sie durch die Stimmen unserer Kundinnen und Kunden.");
    ui.add_space(16.0);

    events.extend(arc_section::render_arc_section(ui, state));

    ui.add_space(24.0);
    if let Some(project) = state.content.projects.iter().find(|p| p.has_comparison()) {
        ui.heading(format!("Vorher / Nachher: {}", project.title));
        events.extend(before_after::render_before_after(ui, &state.site.slider, project));
    }

    events
}

/// Detailseiten markieren ihren Listen-Reiter in der Navigation.
fn is_section_of(current: SitePage, entry: SitePage) -> bool {
    match current {
        SitePage::Project(_) => entry == SitePage::Portfolio,
        SitePage::BlogPost(_) => entry == SitePage::Blog,
        other => other == entry,
    }
}

/// Eigener Scroll-Zustand je Seite (Seitenwechsel beginnt oben).
fn page_scroll_id(page: SitePage) -> String {
    format!("site_scroll_{:?}", page)
}
