//! Blog-Liste und Blogpost mit nummerierten Abschnitten.

use crate::app::{AppIntent, AppState, SitePage};
use crate::core::{BlogPost, EntityId, Pagination, Repository};
use crate::ui::pagination::render_pagination;

const SECTION_INDENT: f32 = 18.0;

pub(super) fn render_blog_list(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.heading("Blog");
    ui.add_space(8.0);

    let posts = state.content.blogs.get_all();
    let pagination = Pagination::new(
        posts.len(),
        state.options.blog_page_size,
        state.site.blog_page,
    );

    if posts.is_empty() {
        ui.label("Noch keine Beiträge.");
        return events;
    }

    for post in pagination.slice(&posts) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            if ui.link(egui::RichText::new(&post.title).heading()).clicked() {
                events.push(AppIntent::NavigateRequested {
                    page: SitePage::BlogPost(post.id),
                });
            }
            ui.weak(format!(
                "{} · {} · {}",
                post.published_on, post.category, post.author
            ));
            ui.label(&post.excerpt);
        });
        ui.add_space(6.0);
    }

    if let Some(page) = render_pagination(ui, &pagination, state.options.pagination_max_buttons) {
        events.push(AppIntent::BlogPageRequested { page });
    }

    events
}

pub(super) fn render_blog_post(ui: &mut egui::Ui, state: &AppState, id: EntityId) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui.link("‹ Zurück zum Blog").clicked() {
        events.push(AppIntent::NavigateRequested {
            page: SitePage::Blog,
        });
    }

    match state.content.blogs.get_by_id(id) {
        Some(post) => render_post_body(ui, post),
        None => {
            ui.label("Beitrag nicht gefunden.");
        }
    }

    events
}

fn render_post_body(ui: &mut egui::Ui, post: &BlogPost) {
    ui.heading(&post.title);
    ui.weak(format!(
        "{} · {} · {}",
        post.published_on, post.category, post.author
    ));
    ui.add_space(8.0);
    ui.label(egui::RichText::new(&post.excerpt).italics());
    ui.add_space(12.0);

    // Inhaltsverzeichnis
    ui.collapsing("Inhalt", |ui| {
        for section in &post.sections {
            ui.horizontal(|ui| {
                ui.add_space(SECTION_INDENT * f32::from(section.level.saturating_sub(1)));
                ui.label(format!("{} {}", section.number, section.heading));
            });
        }
    });
    ui.add_space(8.0);

    for section in &post.sections {
        let size = match section.level {
            1 => 20.0,
            2 => 17.0,
            _ => 15.0,
        };
        ui.label(
            egui::RichText::new(format!("{} {}", section.number, section.heading))
                .size(size)
                .strong(),
        );
        ui.label(&section.body);
        ui.add_space(10.0);
    }
}
