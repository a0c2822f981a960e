//! Blog-Formular mit Gliederungs-Editor.

use crate::app::AppIntent;
use crate::core::outline::MAX_SECTION_LEVEL;
use crate::core::BlogPost;

const LEVEL_INDENT: f32 = 14.0;

pub(super) fn render_blog_form(
    ui: &mut egui::Ui,
    post: &mut BlogPost,
    selected: Option<usize>,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::Grid::new("blog_form").num_columns(2).show(ui, |ui| {
        for (label, value) in [
            ("Titel", &mut post.title),
            ("Slug", &mut post.slug),
            ("Autor", &mut post.author),
            ("Kategorie", &mut post.category),
            ("Datum", &mut post.published_on),
            ("Titelbild", &mut post.cover_image),
        ] {
            ui.label(label);
            ui.text_edit_singleline(value);
            ui.end_row();
        }
    });
    ui.label("Teaser");
    ui.text_edit_multiline(&mut post.excerpt);

    ui.separator();
    ui.horizontal(|ui| {
        ui.strong("Abschnitte");
        let level = selected
            .and_then(|i| post.sections.get(i))
            .map(|s| s.level)
            .unwrap_or(1);
        if ui.button("＋ Abschnitt").clicked() {
            events.push(AppIntent::SectionAddRequested {
                after: selected,
                level,
            });
        }
        if ui
            .add_enabled(
                selected.is_some() && level < MAX_SECTION_LEVEL,
                egui::Button::new("＋ Unterabschnitt"),
            )
            .clicked()
        {
            events.push(AppIntent::SectionAddRequested {
                after: selected,
                level: level + 1,
            });
        }
    });

    let count = post.sections.len();
    for (index, section) in post.sections.iter_mut().enumerate() {
        let is_selected = selected == Some(index);
        ui.horizontal(|ui| {
            ui.add_space(LEVEL_INDENT * f32::from(section.level.saturating_sub(1)));
            if ui
                .selectable_label(is_selected, format!("{:<6}", section.number))
                .clicked()
            {
                events.push(AppIntent::SectionSelected {
                    index: (!is_selected).then_some(index),
                });
            }
            ui.add(
                egui::TextEdit::singleline(&mut section.heading)
                    .hint_text("Überschrift")
                    .desired_width(160.0),
            );
            if ui
                .add_enabled(index > 0, egui::Button::new("↑").small())
                .clicked()
            {
                events.push(AppIntent::SectionMoveRequested { index, up: true });
            }
            if ui
                .add_enabled(index + 1 < count, egui::Button::new("↓").small())
                .clicked()
            {
                events.push(AppIntent::SectionMoveRequested { index, up: false });
            }
            if ui
                .add_enabled(section.level > 1, egui::Button::new("←").small())
                .clicked()
            {
                events.push(AppIntent::SectionIndentRequested { index, delta: -1 });
            }
            if ui
                .add_enabled(
                    section.level < MAX_SECTION_LEVEL,
                    egui::Button::new("→").small(),
                )
                .clicked()
            {
                events.push(AppIntent::SectionIndentRequested { index, delta: 1 });
            }
            if ui.small_button("✖").clicked() {
                events.push(AppIntent::SectionRemoveRequested { index });
            }
        });
        if is_selected {
            ui.add(
                egui::TextEdit::multiline(&mut section.body)
                    .hint_text("Text des Abschnitts")
                    .desired_rows(4),
            );
        }
    }

    events
}
