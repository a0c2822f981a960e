//! Seitenknöpfe für paginierte Listen.

use crate::core::Pagination;

/// Rendert „‹ 1 2 3 ›“ und gibt die angeklickte Seite zurück.
pub(crate) fn render_pagination(
    ui: &mut egui::Ui,
    pagination: &Pagination,
    max_buttons: usize,
) -> Option<usize> {
    if pagination.page_count() <= 1 {
        return None;
    }

    let mut requested = None;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(pagination.has_previous(), egui::Button::new("‹"))
            .clicked()
        {
            requested = Some(pagination.page() - 1);
        }

        for page in pagination.window(max_buttons) {
            if ui
                .selectable_label(page == pagination.page(), page.to_string())
                .clicked()
            {
                requested = Some(page);
            }
        }

        if ui
            .add_enabled(pagination.has_next(), egui::Button::new("›"))
            .clicked()
        {
            requested = Some(pagination.page() + 1);
        }

        ui.label(format!(
            "Seite {} von {}",
            pagination.page(),
            pagination.page_count()
        ));
    });

    requested.filter(|&page| page != pagination.page())
}
