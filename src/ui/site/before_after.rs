//! Vorher/Nachher-Vergleich mit ziehbarer Trennlinie.

use crate::app::AppIntent;
use crate::core::Project;
use studio_arc_engine::slider::percent_from_pointer;
use studio_arc_engine::SliderState;

const COMPARISON_HEIGHT: f32 = 260.0;
const HANDLE_RADIUS: f32 = 10.0;

/// Rendert den Slider und meldet Zeigerbewegungen als `SliderDragged`.
pub(super) fn render_before_after(
    ui: &mut egui::Ui,
    slider: &SliderState,
    project: &Project,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), COMPARISON_HEIGHT),
        egui::Sense::click_and_drag(),
    );

    if response.dragged() || response.clicked() {
        if let Some(pointer) = response.interact_pointer_pos() {
            events.push(AppIntent::SliderDragged {
                percent: percent_from_pointer(pointer.x, rect.left(), rect.width()),
            });
        }
    }

    let painter = ui.painter_at(rect);
    let divider_x = rect.left() + slider.clip_width(rect.width());
    let after_rect = egui::Rect::from_min_max(rect.min, egui::pos2(divider_x, rect.bottom()));

    painter.rect_filled(rect, 4.0, egui::Color32::from_rgb(92, 84, 76));
    painter.rect_filled(after_rect, 4.0, egui::Color32::from_rgb(206, 196, 178));

    let label_font = egui::FontId::proportional(14.0);
    painter.text(
        rect.right_top() + egui::vec2(-10.0, 10.0),
        egui::Align2::RIGHT_TOP,
        format!("Vorher\n{}", project.before_image.as_deref().unwrap_or("-")),
        label_font.clone(),
        egui::Color32::WHITE,
    );
    painter.text(
        rect.left_top() + egui::vec2(10.0, 10.0),
        egui::Align2::LEFT_TOP,
        format!("Nachher\n{}", project.after_image.as_deref().unwrap_or("-")),
        label_font,
        egui::Color32::BLACK,
    );

    painter.line_segment(
        [
            egui::pos2(divider_x, rect.top()),
            egui::pos2(divider_x, rect.bottom()),
        ],
        egui::Stroke::new(2.0, egui::Color32::WHITE),
    );
    painter.circle(
        egui::pos2(divider_x, rect.center().y),
        HANDLE_RADIUS,
        egui::Color32::WHITE,
        egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
    );

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
    }

    events
}
