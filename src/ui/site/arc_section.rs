//! Bogen-Sektion der Startseite: misst den Container und zeichnet den Frame.

use crate::app::{AppIntent, AppState};
use crate::shared::ARC_PATH_SEGMENTS;
use studio_arc_engine::{ArcFrame, ContainerMeasurement};

const PATH_STROKE: f32 = 2.0;
const MARKER_LENGTH: f32 = 28.0;
const MARKER_WIDTH: f32 = 16.0;

/// Rendert den Scroll-Container der Bogen-Sektion.
///
/// Meldet jede Frame-Messung als `ArcContainerMeasured`; die Darstellung
/// folgt dem zuletzt vom Controller berechneten Fortschritt.
pub(super) fn render_arc_section(ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let visible = ui.clip_rect();
    let viewport_height = visible.height();
    let item_count = state.arc_item_count();
    let height = state
        .options
        .arc_container_height(viewport_height, item_count);

    let (container, _response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), height),
        egui::Sense::hover(),
    );

    events.push(AppIntent::ArcContainerMeasured {
        measurement: Some(ContainerMeasurement::new(
            container.top() - visible.top(),
            container.height(),
        )),
    });

    if item_count == 0 {
        ui.painter().text(
            container.center_top() + egui::vec2(0.0, 40.0),
            egui::Align2::CENTER_CENTER,
            "Noch keine Reviews vorhanden",
            egui::FontId::proportional(18.0),
            ui.visuals().weak_text_color(),
        );
        return events;
    }

    let Some(engine) = state.site.arc.as_ref() else {
        return events;
    };
    let Some(frame) = engine.frame() else {
        return events;
    };

    // Sticky-Bereich: bleibt am oberen Viewport-Rand, solange der Container sichtbar ist
    let sticky_top = visible
        .top()
        .clamp(container.top(), (container.bottom() - viewport_height).max(container.top()));
    let pane = egui::Rect::from_min_size(
        egui::pos2(container.left(), sticky_top),
        egui::vec2(container.width(), viewport_height),
    );

    let painter = ui.painter_at(pane.intersect(container));
    paint_path(&painter, pane, engine.control_points().sample(ARC_PATH_SEGMENTS));
    paint_marker(&painter, pane, &frame);
    paint_review(&painter, pane, state, &frame);

    events
}

fn to_screen(pane: egui::Rect, point: glam::Vec2) -> egui::Pos2 {
    pane.min + egui::vec2(point.x, point.y)
}

fn paint_path(painter: &egui::Painter, pane: egui::Rect, samples: Vec<glam::Vec2>) {
    let points: Vec<egui::Pos2> = samples.into_iter().map(|p| to_screen(pane, p)).collect();
    painter.add(egui::Shape::line(
        points,
        egui::Stroke::new(PATH_STROKE, egui::Color32::from_gray(110)),
    ));
}

fn paint_marker(painter: &egui::Painter, pane: egui::Rect, frame: &ArcFrame) {
    let center = to_screen(pane, frame.marker.position);
    let rot = egui::emath::Rot2::from_angle(frame.marker.rotation_degrees.to_radians());
    let half_len = MARKER_LENGTH * 0.5;
    let half_width = MARKER_WIDTH * 0.5;

    // Pfeilspitze zeigt in Bewegungsrichtung
    let outline = [
        egui::vec2(half_len, 0.0),
        egui::vec2(-half_len, -half_width),
        egui::vec2(-half_len * 0.4, 0.0),
        egui::vec2(-half_len, half_width),
    ];
    let points: Vec<egui::Pos2> = outline.iter().map(|v| center + rot * *v).collect();

    let color = egui::Color32::from_rgb(214, 158, 46).gamma_multiply(frame.marker.opacity);
    painter.add(egui::Shape::convex_polygon(points, color, egui::Stroke::NONE));
}

fn paint_review(painter: &egui::Painter, pane: egui::Rect, state: &AppState, frame: &ArcFrame) {
    let Some(review) = state.content.reviews.iter().nth(frame.active.index) else {
        return;
    };

    let text_color = painter
        .ctx()
        .style()
        .visuals
        .text_color()
        .gamma_multiply(frame.text.opacity);
    let size = state.options.arc_text_size * frame.text.scale;
    let anchor = pane.center() - egui::vec2(0.0, pane.height() * 0.1);

    let galley = painter.layout(
        format!("„{}“", review.text),
        egui::FontId::proportional(size),
        text_color,
        (pane.width() * 0.6).max(200.0),
    );
    let text_pos = anchor - galley.size() * 0.5;
    let text_bottom = text_pos.y + galley.size().y;
    painter.galley(text_pos, galley, text_color);

    let stars = "★".repeat(usize::from(review.rating));
    painter.text(
        egui::pos2(anchor.x, text_bottom + 12.0),
        egui::Align2::CENTER_TOP,
        format!("{}  {} · {}", stars, review.author, review.company),
        egui::FontId::proportional(14.0),
        text_color,
    );

    painter.text(
        pane.right_top() + egui::vec2(-12.0, 12.0),
        egui::Align2::RIGHT_TOP,
        format!("{} / {}", frame.active.index + 1, state.arc_item_count()),
        egui::FontId::monospace(12.0),
        painter.ctx().style().visuals.weak_text_color(),
    );
}
