//! Optionen-Dialog für Seitengrößen und Bogengeometrie.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(480.0)
                .show(ui, |ui| {
                    // ── Listen ──────────────────────────────────────
                    ui.collapsing("Listen", |ui| {
                        changed |= usize_edit(ui, "Projekte je Seite:", &mut opts.portfolio_page_size, 1..=48);
                        changed |= usize_edit(ui, "Posts je Seite:", &mut opts.blog_page_size, 1..=48);
                        changed |= usize_edit(ui, "Tabellenzeilen:", &mut opts.admin_page_size, 1..=100);
                        changed |= usize_edit(ui, "Seitenknöpfe:", &mut opts.pagination_max_buttons, 1..=15);
                    });

                    // ── Bogen-Sektion ───────────────────────────────
                    ui.collapsing("Bogen-Sektion", |ui| {
                        changed |= f32_edit(ui, "Scroll je Review (× Höhe):", &mut opts.arc_scroll_per_item, 0.1..=3.0, 0.05);
                        changed |= f32_edit(ui, "Textgröße (px):", &mut opts.arc_text_size, 10.0..=48.0, 0.5);
                    });

                    // ── Bogengeometrie ──────────────────────────────
                    ui.collapsing("Bogengeometrie", |ui| {
                        let layout = &mut opts.arc_layout;
                        changed |= f32_edit(ui, "Mobile bis (px):", &mut layout.mobile_max_width, 200.0..=1200.0, 1.0);
                        changed |= f32_edit(ui, "Tablet bis (px):", &mut layout.tablet_max_width, 400.0..=2000.0, 1.0);
                        changed |= f32_edit(ui, "Abstand Mobile (px):", &mut layout.mobile_offset, 0.0..=600.0, 1.0);
                        changed |= f32_edit(ui, "Abstand Tablet (px):", &mut layout.tablet_offset, 0.0..=600.0, 1.0);
                        changed |= f32_edit(ui, "Abstand Desktop (px):", &mut layout.desktop_offset, 0.0..=600.0, 1.0);
                        changed |= f32_edit(ui, "Scheitelhöhe (Anteil):", &mut layout.apex_ratio, 0.0..=1.0, 0.01);
                    });

                    ui.separator();

                    ui.horizontal(|ui| {
                        if ui.button("Standardwerte").clicked() {
                            events.push(AppIntent::ResetOptionsRequested);
                        }
                        if ui.button("Schließen").clicked() {
                            events.push(AppIntent::CloseOptionsDialogRequested);
                        }
                    });
                });
        });

    if changed {
        events.push(AppIntent::OptionsChanged {
            options: Box::new(opts),
        });
    }

    events
}

fn usize_edit(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut usize,
    range: std::ops::RangeInclusive<usize>,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range)).changed()
    })
    .inner
}

fn f32_edit(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}
