//! Use-Case-Funktionen für den Lebenszyklus der Bogen-Sektion.

use crate::app::state::{SitePage, ViewMode};
use crate::app::AppState;
use glam::Vec2;
use studio_arc_engine::{ArcEngine, ContainerMeasurement};

/// Mountet die Bogen-Sektion, falls die Startseite sichtbar ist.
///
/// Bereits gemountete Sektionen bleiben unverändert (Fortschritt bleibt erhalten).
/// Beim erneuten Mounten wird die letzte Container-Messung sofort übernommen,
/// damit der erste Frame nicht bei Element 0 beginnt.
pub fn mount(state: &mut AppState) {
    if state.mode != ViewMode::Site || state.site.page != SitePage::Home {
        return;
    }
    if state.site.arc.as_ref().is_some_and(|arc| arc.is_mounted()) {
        return;
    }
    let engine = ArcEngine::mount(
        Vec2::from(state.site.viewport_size),
        state.arc_item_count(),
        state.options.arc_layout.clone(),
        state.site.last_arc_measurement,
    );
    log::info!(
        "Bogen-Sektion gemountet ({} Testimonials, Fortschritt {:.2})",
        state.arc_item_count(),
        engine.progress()
    );
    state.site.arc = Some(engine);
}

/// Löst die Bogen-Sektion.
pub fn unmount(state: &mut AppState) {
    if let Some(mut engine) = state.site.arc.take() {
        engine.unmount();
        log::info!("Bogen-Sektion gelöst");
    }
}

/// Aktualisiert die Viewport-Größe. Der Scroll-Fortschritt bleibt unberührt.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.site.viewport_size = size;
    if let Some(engine) = state.site.arc.as_mut() {
        engine.resize(Vec2::from(size));
    }
}

/// Verarbeitet eine Container-Messung (No-op ohne gemountete Sektion).
pub fn update_scroll(state: &mut AppState, measurement: Option<ContainerMeasurement>) {
    if measurement.is_some() {
        state.site.last_arc_measurement = measurement;
    }
    if let Some(engine) = state.site.arc.as_mut() {
        engine.scroll(measurement);
    }
}

/// Gleicht die Elementanzahl an die aktuelle Anzahl der Reviews an.
pub fn sync_item_count(state: &mut AppState) {
    let count = state.arc_item_count();
    if let Some(engine) = state.site.arc.as_mut() {
        engine.set_item_count(count);
    }
}

/// Übernimmt eine geänderte Bogengeometrie aus den Optionen.
pub fn apply_layout(state: &mut AppState) {
    let config = state.options.arc_layout.clone();
    if let Some(engine) = state.site.arc.as_mut() {
        engine.set_config(config);
    }
}
