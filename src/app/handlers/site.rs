//! Handler für Website-Navigation, Bogen-Sektion und Slider.

use crate::app::state::{SitePage, ViewMode};
use crate::app::use_cases;
use crate::app::AppState;
use studio_arc_engine::ContainerMeasurement;

/// Wechselt zwischen Website und Dashboard.
pub fn set_view_mode(state: &mut AppState, mode: ViewMode) {
    use_cases::navigation::set_view_mode(state, mode);
}

/// Öffnet eine Website-Seite.
pub fn navigate(state: &mut AppState, page: SitePage) {
    use_cases::navigation::navigate(state, page);
}

/// Blättert im Portfolio.
pub fn set_portfolio_page(state: &mut AppState, page: usize) {
    use_cases::navigation::set_portfolio_page(state, page);
}

/// Blättert im Blog.
pub fn set_blog_page(state: &mut AppState, page: usize) {
    use_cases::navigation::set_blog_page(state, page);
}

/// Mountet die Bogen-Sektion.
pub fn mount_arc(state: &mut AppState) {
    use_cases::arc_section::mount(state);
}

/// Löst die Bogen-Sektion.
pub fn unmount_arc(state: &mut AppState) {
    use_cases::arc_section::unmount(state);
}

/// Übernimmt eine neue Viewport-Größe.
pub fn resize_viewport(state: &mut AppState, size: [f32; 2]) {
    use_cases::arc_section::resize(state, size);
}

/// Verarbeitet eine Container-Messung der Bogen-Sektion.
pub fn update_arc_scroll(state: &mut AppState, measurement: Option<ContainerMeasurement>) {
    use_cases::arc_section::update_scroll(state, measurement);
}

/// Gleicht die Elementanzahl der Bogen-Sektion an.
pub fn sync_arc_item_count(state: &mut AppState) {
    use_cases::arc_section::sync_item_count(state);
}

/// Setzt die Trennlinie des Vorher/Nachher-Sliders.
pub fn set_slider_percent(state: &mut AppState, percent: f32) {
    use_cases::navigation::set_slider_percent(state, percent);
}

/// Leert das Newsletter-Eingabefeld.
pub fn clear_newsletter_input(state: &mut AppState) {
    state.site.newsletter_email.clear();
}
