//! Use-Case-Funktionen für Ansicht, Seiten und Listen-Paginierung.

use crate::app::state::{SitePage, ViewMode};
use crate::app::AppState;
use crate::core::{Pagination, Repository};

/// Setzt die aktive Ansicht.
pub fn set_view_mode(state: &mut AppState, mode: ViewMode) {
    state.mode = mode;
}

/// Öffnet eine Website-Seite.
///
/// Detailseiten auf nicht (mehr) vorhandene Einträge fallen auf die
/// zugehörige Liste zurück.
pub fn navigate(state: &mut AppState, page: SitePage) {
    let resolved = match page {
        SitePage::Project(id) if state.content.projects.get_by_id(id).is_none() => {
            log::warn!("Projekt #{} nicht gefunden, zeige Portfolio", id);
            SitePage::Portfolio
        }
        SitePage::BlogPost(id) if state.content.blogs.get_by_id(id).is_none() => {
            log::warn!("Blogpost #{} nicht gefunden, zeige Blog", id);
            SitePage::Blog
        }
        other => other,
    };
    if matches!(resolved, SitePage::Project(_)) {
        state.site.slider = Default::default();
    }
    state.site.page = resolved;
}

/// Setzt die Portfolio-Seite (geklemmt).
pub fn set_portfolio_page(state: &mut AppState, page: usize) {
    let pagination = Pagination::new(
        state.content.projects.len(),
        state.options.portfolio_page_size,
        page,
    );
    state.site.portfolio_page = pagination.page();
}

/// Setzt die Blog-Seite (geklemmt).
pub fn set_blog_page(state: &mut AppState, page: usize) {
    let pagination = Pagination::new(
        state.content.blogs.len(),
        state.options.blog_page_size,
        page,
    );
    state.site.blog_page = pagination.page();
}

/// Setzt die Vorher/Nachher-Trennlinie.
pub fn set_slider_percent(state: &mut AppState, percent: f32) {
    state.site.slider.set_percent(percent);
}
