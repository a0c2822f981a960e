//! Use-Case-Funktionen für Laufzeit-Optionen.

use super::{arc_section, content, navigation};
use crate::app::AppState;
use crate::shared::ShowcaseOptions;

/// Übernimmt neue Optionen, klemmt alle Seitenzähler neu und speichert die Datei.
pub fn apply(state: &mut AppState, options: ShowcaseOptions) -> anyhow::Result<()> {
    state.options = options;
    revalidate(state);
    state.options.save_to_file(&ShowcaseOptions::config_path())
}

/// Setzt die Optionen auf Standardwerte zurück.
pub fn reset(state: &mut AppState) -> anyhow::Result<()> {
    apply(state, ShowcaseOptions::default())
}

fn revalidate(state: &mut AppState) {
    arc_section::apply_layout(state);
    navigation::set_portfolio_page(state, state.site.portfolio_page);
    navigation::set_blog_page(state, state.site.blog_page);
    content::set_page(state, state.admin.page);
}
