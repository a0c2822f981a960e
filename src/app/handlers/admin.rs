//! Handler für das Admin-Dashboard und den Blog-Editor.

use crate::app::state::AdminTab;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::EntityId;

/// Meldet eine E-Mail-Adresse für den Newsletter an.
pub fn subscribe(state: &mut AppState, email: &str) -> anyhow::Result<()> {
    use_cases::content::subscribe(state, email)
}

/// Wechselt den Dashboard-Reiter.
pub fn set_tab(state: &mut AppState, tab: AdminTab) {
    use_cases::content::set_tab(state, tab);
}

/// Blättert in der Dashboard-Tabelle.
pub fn set_page(state: &mut AppState, page: usize) {
    use_cases::content::set_page(state, page);
}

/// Öffnet einen leeren Entwurf.
pub fn begin_new_draft(state: &mut AppState) {
    use_cases::content::begin_new_draft(state);
}

/// Öffnet einen Entwurf für einen bestehenden Eintrag.
pub fn begin_edit_draft(state: &mut AppState, id: EntityId) -> anyhow::Result<()> {
    use_cases::content::begin_edit_draft(state, id)
}

/// Verwirft den offenen Entwurf.
pub fn discard_draft(state: &mut AppState) {
    use_cases::content::discard_draft(state);
}

/// Speichert den offenen Entwurf.
pub fn commit_draft(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::content::commit_draft(state)
}

/// Löscht einen Eintrag.
pub fn delete_record(state: &mut AppState, tab: AdminTab, id: EntityId) -> anyhow::Result<()> {
    use_cases::content::delete_record(state, tab, id)
}

// ── Blog-Editor ─────────────────────────────────────────────────────

pub fn add_section(state: &mut AppState, after: Option<usize>, level: u8) {
    use_cases::blog_editor::add_section(state, after, level);
}

pub fn remove_section(state: &mut AppState, index: usize) {
    use_cases::blog_editor::remove_section(state, index);
}

pub fn move_section(state: &mut AppState, index: usize, up: bool) {
    use_cases::blog_editor::move_section(state, index, up);
}

pub fn shift_section_level(state: &mut AppState, index: usize, delta: i8) {
    use_cases::blog_editor::shift_section_level(state, index, delta);
}

pub fn select_section(state: &mut AppState, index: Option<usize>) {
    use_cases::blog_editor::select_section(state, index);
}
