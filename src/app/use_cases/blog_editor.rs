//! Use-Case-Funktionen für die Abschnittsgliederung im Blog-Editor.

use crate::app::AppState;
use crate::core::outline;

/// Fügt einen Abschnitt ein und markiert ihn.
pub fn add_section(state: &mut AppState, after: Option<usize>, level: u8) {
    let Some(post) = state.admin.blog_draft_mut() else {
        return;
    };
    let index = outline::insert_section(&mut post.sections, after, level);
    state.admin.selected_section = Some(index);
}

/// Entfernt einen Abschnitt; die Markierung rückt auf den Nachbarn.
pub fn remove_section(state: &mut AppState, index: usize) {
    let Some(post) = state.admin.blog_draft_mut() else {
        return;
    };
    if outline::remove_section(&mut post.sections, index).is_none() {
        return;
    }
    let remaining = post.sections.len();
    state.admin.selected_section = if remaining == 0 {
        None
    } else {
        Some(index.min(remaining - 1))
    };
}

/// Verschiebt einen Abschnitt um eine Position.
pub fn move_section(state: &mut AppState, index: usize, up: bool) {
    let Some(post) = state.admin.blog_draft_mut() else {
        return;
    };
    if let Some(new_index) = outline::move_section(&mut post.sections, index, up) {
        state.admin.selected_section = Some(new_index);
    }
}

/// Ändert die Gliederungsebene eines Abschnitts.
pub fn shift_section_level(state: &mut AppState, index: usize, delta: i8) {
    if let Some(post) = state.admin.blog_draft_mut() {
        outline::shift_level(&mut post.sections, index, delta);
    }
}

/// Markiert einen Abschnitt im Editor.
pub fn select_section(state: &mut AppState, index: Option<usize>) {
    let len = match state.admin.blog_draft_mut() {
        Some(post) => post.sections.len(),
        None => 0,
    };
    state.admin.selected_section = index.filter(|&i| i < len);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{AdminTab, Draft};
    use crate::core::BlogPost;

    fn editing_state() -> AppState {
        let mut state = AppState::new();
        state.admin.tab = AdminTab::Blogs;
        state.admin.draft = Some(Draft::Blog(BlogPost::draft()));
        state
    }

    fn numbers(state: &AppState) -> Vec<String> {
        match state.admin.draft.as_ref() {
            Some(Draft::Blog(post)) => post.sections.iter().map(|s| s.number.clone()).collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn sections_are_renumbered_after_each_edit() {
        let mut state = editing_state();
        add_section(&mut state, Some(0), 2);
        add_section(&mut state, Some(1), 1);
        assert_eq!(numbers(&state), vec!["1", "1.1", "2"]);

        move_section(&mut state, 2, true);
        assert_eq!(numbers(&state), vec!["1", "2", "2.1"]);
        assert_eq!(state.admin.selected_section, Some(1));

        shift_section_level(&mut state, 2, -1);
        assert_eq!(numbers(&state), vec!["1", "2", "3"]);

        remove_section(&mut state, 0);
        assert_eq!(numbers(&state), vec!["1", "2"]);
    }

    #[test]
    fn edits_without_blog_draft_are_ignored() {
        let mut state = AppState::new();
        add_section(&mut state, None, 1);
        assert!(state.admin.selected_section.is_none());
        select_section(&mut state, Some(0));
        assert!(state.admin.selected_section.is_none());
    }
}
