//! Use-Case-Funktionen für das Admin-Dashboard (Entwürfe, CRUD, Newsletter).

use crate::app::state::{AdminTab, Draft};
use crate::app::AppState;
use crate::core::{
    BlogPost, Entity, EntityId, Founder, InMemoryRepository, Pagination, Project, Repository,
    RepositoryError, Review, TeamMember,
};
use std::time::{SystemTime, UNIX_EPOCH};

/// Legt einen Eintrag an (`id == 0`) oder aktualisiert ihn.
fn upsert<T: Entity>(
    repo: &mut InMemoryRepository<T>,
    item: T,
) -> Result<EntityId, RepositoryError> {
    if item.id() == 0 {
        repo.create(item)
    } else {
        let id = item.id();
        repo.update(item)?;
        Ok(id)
    }
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Anzahl der Einträge im angegebenen Reiter.
pub fn record_count(state: &AppState, tab: AdminTab) -> usize {
    let content = &state.content;
    match tab {
        AdminTab::Blogs => content.blogs.len(),
        AdminTab::Projects => content.projects.len(),
        AdminTab::Team => content.team.len(),
        AdminTab::Founders => content.founders.len(),
        AdminTab::Reviews => content.reviews.len(),
        AdminTab::Subscribers => content.subscribers.len(),
    }
}

/// Wechselt den Reiter und springt auf Seite 1.
pub fn set_tab(state: &mut AppState, tab: AdminTab) {
    state.admin.tab = tab;
    state.admin.page = 1;
    state.admin.selected_section = None;
}

/// Setzt die Tabellenseite (geklemmt).
pub fn set_page(state: &mut AppState, page: usize) {
    let total = record_count(state, state.admin.tab);
    state.admin.page = Pagination::new(total, state.options.admin_page_size, page).page();
}

/// Öffnet einen leeren Entwurf für den aktiven Reiter.
pub fn begin_new_draft(state: &mut AppState) {
    let draft = match state.admin.tab {
        AdminTab::Blogs => Draft::Blog(BlogPost::draft()),
        AdminTab::Projects => Draft::Project(Project::draft()),
        AdminTab::Team => Draft::Team(TeamMember::draft()),
        AdminTab::Founders => Draft::Founder(Founder::draft()),
        AdminTab::Reviews => Draft::Review(Review::draft()),
        AdminTab::Subscribers => {
            // Abonnenten entstehen nur über die E-Mail-Eingabe
            state.ui.status_message =
                Some("Abonnenten werden über die E-Mail-Eingabe hinzugefügt".to_string());
            return;
        }
    };
    state.admin.selected_section = None;
    state.admin.draft = Some(draft);
}

/// Öffnet einen Entwurf als Kopie eines bestehenden Eintrags.
pub fn begin_edit_draft(state: &mut AppState, id: EntityId) -> anyhow::Result<()> {
    let content = &state.content;
    let tab = state.admin.tab;
    let draft = match tab {
        AdminTab::Blogs => content.blogs.get_by_id(id).cloned().map(Draft::Blog),
        AdminTab::Projects => content.projects.get_by_id(id).cloned().map(Draft::Project),
        AdminTab::Team => content.team.get_by_id(id).cloned().map(Draft::Team),
        AdminTab::Founders => content.founders.get_by_id(id).cloned().map(Draft::Founder),
        AdminTab::Reviews => content.reviews.get_by_id(id).cloned().map(Draft::Review),
        AdminTab::Subscribers => None,
    };
    let Some(draft) = draft else {
        anyhow::bail!("{} #{} nicht gefunden", tab.label(), id);
    };
    state.admin.selected_section = None;
    state.admin.draft = Some(draft);
    Ok(())
}

/// Verwirft den offenen Entwurf.
pub fn discard_draft(state: &mut AppState) {
    state.admin.draft = None;
    state.admin.selected_section = None;
}

/// Speichert den offenen Entwurf.
///
/// Bei Validierungsfehlern bleibt der Entwurf geöffnet.
pub fn commit_draft(state: &mut AppState) -> anyhow::Result<()> {
    let Some(draft) = state.admin.draft.take() else {
        return Ok(());
    };
    let content = &mut state.content;
    let result = match draft.clone() {
        Draft::Blog(mut post) => {
            post.normalize();
            upsert(&mut content.blogs, post)
        }
        Draft::Project(project) => upsert(&mut content.projects, project),
        Draft::Team(member) => upsert(&mut content.team, member),
        Draft::Founder(founder) => upsert(&mut content.founders, founder),
        Draft::Review(review) => upsert(&mut content.reviews, review),
    };

    match result {
        Ok(id) => {
            let action = if draft.is_new() { "angelegt" } else { "gespeichert" };
            let msg = format!("{} #{} {}", draft.tab().label(), id, action);
            log::info!("{}", msg);
            state.ui.status_message = Some(msg);
            state.admin.selected_section = None;
            state.mark_content_dirty();
            Ok(())
        }
        Err(e) => {
            state.admin.draft = Some(draft);
            Err(e.into())
        }
    }
}

/// Löscht einen Eintrag. Ein Entwurf desselben Eintrags wird verworfen.
pub fn delete_record(state: &mut AppState, tab: AdminTab, id: EntityId) -> anyhow::Result<()> {
    let content = &mut state.content;
    let label = match tab {
        AdminTab::Blogs => content.blogs.delete(id)?.label(),
        AdminTab::Projects => content.projects.delete(id)?.label(),
        AdminTab::Team => content.team.delete(id)?.label(),
        AdminTab::Founders => content.founders.delete(id)?.label(),
        AdminTab::Reviews => content.reviews.delete(id)?.label(),
        AdminTab::Subscribers => content.subscribers.delete(id)?.label(),
    };

    if state
        .admin
        .draft
        .as_ref()
        .is_some_and(|d| d.tab() == tab && d.id() == id)
    {
        discard_draft(state);
    }
    if state.admin.tab == tab {
        set_page(state, state.admin.page);
    }

    let msg = format!("{} gelöscht: {}", tab.label(), label);
    log::info!("{}", msg);
    state.ui.status_message = Some(msg);
    state.mark_content_dirty();
    Ok(())
}

/// Meldet eine E-Mail-Adresse für den Newsletter an.
pub fn subscribe(state: &mut AppState, email: &str) -> anyhow::Result<()> {
    let id = state.content.subscribe(email, now_unix())?;
    log::info!("Neuer Abonnent #{}", id);
    state.ui.status_message = Some("Danke für die Anmeldung!".to_string());
    state.admin.subscriber_email.clear();
    state.mark_content_dirty();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ContentStore;

    fn seeded() -> AppState {
        AppState::with_content(ContentStore::seeded())
    }

    #[test]
    fn new_draft_gets_fresh_id_on_commit() {
        let mut state = seeded();
        set_tab(&mut state, AdminTab::Team);
        begin_new_draft(&mut state);
        if let Some(Draft::Team(member)) = state.admin.draft.as_mut() {
            member.name = "Mara Lind".to_string();
            member.role = "Designerin".to_string();
        }
        commit_draft(&mut state).expect("gültiger Entwurf");

        assert!(state.admin.draft.is_none());
        assert_eq!(state.content.team.len(), 5);
        assert_eq!(
            state.content.team.get_by_id(5).map(|m| m.name.as_str()),
            Some("Mara Lind")
        );
        assert!(state.content_dirty);
    }

    #[test]
    fn invalid_draft_stays_open() {
        let mut state = seeded();
        set_tab(&mut state, AdminTab::Reviews);
        begin_new_draft(&mut state);

        assert!(commit_draft(&mut state).is_err());
        assert!(matches!(state.admin.draft, Some(Draft::Review(_))));
        assert!(!state.content_dirty);
    }

    #[test]
    fn subscribers_tab_has_no_draft() {
        let mut state = seeded();
        set_tab(&mut state, AdminTab::Subscribers);
        begin_new_draft(&mut state);
        assert!(state.admin.draft.is_none());
        assert!(state.ui.status_message.is_some());
    }

    #[test]
    fn delete_discards_matching_draft() {
        let mut state = seeded();
        set_tab(&mut state, AdminTab::Projects);
        begin_edit_draft(&mut state, 2).expect("Projekt 2 existiert");
        delete_record(&mut state, AdminTab::Projects, 2).expect("löschbar");

        assert!(state.admin.draft.is_none());
        assert!(state.content.projects.get_by_id(2).is_none());
    }

    #[test]
    fn delete_missing_record_fails() {
        let mut state = seeded();
        assert!(delete_record(&mut state, AdminTab::Blogs, 999).is_err());
        assert!(!state.content_dirty);
    }

    #[test]
    fn subscribe_rejects_duplicates() {
        let mut state = seeded();
        subscribe(&mut state, " Neu@Example.com ").expect("neue Adresse");
        assert!(subscribe(&mut state, "neu@example.com").is_err());
    }
}
