use studio_showcase::app::{AdminTab, Draft, ViewMode};
use studio_showcase::{AppController, AppIntent, AppState, ContentStore, Repository};

fn seeded_dashboard(tab: AdminTab) -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::with_content(ContentStore::seeded());
    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewModeSelected {
                mode: ViewMode::Admin,
            },
        )
        .expect("Wechsel ins Dashboard sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::AdminTabSelected { tab })
        .expect("Reiterwechsel sollte ohne Fehler durchlaufen");
    (controller, state)
}

fn blog_draft(state: &mut AppState) -> &mut studio_showcase::BlogPost {
    state
        .admin
        .blog_draft_mut()
        .expect("Blog-Entwurf sollte offen sein")
}

#[test]
fn test_new_blog_post_with_outline_is_numbered_on_save() {
    let (mut controller, mut state) = seeded_dashboard(AdminTab::Blogs);

    controller
        .handle_intent(&mut state, AppIntent::NewRecordRequested)
        .expect("Neuer Entwurf sollte sich öffnen");

    {
        let post = blog_draft(&mut state);
        post.title = "Light & Shadow".to_string();
        post.author = "Elena Brandt".to_string();
    }

    for intent in [
        AppIntent::SectionAddRequested {
            after: Some(0),
            level: 2,
        },
        AppIntent::SectionAddRequested {
            after: Some(1),
            level: 3,
        },
        AppIntent::SectionAddRequested {
            after: Some(2),
            level: 1,
        },
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Abschnitt sollte eingefügt werden");
    }

    controller
        .handle_intent(&mut state, AppIntent::DraftSaveRequested)
        .expect("Entwurf sollte gespeichert werden");

    assert!(state.admin.draft.is_none());
    let saved = state
        .content
        .blogs
        .get_by_id(8)
        .expect("Neuer Post sollte ID 8 erhalten");
    assert_eq!(saved.slug, "light-shadow");
    let numbers: Vec<&str> = saved.sections.iter().map(|s| s.number.as_str()).collect();
    assert_eq!(numbers, vec!["1", "1.1", "1.1.1", "2"]);
}

#[test]
fn test_switching_tab_discards_draft() {
    let (mut controller, mut state) = seeded_dashboard(AdminTab::Projects);

    controller
        .handle_intent(&mut state, AppIntent::EditRecordRequested { id: 3 })
        .expect("Projekt 3 sollte bearbeitbar sein");
    assert!(matches!(state.admin.draft, Some(Draft::Project(_))));

    controller
        .handle_intent(
            &mut state,
            AppIntent::AdminTabSelected {
                tab: AdminTab::Team,
            },
        )
        .expect("Reiterwechsel sollte ohne Fehler durchlaufen");

    assert!(state.admin.draft.is_none());
    assert_eq!(state.admin.tab, AdminTab::Team);
}

#[test]
fn test_edit_missing_record_reports_error() {
    let (mut controller, mut state) = seeded_dashboard(AdminTab::Founders);

    let result = controller.handle_intent(&mut state, AppIntent::EditRecordRequested { id: 77 });

    assert!(result.is_err());
    assert!(state.admin.draft.is_none());
}

#[test]
fn test_deleting_review_shrinks_arc_section() {
    let mut controller = AppController::new();
    let mut state = AppState::with_content(ContentStore::seeded());
    controller
        .handle_intent(
            &mut state,
            AppIntent::NavigateRequested {
                page: studio_showcase::app::SitePage::Home,
            },
        )
        .expect("Startseite sollte sich öffnen");

    controller
        .handle_intent(
            &mut state,
            AppIntent::DeleteRecordRequested {
                tab: AdminTab::Reviews,
                id: 2,
            },
        )
        .expect("Review 2 sollte löschbar sein");

    assert_eq!(state.content.reviews.len(), 4);
    assert_eq!(state.site.arc.as_ref().map(|a| a.item_count()), Some(4));
    assert!(state.content_dirty);
}

#[test]
fn test_invalid_review_keeps_draft_open() {
    let (mut controller, mut state) = seeded_dashboard(AdminTab::Reviews);

    controller
        .handle_intent(&mut state, AppIntent::NewRecordRequested)
        .expect("Neuer Entwurf sollte sich öffnen");
    let result = controller.handle_intent(&mut state, AppIntent::DraftSaveRequested);

    assert!(result.is_err());
    assert!(matches!(state.admin.draft, Some(Draft::Review(_))));
    assert_eq!(state.content.reviews.len(), 5);
}

#[test]
fn test_manual_subscriber_is_added_once() {
    let (mut controller, mut state) = seeded_dashboard(AdminTab::Subscribers);

    controller
        .handle_intent(
            &mut state,
            AppIntent::SubscriberAddRequested {
                email: "Press@Studio.example".to_string(),
            },
        )
        .expect("Neue Adresse sollte angenommen werden");
    let duplicate = controller.handle_intent(
        &mut state,
        AppIntent::SubscriberAddRequested {
            email: "press@studio.example".to_string(),
        },
    );

    assert!(duplicate.is_err());
    assert_eq!(state.content.subscribers.len(), 4);
    assert!(state
        .content
        .subscribers
        .iter()
        .any(|s| s.email == "press@studio.example"));
}

#[test]
fn test_reset_content_restores_seed_after_confirmation() {
    let (mut controller, mut state) = seeded_dashboard(AdminTab::Team);
    controller
        .handle_intent(
            &mut state,
            AppIntent::DeleteRecordRequested {
                tab: AdminTab::Team,
                id: 1,
            },
        )
        .expect("Teammitglied 1 sollte löschbar sein");

    controller
        .handle_intent(&mut state, AppIntent::ResetContentRequested)
        .expect("Rückfrage sollte erscheinen");
    assert!(state.ui.show_reset_confirm);

    controller
        .handle_intent(&mut state, AppIntent::ResetContentConfirmed)
        .expect("Zurücksetzen sollte gelingen");

    assert!(!state.ui.show_reset_confirm);
    assert_eq!(state.content.team.len(), 4);
}

#[test]
fn test_admin_page_request_is_clamped() {
    let (mut controller, mut state) = seeded_dashboard(AdminTab::Blogs);

    controller
        .handle_intent(&mut state, AppIntent::AdminPageRequested { page: 5 })
        .expect("Seitenwechsel sollte ohne Fehler durchlaufen");

    // 7 Posts bei 8 Zeilen je Seite
    assert_eq!(state.admin.page, 1);
}
