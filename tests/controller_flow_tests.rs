use studio_showcase::app::{SitePage, ViewMode};
use studio_showcase::arc::ContainerMeasurement;
use studio_showcase::{AppCommand, AppController, AppIntent, AppState, ContentStore};

fn seeded_home() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::with_content(ContentStore::seeded());
    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [1280.0, 800.0],
            },
        )
        .expect("ViewportResized sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::NavigateRequested {
                page: SitePage::Home,
            },
        )
        .expect("Navigation zur Startseite sollte ohne Fehler durchlaufen");
    (controller, state)
}

fn measure(controller: &mut AppController, state: &mut AppState, top: f32, height: f32) {
    controller
        .handle_intent(
            state,
            AppIntent::ArcContainerMeasured {
                measurement: Some(ContainerMeasurement::new(top, height)),
            },
        )
        .expect("Messung sollte ohne Fehler durchlaufen");
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_home_mounts_arc_section_with_one_item_per_review() {
    let (_, state) = seeded_home();

    let arc = state.site.arc.as_ref().expect("Bogen-Sektion sollte gemountet sein");
    assert!(arc.is_mounted());
    assert_eq!(arc.item_count(), 5);
    assert_eq!(arc.progress(), 0.0);
}

#[test]
fn test_scrolling_through_container_advances_active_review() {
    let (mut controller, mut state) = seeded_home();

    // Container beginnt am unteren Viewport-Rand: Fortschritt 0
    measure(&mut controller, &mut state, 800.0, 3200.0);
    let first = state
        .site
        .arc
        .as_ref()
        .and_then(|a| a.frame())
        .expect("Frame vorhanden");
    assert_eq!(first.active.index, 0);

    // Hälfte der Strecke (vh + h = 4000): top = 800 - 2000
    measure(&mut controller, &mut state, -1200.0, 3200.0);
    let middle = state
        .site
        .arc
        .as_ref()
        .and_then(|a| a.frame())
        .expect("Frame vorhanden");
    assert_eq!(middle.active.index, 2);

    // Weit hinter dem Container: geklemmt auf das letzte Element
    measure(&mut controller, &mut state, -9000.0, 3200.0);
    let last = state
        .site
        .arc
        .as_ref()
        .and_then(|a| a.frame())
        .expect("Frame vorhanden");
    assert_eq!(last.active.index, 4);
    assert_eq!(last.progress, 1.0);
}

#[test]
fn test_scroll_measurements_are_not_logged() {
    let (mut controller, mut state) = seeded_home();
    let before = state.command_log.len();

    measure(&mut controller, &mut state, 0.0, 3200.0);

    assert_eq!(state.command_log.len(), before);
    assert_eq!(state.command_log.scroll_updates(), 1);
}

#[test]
fn test_resize_keeps_progress() {
    let (mut controller, mut state) = seeded_home();
    measure(&mut controller, &mut state, -1200.0, 3200.0);
    let progress = state.site.arc.as_ref().map(|a| a.progress());

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [600.0, 900.0],
            },
        )
        .expect("Resize sollte ohne Fehler durchlaufen");

    assert_eq!(state.site.arc.as_ref().map(|a| a.progress()), progress);
    assert_eq!(state.site.viewport_size, [600.0, 900.0]);
}

#[test]
fn test_leaving_home_unmounts_arc_section() {
    let (mut controller, mut state) = seeded_home();

    controller
        .handle_intent(
            &mut state,
            AppIntent::NavigateRequested {
                page: SitePage::Blog,
            },
        )
        .expect("Navigation sollte ohne Fehler durchlaufen");

    assert!(state.site.arc.is_none());
    assert_eq!(state.site.page, SitePage::Blog);

    // Verspätete Messungen bleiben wirkungslos
    measure(&mut controller, &mut state, 0.0, 3200.0);
    assert!(state.site.arc.is_none());
}

#[test]
fn test_dashboard_unmounts_and_site_remounts() {
    let (mut controller, mut state) = seeded_home();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewModeSelected {
                mode: ViewMode::Admin,
            },
        )
        .expect("Wechsel ins Dashboard sollte ohne Fehler durchlaufen");
    assert!(state.site.arc.is_none());

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewModeSelected {
                mode: ViewMode::Site,
            },
        )
        .expect("Wechsel zur Website sollte ohne Fehler durchlaufen");
    assert!(state.site.arc.is_some());
}

#[test]
fn test_returning_home_resumes_at_last_scroll_position() {
    let (mut controller, mut state) = seeded_home();
    measure(&mut controller, &mut state, -1200.0, 3200.0);

    for page in [SitePage::Blog, SitePage::Home] {
        controller
            .handle_intent(&mut state, AppIntent::NavigateRequested { page })
            .expect("Navigation sollte ohne Fehler durchlaufen");
    }

    // Erster Frame nach dem Mounten, noch vor der nächsten Messung
    let frame = state
        .site
        .arc
        .as_ref()
        .and_then(|a| a.frame())
        .expect("Frame vorhanden");
    assert_eq!(frame.active.index, 2);
    assert_eq!(frame.progress, 0.5);
}

#[test]
fn test_slider_drag_is_clamped() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::SliderDragged { percent: 140.0 })
        .expect("SliderDragged sollte ohne Fehler durchlaufen");

    assert_eq!(state.site.slider.percent(), 100.0);
}

#[test]
fn test_portfolio_page_request_is_clamped() {
    let (mut controller, mut state) = seeded_home();

    controller
        .handle_intent(&mut state, AppIntent::PortfolioPageRequested { page: 9 })
        .expect("Seitenwechsel sollte ohne Fehler durchlaufen");

    assert_eq!(state.site.portfolio_page, 2);
}

#[test]
fn test_newsletter_subscription_clears_input_on_success() {
    let (mut controller, mut state) = seeded_home();
    state.site.newsletter_email = "studio@example.org".to_string();
    let email = state.site.newsletter_email.clone();

    controller
        .handle_intent(&mut state, AppIntent::NewsletterSubscribeRequested { email })
        .expect("Anmeldung sollte gelingen");

    assert!(state.site.newsletter_email.is_empty());
    assert_eq!(state.content.subscribers.iter().count(), 4);
    assert!(state.content_dirty);
    assert_eq!(state.command_log.content_changes().count(), 1);
}

#[test]
fn test_invalid_newsletter_email_keeps_input() {
    let (mut controller, mut state) = seeded_home();
    state.site.newsletter_email = "kein-at-zeichen".to_string();
    let email = state.site.newsletter_email.clone();

    let result =
        controller.handle_intent(&mut state, AppIntent::NewsletterSubscribeRequested { email });

    assert!(result.is_err());
    assert_eq!(state.site.newsletter_email, "kein-at-zeichen");
    assert!(!state.content_dirty);
}
