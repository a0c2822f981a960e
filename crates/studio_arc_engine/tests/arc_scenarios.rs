use approx::assert_relative_eq;
use glam::Vec2;
use studio_arc_engine::opacity::marker_opacity;
use studio_arc_engine::{
    select_active_item, ArcEngine, ArcLayoutConfig, ContainerMeasurement, ControlPoints,
};

const VIEWPORT: Vec2 = Vec2::new(1280.0, 800.0);
const CONTAINER_HEIGHT: f32 = 4000.0;

/// Container-Oberkante, bei der der Scroll-Fortschritt genau `progress` ist.
fn top_for_progress(progress: f32) -> f32 {
    VIEWPORT.y - progress * (VIEWPORT.y + CONTAINER_HEIGHT)
}

fn scrolled_engine(items: usize, progress: f32) -> ArcEngine {
    let mut engine = ArcEngine::mount(VIEWPORT, items, ArcLayoutConfig::default(), None);
    engine.scroll(Some(ContainerMeasurement::new(
        top_for_progress(progress),
        CONTAINER_HEIGHT,
    )));
    engine
}

#[test]
fn test_scenario_start_of_section() {
    let engine = scrolled_engine(5, 0.0);
    let frame = engine.frame().expect("Frame erwartet");

    assert_eq!(frame.active.index, 0);
    assert_eq!(frame.active.local_progress, 0.0);
    assert_relative_eq!(frame.marker.opacity, 0.5, epsilon = 1e-6);
}

#[test]
fn test_scenario_middle_of_section() {
    let engine = scrolled_engine(5, 0.5);
    let frame = engine.frame().expect("Frame erwartet");

    assert_eq!(frame.active.index, 2);
    assert_relative_eq!(frame.active.local_progress, 0.5, epsilon = 1e-5);
    assert_relative_eq!(frame.marker.opacity, 1.0, epsilon = 1e-6);
}

#[test]
fn test_scenario_end_of_section() {
    let engine = scrolled_engine(5, 1.0);
    let frame = engine.frame().expect("Frame erwartet");

    assert_eq!(frame.active.index, 4);
    assert_eq!(frame.active.local_progress, 1.0);
    // Letztes Element beendet die Kurve am rechten Endpunkt
    assert_eq!(frame.marker.position, engine.control_points().p2);
}

#[test]
fn test_scenario_resize_keeps_progress() {
    let mut engine = scrolled_engine(5, 0.5);
    let progress = engine.progress();
    let index = engine.frame().expect("Frame erwartet").active.index;

    engine.resize(Vec2::new(414.0, 896.0));

    assert_eq!(engine.progress(), progress);
    assert_eq!(engine.frame().expect("Frame erwartet").active.index, index);
    assert_eq!(
        *engine.control_points(),
        ControlPoints::for_viewport(Vec2::new(414.0, 896.0), &ArcLayoutConfig::default())
    );
}

#[test]
fn test_scrolling_back_and_forth_cycles_items() {
    let mut engine = ArcEngine::mount(VIEWPORT, 4, ArcLayoutConfig::default(), None);
    let mut seen = Vec::new();

    for step in (0..=40).chain((0..=40).rev()) {
        let progress = step as f32 / 40.0;
        engine.scroll(Some(ContainerMeasurement::new(
            top_for_progress(progress),
            CONTAINER_HEIGHT,
        )));
        let frame = engine.frame().expect("Frame erwartet");
        assert!(frame.active.index < 4);
        assert!((0.0..=1.0).contains(&frame.active.local_progress));
        seen.push(frame.active.index);
    }

    assert_eq!(seen.first(), Some(&0));
    assert_eq!(seen.last(), Some(&0));
    assert!(seen.contains(&3));
}

#[test]
fn test_marker_opacity_symmetric_around_slot_center() {
    for step in 0..=10 {
        let d = step as f32 * 0.05;
        assert_relative_eq!(marker_opacity(0.5 - d), marker_opacity(0.5 + d), epsilon = 1e-6);
    }
}

#[test]
fn test_selector_bounds_for_many_item_counts() {
    for n in 1..=12usize {
        for p in [0.0f32, 1.0, 0.999_999, 1e-7] {
            let item = select_active_item(p, n).expect("Element erwartet");
            assert!(item.index <= n - 1);
            assert!((0.0..=1.0).contains(&item.local_progress));
        }
    }
}
