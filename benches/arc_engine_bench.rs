use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;
use studio_showcase::arc::{ArcEngine, ArcLayoutConfig, ContainerMeasurement};
use studio_showcase::core::outline;
use studio_showcase::BlogSection;

fn bench_scroll_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("arc_scroll_frame");

    for &item_count in &[5usize, 50, 500] {
        let mut engine = ArcEngine::mount(
            Vec2::new(1280.0, 800.0),
            item_count,
            ArcLayoutConfig::default(),
            None,
        );
        let height = 800.0 * 0.8 * item_count as f32;
        let steps: Vec<f32> = (0..1024).map(|i| 800.0 - i as f32 * 4.0).collect();

        group.bench_with_input(
            BenchmarkId::new("scroll_then_frame", item_count),
            &steps,
            |b, steps| {
                b.iter(|| {
                    let mut opacity = 0.0;
                    for &top in steps {
                        engine.scroll(Some(ContainerMeasurement::new(black_box(top), height)));
                        if let Some(frame) = engine.frame() {
                            opacity += frame.marker.opacity + frame.text.opacity;
                        }
                    }
                    black_box(opacity)
                })
            },
        );
    }

    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut engine = ArcEngine::mount(
        Vec2::new(1280.0, 800.0),
        5,
        ArcLayoutConfig::default(),
        None,
    );
    let widths: Vec<f32> = (0..256).map(|i| 320.0 + i as f32 * 6.0).collect();

    c.bench_function("arc_resize_breakpoints", |b| {
        b.iter(|| {
            for &width in &widths {
                engine.resize(Vec2::new(black_box(width), 800.0));
            }
            black_box(engine.control_points().p1)
        })
    });
}

fn bench_outline_renumber(c: &mut Criterion) {
    let mut sections: Vec<BlogSection> = (0..2_000)
        .map(|i| BlogSection::new((i % 3 + 1) as u8, format!("Abschnitt {i}"), ""))
        .collect();

    c.bench_function("outline_renumber_2000", |b| {
        b.iter(|| {
            outline::renumber(black_box(&mut sections));
            black_box(sections.len())
        })
    });
}

criterion_group!(benches, bench_scroll_frame, bench_resize, bench_outline_renumber);
criterion_main!(benches);
