//! Criterion micro-benchmarks for the observation pipeline.

use criterion::{criterion_group, criterion_main, Criterion};
use gridlet_obs::{paint_canvas, resize_nearest, RenderSpec, Renderer, ViewMode};
use gridlet_test_utils::{goal_above_agent_layout, MockScene};

/// Benchmark: paint the 7x7 bordered canvas for the reference layout.
fn bench_paint_canvas(c: &mut Criterion) {
    let scene = MockScene::new(5, goal_above_agent_layout());
    c.bench_function("paint_canvas_5x5", |b| {
        b.iter(|| {
            let canvas = paint_canvas(&scene).unwrap();
            std::hint::black_box(&canvas);
        });
    });
}

/// Benchmark: nearest-neighbour resize of one 7x7 plane to 84x84.
fn bench_resize_plane(c: &mut Criterion) {
    let plane: Vec<f32> = (0..49).map(|i| (i % 2) as f32).collect();
    c.bench_function("resize_7x7_to_84x84", |b| {
        b.iter(|| {
            let out = resize_nearest(&plane, [7, 7], 84, 84);
            std::hint::black_box(&out);
        });
    });
}

/// Benchmark: full and partial render of the reference layout.
fn bench_render(c: &mut Criterion) {
    let scene = MockScene::new(5, goal_above_agent_layout());
    let views = [
        ("render_full_5x5", ViewMode::Full),
        ("render_partial_3x3", ViewMode::LOCAL_3X3),
    ];
    for (name, view) in views {
        let renderer = Renderer::new(RenderSpec {
            view,
            ..RenderSpec::default()
        })
        .unwrap();
        c.bench_function(name, |b| {
            b.iter(|| {
                let frame = renderer.render(&scene).unwrap();
                std::hint::black_box(&frame);
            });
        });
    }
}

criterion_group!(benches, bench_paint_canvas, bench_resize_plane, bench_render);
criterion_main!(benches);
