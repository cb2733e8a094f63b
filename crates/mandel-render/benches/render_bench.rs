//! Fill and colorize benchmarks.
//! Run with: cargo bench -p mandel-render --bench render_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mandel_core::types::Projection;
use mandel_render::{Action, RenderSettings, Renderer};

fn fill_by_threads(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_threads");
    group.sample_size(10);

    for threads in [1, 2, 4, 8] {
        let settings = RenderSettings::new(640, 360, Projection::FixedPlane)
            .unwrap()
            .with_max_iterations(256)
            .with_threads(threads);
        let mut renderer = Renderer::new(settings).unwrap();
        group.bench_with_input(BenchmarkId::new("fixed_plane", threads), &threads, |b, _| {
            b.iter(|| renderer.refresh().unwrap());
        });
    }
    group.finish();
}

fn render_zoomed(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_zoomed");
    group.sample_size(10);

    let settings = RenderSettings::new(800, 600, Projection::CenteredScale).unwrap();
    let mut renderer = Renderer::new(settings).unwrap();
    for _ in 0..10 {
        renderer.apply(Action::ZoomIn);
    }
    group.bench_function("centered_scale_x10", |b| {
        b.iter(|| renderer.render().unwrap());
    });
    group.finish();
}

criterion_group!(benches, fill_by_threads, render_zoomed);
criterion_main!(benches);
