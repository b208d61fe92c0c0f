//! Criterion benchmarks for the render pipeline.
//!
//! Run with: `cargo bench --bench render_pipeline`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use mandelbrot_explorer::{
    render, render_serial, zoom_at, GridPreset, IterationCap, Point, ScrollDirection, Viewport,
};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(20);

    for preset in GridPreset::ALL.iter().copied() {
        let grid = preset.grid();
        group.throughput(Throughput::Elements(grid.pixel_count() as u64));

        for cap in [IterationCap::DEFAULT, IterationCap::clamped(i64::from(IterationCap::MAX))] {
            let id = format!("{preset}/{cap}");

            group.bench_with_input(BenchmarkId::new("parallel", &id), &cap, |b, &cap| {
                b.iter(|| render(black_box(Viewport::DEFAULT), grid, cap));
            });

            group.bench_with_input(BenchmarkId::new("serial", &id), &cap, |b, &cap| {
                b.iter(|| render_serial(black_box(Viewport::DEFAULT), grid, cap));
            });
        }
    }

    group.finish();
}

fn bench_zoom_sequence(c: &mut Criterion) {
    let grid = GridPreset::Small.grid();
    let cursor = Point::new(220.0, 300.0);

    c.bench_function("zoom_sequence/100_notches", |b| {
        b.iter(|| {
            (0..100).fold(Viewport::DEFAULT, |viewport, _| {
                zoom_at(viewport, black_box(cursor), grid, ScrollDirection::Forward)
            })
        });
    });

    // Every notch triggers a full re-render in the explorer.
    let mut group = c.benchmark_group("zoom_then_render");
    group.sample_size(10);
    group.bench_function("small/10_notches", |b| {
        b.iter(|| {
            let mut viewport = Viewport::DEFAULT;
            for _ in 0..10 {
                viewport = zoom_at(viewport, cursor, grid, ScrollDirection::Forward);
                black_box(render(viewport, grid, IterationCap::DEFAULT));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_render, bench_zoom_sequence);
criterion_main!(benches);
