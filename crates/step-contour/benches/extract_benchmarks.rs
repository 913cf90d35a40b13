//! Benchmarks for step graph extraction.
//!
//! Run with: cargo bench --package step-contour --bench extract_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use step_contour::{ContourExtractor, LevelSet};
use steps_common::{Probe, SampleGrid};

/// A smooth rolling depth field, the shape the simulation settles into.
fn smooth_field(columns: usize, rows: usize, spacing: f64, max_depth: f64) -> SampleGrid {
    SampleGrid::from_fn(columns, rows, spacing, |i, j, x, y| {
        let fx = i as f64 / columns as f64;
        let fy = j as f64 / rows as f64;
        let wave = (fx * std::f64::consts::PI * 4.0).sin() * 0.35
            + (fy * std::f64::consts::PI * 4.0).sin() * 0.35
            + ((fx + fy) * std::f64::consts::PI * 2.0).sin() * 0.15;
        Probe::new(x, y, max_depth * (0.5 + wave * 0.5), 0.0)
    })
}

/// The smooth field with per-probe noise, producing many more crossings.
fn noisy_field(columns: usize, rows: usize, spacing: f64, max_depth: f64) -> SampleGrid {
    let mut rng = rand::thread_rng();
    let mut grid = smooth_field(columns, rows, spacing, max_depth);
    for probe in grid.probes_mut() {
        probe.depth = (probe.depth + rng.gen_range(-10.0..10.0)).clamp(0.0, max_depth);
    }
    grid
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for (columns, rows) in [(30, 17), (60, 34), (120, 68)] {
        let grid = smooth_field(columns, rows, 64.0, 150.0);
        let extractor = ContourExtractor::new(LevelSet::descending(150.0, 8), 64.0, 2);

        group.bench_with_input(
            BenchmarkId::new("smooth", format!("{}x{}", columns, rows)),
            &grid,
            |b, grid| {
                b.iter(|| extractor.extract(black_box(grid)).unwrap());
            },
        );
    }

    let grid = noisy_field(60, 34, 64.0, 150.0);
    let extractor = ContourExtractor::new(LevelSet::descending(150.0, 8), 64.0, 2);
    group.bench_with_input(BenchmarkId::new("noisy", "60x34"), &grid, |b, grid| {
        b.iter(|| extractor.extract(black_box(grid)).unwrap());
    });

    group.finish();
}

fn bench_rounding_passes(c: &mut Criterion) {
    let mut group = c.benchmark_group("rounding_passes");
    let grid = smooth_field(60, 34, 64.0, 150.0);

    for passes in [0u32, 1, 2, 4] {
        let extractor = ContourExtractor::new(LevelSet::descending(150.0, 8), 64.0, passes);
        group.bench_with_input(BenchmarkId::new("passes", passes), &grid, |b, grid| {
            b.iter(|| extractor.extract(black_box(grid)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extract, bench_rounding_passes);
criterion_main!(benches);
