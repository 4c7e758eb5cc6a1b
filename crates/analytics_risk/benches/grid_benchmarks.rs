//! Criterion benchmarks for the combination grids.
//!
//! Benchmarks cover:
//! - Resilience grid, sequential vs rayon, over growing datasets
//! - Elasticity table over the full ESG × financial cross product
//! - Significance screen

use adapter_loader::synthetic::{ESG_COLUMNS, FINANCIAL_COLUMNS};
use adapter_loader::{MeanImputer, SyntheticEsgGenerator, SyntheticSpec};
use analytics_core::Frame;
use analytics_risk::{
    elasticity_table, significance_screen, ParallelConfig, ResilienceGrid, ShockLevel,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn dataset(rows: usize) -> Frame {
    let raw = SyntheticEsgGenerator::new(SyntheticSpec {
        rows,
        seed: 2024,
        missing_rate: 0.02,
    })
    .unwrap()
    .generate_frame()
    .unwrap();
    MeanImputer::fit_transform(&raw).unwrap()
}

fn shock_levels() -> Vec<ShockLevel> {
    ShockLevel::from_fractions(&[-0.3, -0.2, -0.1, -0.05, 0.05, 0.1, 0.2, 0.3]).unwrap()
}

fn bench_resilience_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("resilience_grid");
    let grid = ResilienceGrid::new(ESG_COLUMNS, FINANCIAL_COLUMNS, shock_levels()).unwrap();

    for rows in [500usize, 5_000, 50_000] {
        let frame = dataset(rows);

        group.bench_with_input(BenchmarkId::new("sequential", rows), &frame, |b, frame| {
            let config = ParallelConfig::sequential();
            b.iter(|| black_box(grid.run(black_box(frame), &config).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("rayon", rows), &frame, |b, frame| {
            let config = ParallelConfig::new(true, 1);
            b.iter(|| black_box(grid.run(black_box(frame), &config).unwrap()))
        });
    }

    group.finish();
}

fn bench_elasticity_table(c: &mut Criterion) {
    let frame = dataset(10_000);
    c.bench_function("elasticity_table_10k", |b| {
        b.iter(|| {
            black_box(
                elasticity_table(
                    black_box(&frame),
                    &ESG_COLUMNS,
                    &FINANCIAL_COLUMNS,
                    &ParallelConfig::default(),
                )
                .unwrap(),
            )
        })
    });
}

fn bench_significance_screen(c: &mut Criterion) {
    let frame = dataset(10_000);
    c.bench_function("significance_screen_10k", |b| {
        b.iter(|| {
            black_box(
                significance_screen(black_box(&frame), &ESG_COLUMNS, &FINANCIAL_COLUMNS, 0.05)
                    .unwrap(),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_resilience_grid,
    bench_elasticity_table,
    bench_significance_screen
);
criterion_main!(benches);
