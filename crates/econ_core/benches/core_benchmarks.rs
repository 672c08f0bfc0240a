//! Criterion benchmarks for econ_core curve operations.
//!
//! Measures grid construction, envelope and crossing detection at the grid
//! sizes the dashboard pages use (hundreds of points) and beyond.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use econ_core::math::crossings::find_crossings;
use econ_core::math::curve::SampledCurve;
use econ_core::math::envelope::lower_envelope;
use econ_core::math::grid::linspace;
use econ_core::types::CurveError;

fn average_cost_curve(grid: &[f64], level: f64, slope: f64) -> SampledCurve<f64> {
    SampledCurve::from_fn(grid, |q| Ok::<_, CurveError>(level / q + slope)).unwrap()
}

/// Benchmark grid construction.
fn bench_linspace(c: &mut Criterion) {
    let mut group = c.benchmark_group("linspace");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| linspace(black_box(1.0_f64), black_box(120.0), size).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the lower envelope of three technique curves.
fn bench_lower_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("lower_envelope");

    for size in [200, 500, 1200] {
        let grid = linspace(1.0, 120.0, size).unwrap();
        let curves = vec![
            average_cost_curve(&grid, 120.0, 9.0),
            average_cost_curve(&grid, 90.0, 6.0),
            average_cost_curve(&grid, 70.0, 0.8),
        ];

        group.bench_with_input(BenchmarkId::from_parameter(size), &curves, |b, curves| {
            b.iter(|| lower_envelope(black_box(curves)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark break-even detection against a constant price.
fn bench_find_crossings(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_crossings");

    for size in [300, 1000, 10000] {
        let grid = linspace(1.0, 50.0, size).unwrap();
        let curve = average_cost_curve(&grid, 100.0, 9.0);

        group.bench_with_input(BenchmarkId::from_parameter(size), &curve, |b, curve| {
            b.iter(|| find_crossings(black_box(curve), black_box(12.0)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_linspace,
    bench_lower_envelope,
    bench_find_crossings
);
criterion_main!(benches);
