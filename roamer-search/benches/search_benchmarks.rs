//! Criterion benchmarks for the search strategies.
//!
//! Uses the Paris sample (eight landmarks, 56 edges) so timings reflect the
//! dataset the planner ships with. UCS is measured for both metrics since
//! the metric changes which states dominate.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package roamer-search
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use roamer_core::{Algorithm, OptimizeFor};
use roamer_data::sample::{paris_edges, paris_places};
use roamer_search::find_best_route;

/// Depth limit large enough for DLS to cover all eight landmarks.
const DLS_DEPTH_LIMIT: usize = 8;

fn bench_strategies(c: &mut Criterion) {
    let places = paris_places();
    let edges = paris_edges();

    let mut group = c.benchmark_group("paris_sample");
    group.measurement_time(Duration::from_secs(5));

    let cases = [
        ("dfs", Algorithm::Dfs, OptimizeFor::Distance),
        ("dls", Algorithm::Dls, OptimizeFor::Distance),
        ("ucs_distance", Algorithm::Ucs, OptimizeFor::Distance),
        ("ucs_duration", Algorithm::Ucs, OptimizeFor::Duration),
    ];
    for (label, algorithm, metric) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(label), &algorithm, |b, &algorithm| {
            b.iter(|| {
                find_best_route(
                    black_box(&places),
                    black_box(&edges),
                    algorithm,
                    metric,
                    Some(DLS_DEPTH_LIMIT),
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
