//! Query construction and matching benchmarks
//!
//! Measures:
//! - `get` for each call shape (name, pixels, combined notation)
//! - static vs live `is` evaluation
//! - table derivation for growing breakpoint lists
//!
//! Run benchmarks: `cargo bench --bench query_building`

use bpquery::prelude::*;
use bpquery::types::BreakpointDefinition;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_get(c: &mut Criterion) {
    let bp = Breakpoints::new();
    let mut group = c.benchmark_group("get");

    group.bench_function("name_min", |b| b.iter(|| bp.get(black_box("l"), 0)));
    group.bench_function("pixels_range", |b| {
        b.iter(|| bp.get(black_box(200), black_box(1000)))
    });
    group.bench_function("combined_notation", |b| {
        b.iter(|| bp.get(black_box("s,xl"), 0))
    });
    group.bench_function("high_density", |b| {
        b.iter(|| bp.get(black_box("retina"), 0))
    });

    group.finish();
}

fn bench_is(c: &mut Criterion) {
    let mut group = c.benchmark_group("is");

    let live = Breakpoints::new().with_matcher(ViewportMatcher::new(1280.0, 800.0));
    group.bench_function("live_viewport", |b| b.iter(|| live.is(black_box("m,xl"), 0)));

    let mut fixed = Breakpoints::new();
    fixed.set_options(OptionsUpdate::new().responsive(false));
    group.bench_function("static_range", |b| b.iter(|| fixed.is(black_box("m,xl"), 0)));

    group.finish();
}

fn bench_table_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_derivation");

    for count in [9, 100, 1000] {
        let breakpoints: Vec<_> = (0..count)
            .rev()
            .map(|i| BreakpointDefinition::new(format!("bp{}", i), (i * 10) as u32))
            .collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &breakpoints, |b, bps| {
            b.iter(|| {
                let mut bp = Breakpoints::new();
                bp.set_options(OptionsUpdate::new().breakpoints(black_box(bps.clone())));
                bp
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_get, bench_is, bench_table_derivation);
criterion_main!(benches);
