//! Criterion benchmarks for whole-building ticking and workloads.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use lift_bench::{reference_profile, run_workload, stress_profile, workload};
use lift_engine::Building;

fn bench_tick_reference(c: &mut Criterion) {
    let cfg = reference_profile();
    let events = workload(&cfg, 400, 42);
    let mut building = Building::new(cfg).unwrap();
    run_workload(&mut building, &events);

    c.bench_function("tick_reference", |b| {
        b.iter(|| {
            let report = building.tick();
            black_box(&report);
        });
    });
}

fn bench_tick_stress(c: &mut Criterion) {
    let cfg = stress_profile();
    let events = workload(&cfg, 4000, 42);
    let mut building = Building::new(cfg).unwrap();
    run_workload(&mut building, &events);

    c.bench_function("tick_stress", |b| {
        b.iter(|| {
            let report = building.tick();
            black_box(&report);
        });
    });
}

fn bench_workload_10k_reference(c: &mut Criterion) {
    let cfg = reference_profile();
    let events = workload(&cfg, 10_000, 42);

    c.bench_function("workload_10k_reference", |b| {
        b.iter(|| {
            let mut building = Building::new(cfg.clone()).unwrap();
            black_box(run_workload(&mut building, &events));
        });
    });
}

criterion_group!(
    benches,
    bench_tick_reference,
    bench_tick_stress,
    bench_workload_10k_reference
);
criterion_main!(benches);
