//! Criterion benchmarks for dispatch policy selection.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use lift_bench::{run_workload, stress_profile, workload};
use lift_core::{Direction, Floor, HallCall};
use lift_dispatch::{DispatchPolicy, FirstFit, NearestCar};
use lift_engine::Building;

fn busy_stress_building() -> Building {
    let cfg = stress_profile();
    let events = workload(&cfg, 4000, 7);
    let mut building = Building::new(cfg).unwrap();
    run_workload(&mut building, &events);
    building
}

fn bench_select(c: &mut Criterion) {
    let building = busy_stress_building();
    let calls: Vec<HallCall> = (0..building.floors())
        .step_by(7)
        .flat_map(|f| {
            [
                HallCall::new(Floor(f), Direction::Up),
                HallCall::new(Floor(f), Direction::Down),
            ]
        })
        .collect();

    let policies: [(&str, &dyn DispatchPolicy); 2] =
        [("select_first_fit", &FirstFit), ("select_nearest_car", &NearestCar)];
    for (name, policy) in policies {
        c.bench_function(name, |b| {
            b.iter(|| {
                for call in &calls {
                    black_box(policy.select(building.cars(), call));
                }
            });
        });
    }
}

criterion_group!(benches, bench_select);
criterion_main!(benches);
