use criterion::{criterion_group, criterion_main, Criterion};
use pharmakin::prelude::*;
use std::hint::black_box;

const SCENARIO: &str = "The initial plasma concentration was 95 mg/L. k = 0.18. \
                        Repeated dosing every 6 hours.";

fn bench_extract(c: &mut Criterion) {
    c.bench_function("extract scenario", |b| {
        b.iter(|| extract(black_box(SCENARIO)))
    });
}

fn bench_simulate(c: &mut Criterion) {
    let params = DoseParameters::new(95.0, 0.18, 6.0).unwrap();
    let options = SimulationOptions::default();

    c.bench_function("simulate 48h", |b| {
        b.iter(|| simulate(black_box(&params), black_box(&options)))
    });
}

fn bench_full_run(c: &mut Criterion) {
    let options = SimulationOptions::default();

    c.bench_function("run scenario", |b| {
        b.iter(|| run(black_box(SCENARIO), black_box(&options)).unwrap())
    });
}

criterion_group!(benches, bench_extract, bench_simulate, bench_full_run);
criterion_main!(benches);
