//! Benchmarks for AION perception model operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use aion_core::Age;
use aion_model::{perceive, tabulate};

fn bench_perceive(c: &mut Criterion) {
    let age = Age::new(25).unwrap();

    c.bench_function("perceive", |b| {
        b.iter(|| black_box(perceive(black_box(age))))
    });
}

fn bench_tabulate(c: &mut Criterion) {
    c.bench_function("tabulate", |b| b.iter(|| black_box(tabulate())));
}

criterion_group!(benches, bench_perceive, bench_tabulate);
criterion_main!(benches);
