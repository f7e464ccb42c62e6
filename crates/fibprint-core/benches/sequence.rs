//! Criterion benchmarks for bounded sequence generation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigUint;

use fibprint_core::sequence::BoundedSequence;

fn bench_sequence(c: &mut Criterion) {
    let limits: Vec<(u32, BigUint)> = [10u32, 100, 1_000, 10_000]
        .into_iter()
        .map(|digits| (digits, BigUint::from(10u32).pow(digits)))
        .collect();

    let mut group = c.benchmark_group("BoundedSequence");
    for (digits, limit) in &limits {
        group.bench_with_input(BenchmarkId::new("digits", digits), limit, |b, limit| {
            b.iter(|| BoundedSequence::new(limit.clone()).count());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sequence);
criterion_main!(benches);
