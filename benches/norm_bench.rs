use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::num::NonZeroU64;

use lineal::{BigComplex, BigDecimal, ComplexVector, Context, RoundingMode};

fn vector(size: usize) -> ComplexVector {
    let elements = (0..size)
        .map(|i| {
            BigComplex::new(
                BigDecimal::from(i as i64 % 97),
                BigDecimal::from((i as i64 * 31) % 89),
            )
        })
        .collect();
    ComplexVector::from_elements(elements).expect("non-empty")
}

fn ctx(digits: u64) -> Context {
    Context::new(
        NonZeroU64::new(digits).expect("nonzero digits"),
        RoundingMode::HalfEven,
    )
}

/// Euclidean norm, default precision vs. a 50-digit context.
fn bench_euclidean_norm(c: &mut Criterion) {
    let mut group = c.benchmark_group("norm/euclidean");
    let context = ctx(50);

    for &size in &[10, 100, 1_000] {
        group.throughput(Throughput::Elements(size as u64));
        let v = vector(size);

        group.bench_with_input(BenchmarkId::new("default", size), &v, |b, v| {
            b.iter(|| black_box(black_box(v).euclidean_norm()));
        });
        group.bench_with_input(BenchmarkId::new("context50", size), &v, |b, v| {
            b.iter(|| black_box(black_box(v).euclidean_norm_with(&context)));
        });
    }
    group.finish();
}

/// Dot product under a context: per-step rounding keeps the scale bounded.
fn bench_dot_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot_product");
    let context = ctx(50);

    for &size in &[10, 100, 1_000] {
        group.throughput(Throughput::Elements(size as u64));
        let a = vector(size);
        let b = vector(size);

        group.bench_with_input(BenchmarkId::new("default", size), &size, |bench, _| {
            bench.iter(|| black_box(a.dot_product(black_box(&b)).expect("equal sizes")));
        });
        group.bench_with_input(BenchmarkId::new("context50", size), &size, |bench, _| {
            bench.iter(|| {
                black_box(a.dot_product_with(black_box(&b), &context).expect("equal sizes"));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_euclidean_norm, bench_dot_product);
criterion_main!(benches);
