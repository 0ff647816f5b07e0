//! Benchmarks for the overflow-promoting sequences.
//!
//! Includes:
//! - Narrow-only runs against runs that promote part way
//! - Bernoulli and harmonic prefixes
//! - Faulhaber sums and normalization of coefficient vectors

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use exactseq::prelude::*;

/// Benchmark factorials on both sides of the promotion threshold.
fn bench_factorial(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorial");
    let opts = Options::quiet();

    for n in [20, 21, 100, 500] {
        group.bench_with_input(BenchmarkId::new("term", n), &n, |b, &n| {
            b.iter(|| black_box(factorial(black_box(n), &opts)));
        });
    }

    group.finish();
}

/// Benchmark Bernoulli prefixes; the quadratic recurrence dominates.
fn bench_bernoulli(c: &mut Criterion) {
    let mut group = c.benchmark_group("bernoulli");
    let opts = Options::quiet();

    for n in [30, 35, 60, 120] {
        group.bench_with_input(BenchmarkId::new("sequence", n), &n, |b, &n| {
            b.iter(|| black_box(bernoulli_sequence(black_box(n), &opts)));
        });
    }

    // Promoting at i32 moves most of the work to the wide path.
    let bits32 = Options::quiet().with_width(Width::Bits32);
    group.bench_function("sequence_60_bits32", |b| {
        b.iter(|| black_box(bernoulli_sequence(black_box(60), &bits32)));
    });

    group.finish();
}

/// Benchmark harmonic numbers.
fn bench_harmonic(c: &mut Criterion) {
    let mut group = c.benchmark_group("harmonic");
    let opts = Options::quiet();

    for n in [46, 47, 200, 1000] {
        group.bench_with_input(BenchmarkId::new("term", n), &n, |b, &n| {
            b.iter(|| black_box(harmonic(black_box(n), &opts)));
        });
    }

    group.finish();
}

/// Benchmark Faulhaber sums and coefficient normalization.
fn bench_faulhaber(c: &mut Criterion) {
    let mut group = c.benchmark_group("faulhaber");
    let opts = Options::quiet();

    for p in [5, 20, 60] {
        group.bench_with_input(BenchmarkId::new("sum_n1000", p), &p, |b, &p| {
            b.iter(|| black_box(faulhaber_sum(1000, black_box(p), &opts)));
        });
    }

    for p in [10, 40] {
        let Ok(coefficients) = faulhaber_coefficients(p, &opts) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("normalize", p), &coefficients.value, |b, c| {
            b.iter(|| black_box(normalize_rationals(c, &opts)));
        });
    }

    group.finish();
}

criterion_group!(
    sequence_benches,
    bench_factorial,
    bench_bernoulli,
    bench_harmonic,
    bench_faulhaber,
);

criterion_main!(sequence_benches);
