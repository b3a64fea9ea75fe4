//! Parallel slice-algorithm benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of the stable sort (10K to 1M elements)
//! - Partition under balanced and skewed predicates
//! - Early-terminating find with near and far matches

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

use fastslice::prelude::*;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

fn random_doubles(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen::<f64>()).collect()
}

fn random_ints(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(0..1_000_000)).collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_stable_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("stable_sort");
    for size in [10_000usize, 100_000, 1_000_000] {
        let data = random_doubles(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter_batched(
                || data.clone(),
                |mut v| {
                    stable_sort_by(&mut v, |a: &f64, b: &f64| a.partial_cmp(b).unwrap()).unwrap();
                    black_box(v)
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    let size = 1_000_000usize;
    let data = random_ints(size, 7);
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("balanced", |b| {
        b.iter_batched(
            || data.clone(),
            |mut v| black_box(partition(&mut v, |x| x % 2 == 0).unwrap()),
            criterion::BatchSize::LargeInput,
        )
    });
    group.bench_function("skewed", |b| {
        b.iter_batched(
            || data.clone(),
            |mut v| black_box(partition(&mut v, |x| *x < 100_000).unwrap()),
            criterion::BatchSize::LargeInput,
        )
    });
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    let size = 1_000_000usize;
    let mut data = vec![0i64; size];
    for (i, slot) in data.iter_mut().enumerate() {
        *slot = i as i64;
    }

    for (name, needle) in [("near", 1_000i64), ("far", (size - 1) as i64)] {
        group.bench_with_input(BenchmarkId::new("tree", name), &needle, |b, needle| {
            b.iter(|| black_box(find(&data, needle).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("pruned", name), &needle, |b, needle| {
            b.iter(|| black_box(find_pruned(&data, needle).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_stable_sort, bench_partition, bench_find);
criterion_main!(benches);
