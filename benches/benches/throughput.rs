//! xxhash Comprehensive Criterion Benchmark
//!
//! Latency, throughput, streaming and batch measurements for both variants.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for small inputs (Hash Map keys, IDs, block checksums).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [
        (4, "4B"),
        (15, "15B"),
        (16, "16B"),
        (31, "31B"),
        (32, "32B"),
        (64, "64B"),
        (256, "256B"),
        (KB, "1KB"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("H32", name), &input, |b, data| {
            b.iter(|| xxhash::hash32(black_box(data), 0))
        });
        group.bench_with_input(BenchmarkId::new("H64", name), &input, |b, data| {
            b.iter(|| xxhash::hash64(black_box(data), 0))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK THROUGHPUT
// =============================================================================

/// Throughput once the four-lane loop dominates.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Bulk");
    group.sample_size(50);

    let sizes = [
        (8 * KB, "8KB-L1"),
        (64 * KB, "64KB-L2"),
        (512 * KB, "512KB-L3"),
        (8 * MB, "8MB-RAM"),
        (64 * MB, "64MB-RAM"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("H32", name), &input, |b, data| {
            b.iter(|| xxhash::hash32(black_box(data), 0))
        });
        group.bench_with_input(BenchmarkId::new("H64", name), &input, |b, data| {
            b.iter(|| xxhash::hash64(black_box(data), 0))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: STREAMING
// =============================================================================

/// Cost of incremental updates relative to one-shot hashing.
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Streaming");
    group.sample_size(50);

    let test_cases = [
        (MB, 7, "1MB-7B-chunks"),
        (MB, 64, "1MB-64B-chunks"),
        (MB, 4 * KB, "1MB-4KB-chunks"),
        (16 * MB, 64 * KB, "16MB-64KB-chunks"),
    ];

    for (total_size, chunk_size, name) in test_cases {
        let input = random_input(total_size);
        group.throughput(Throughput::Bytes(total_size as u64));

        group.bench_with_input(
            BenchmarkId::new("H32", name),
            &(input.clone(), chunk_size),
            |b, (data, chunk_sz)| {
                b.iter(|| {
                    let mut state = xxhash::Xxh32::new(0);
                    for chunk in data.chunks(*chunk_sz) {
                        state.update(black_box(chunk));
                    }
                    state.digest()
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("H64", name),
            &(input, chunk_size),
            |b, (data, chunk_sz)| {
                b.iter(|| {
                    let mut state = xxhash::Xxh64::new(0);
                    for chunk in data.chunks(*chunk_sz) {
                        state.update(black_box(chunk));
                    }
                    state.digest()
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: BATCH THREAD SCALING
// =============================================================================

/// Batch hashing of many 4 KB records on 1 to N threads.
#[cfg(feature = "multithread")]
fn bench_batch_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Batch-Scaling");
    group.sample_size(30);

    let records: Vec<Vec<u8>> = (0..4096).map(|_| random_input(4 * KB)).collect();
    group.throughput(Throughput::Bytes((records.len() * 4 * KB) as u64));

    let max_threads = num_cpus::get();
    let thread_counts: Vec<usize> = [1, 2, 4, 8, 16, 32]
        .iter()
        .copied()
        .filter(|&t| t <= max_threads)
        .collect();

    for threads in thread_counts {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{threads}threads")),
            &threads,
            |b, &t| {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(t)
                    .build()
                    .unwrap();
                pool.install(|| b.iter(|| xxhash::hash64_batch(black_box(&records), 0)));
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 5: VERIFICATION
// =============================================================================

/// Constant-time digest comparison on top of hashing.
fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("5-Verify");

    let input = random_input(64 * KB);
    group.throughput(Throughput::Bytes(input.len() as u64));

    let c32 = xxhash::hash32_canonical(&input, 0);
    let c64 = xxhash::hash64_canonical(&input, 0);

    group.bench_function("verify32", |b| {
        b.iter(|| xxhash::verify32(black_box(&input), 0, black_box(&c32)))
    });
    group.bench_function("verify64", |b| {
        b.iter(|| xxhash::verify64(black_box(&input), 0, black_box(&c64)))
    });
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_bulk,
    bench_streaming,
    bench_verify,
);

#[cfg(feature = "multithread")]
criterion_group!(benches_multithread, bench_batch_scaling);

#[cfg(feature = "multithread")]
criterion_main!(benches, benches_multithread);

#[cfg(not(feature = "multithread"))]
criterion_main!(benches);
