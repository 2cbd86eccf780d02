//! Implementation Comparison Benchmark
//!
//! Compares this crate against an independent xxHash implementation and
//! against general-purpose hashes, at sizes that exercise the tail path,
//! the lane loop and bulk throughput.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use sha2::Digest;
use std::hint::black_box;
use xxhash::kernels;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_implementations(c: &mut Criterion) {
    let mut group = c.benchmark_group("xxhash Implementations");

    // Scenarios:
    // - Small (7B): tail-only path
    // - Medium (1KB): L1 cache hot-path
    // - Large (256KB): lane loop throughput
    let sizes = [7, 1024, 256 * 1024];

    for size in sizes {
        let input = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        // 1. Public API
        group.bench_function(format!("H32 - {size} bytes"), |b| {
            b.iter(|| xxhash::hash32(black_box(&input), 0));
        });
        group.bench_function(format!("H64 - {size} bytes"), |b| {
            b.iter(|| xxhash::hash64(black_box(&input), 0));
        });

        // 2. Kernel entry points (no wrapper)
        group.bench_function(format!("H64 kernel - {size} bytes"), |b| {
            b.iter(|| kernels::xxh64::oneshot(black_box(&input), 0));
        });

        // 3. Independent implementation of the same functions
        group.bench_function(format!("xxhash-rust xxh32 - {size} bytes"), |b| {
            b.iter(|| xxhash_rust::xxh32::xxh32(black_box(&input), 0));
        });
        group.bench_function(format!("xxhash-rust xxh64 - {size} bytes"), |b| {
            b.iter(|| xxhash_rust::xxh64::xxh64(black_box(&input), 0));
        });

        // 4. Baselines from other hash families
        group.bench_function(format!("xxh3 - {size} bytes"), |b| {
            b.iter(|| xxhash_rust::xxh3::xxh3_64(black_box(&input)));
        });
        group.bench_function(format!("BLAKE3 - {size} bytes"), |b| {
            b.iter(|| blake3::hash(black_box(&input)));
        });
        group.bench_function(format!("SHA-256 - {size} bytes"), |b| {
            b.iter(|| sha2::Sha256::digest(black_box(&input)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_implementations);
criterion_main!(benches);
