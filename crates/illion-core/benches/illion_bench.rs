//! Benchmarks for illion naming on random huge indices.
//!
//! Compares:
//! - sequential: single pass over every triple
//! - parallel: chunked assembly on the rayon pool
//!
//! Run with: cargo bench -p illion-core --bench illion_bench
//! Set RUST_LOG=illion_core=debug to see the chunk plans.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use illion_core::{AssemblyMode, GeneratorConfig, IllionGenerator, TripleCache};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random decimal digits (deterministic for reproducibility).
fn random_digits(len: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}

fn bench_cache_build(c: &mut Criterion) {
    c.bench_function("triple_cache_build", |b| b.iter(TripleCache::new));
}

fn bench_assembly_modes(c: &mut Criterion) {
    init_tracing();
    let illions = IllionGenerator::new(GeneratorConfig::default());

    let mut group = c.benchmark_group("illion_name");
    for len in [1_000usize, 10_000, 100_000, 1_000_000, 10_000_000] {
        let digits = random_digits(len, len as u64);
        group.throughput(Throughput::Bytes(len as u64));

        if len >= 1_000_000 {
            group.sample_size(10);
        }

        group.bench_with_input(BenchmarkId::new("sequential", len), &digits, |b, d| {
            b.iter(|| illions.name_with_mode(black_box(d), AssemblyMode::Sequential))
        });
        group.bench_with_input(BenchmarkId::new("parallel", len), &digits, |b, d| {
            b.iter(|| illions.name_with_mode(black_box(d), AssemblyMode::Parallel))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cache_build, bench_assembly_modes);
criterion_main!(benches);
