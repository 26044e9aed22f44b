//! Trie Shell Benchmarks
//!
//! This module contains benchmarks for the points trie, implemented using
//! the Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, SamplingMode,
    Throughput,
};
use std::time::Duration;

use trie_shell_lib::data_structures::{Points, PointsTrie};

/// Deterministic lowercase keys of varying length with shared prefixes.
fn generate_keys(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let mut n = i;
            let mut key = String::new();
            loop {
                key.push(char::from(b'a' + (n % 26) as u8));
                n /= 26;
                if n == 0 {
                    break;
                }
            }
            key
        })
        .collect()
}

fn filled_trie(keys: &[String]) -> PointsTrie {
    let mut trie = PointsTrie::new();
    for (i, key) in keys.iter().enumerate() {
        trie.insert(key, i as Points);
    }
    trie
}

/// Benchmark the points trie operations
fn bench_points_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("points_trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1000, 10_000].iter() {
        let keys = generate_keys(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("insert", size), &keys, |b, keys| {
            b.iter(|| black_box(filled_trie(keys)));
        });

        let trie = filled_trie(&keys);
        group.bench_with_input(BenchmarkId::new("lookup", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(trie.lookup(key));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("delete_all", size), &keys, |b, keys| {
            b.iter_batched(
                || filled_trie(keys),
                |mut trie| {
                    for key in keys {
                        black_box(trie.delete(key));
                    }
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("serialize", size), &trie, |b, trie| {
            b.iter(|| black_box(trie.serialize()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_points_trie);
criterion_main!(benches);
