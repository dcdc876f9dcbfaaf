//! Minimum-hash scan benchmarks
//!
//! Write and Read cost is dominated by one hash per nonce in the scanned
//! range, so throughput is reported in nonces.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench scan_benchmarks
//! cargo bench --bench scan_benchmarks -- "store/write"
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tokenmngr_engine::{min_hash_scan, Candidate, TokenStore};

const RANGE_SIZES: [u64; 3] = [1_000, 10_000, 100_000];

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    for size in RANGE_SIZES {
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("min_hash", size), &size, |b, &size| {
            b.iter(|| min_hash_scan(black_box("bench"), 0..size, Candidate::unhashed(0)))
        });
    }
    group.finish();
}

fn bench_store(c: &mut Criterion) {
    let store = TokenStore::new();
    store.create("bench").unwrap();

    let mut group = c.benchmark_group("store");
    for size in RANGE_SIZES {
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("write", size), &size, |b, &size| {
            b.iter(|| store.write("bench", black_box("bench"), 0, size, size).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("read", size), &size, |b, &size| {
            store.write("bench", "bench", 0, 0, size).unwrap();
            b.iter(|| store.read(black_box("bench")).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scan, bench_store);
criterion_main!(benches);
