use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use txn_merkle::{merkle_root, verify, MerkleTree};

fn transactions(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("txn{i}")).collect()
}

fn bench_merkle_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("merkle_root");
    for n in [4, 1024, 65_536] {
        let txns = transactions(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &txns, |b, txns| {
            b.iter(|| merkle_root(black_box(txns)))
        });
    }
    group.finish();
}

fn bench_build_only(c: &mut Criterion) {
    let txns = transactions(65_536);
    c.bench_function("build_64k", |b| {
        b.iter(|| MerkleTree::from_transactions(black_box(&txns)))
    });
}

fn bench_verify(c: &mut Criterion) {
    let txns = transactions(1024);
    let root = merkle_root(&txns).map(|h| h.to_hex()).unwrap_or_default();
    c.bench_function("verify_1k", |b| b.iter(|| verify(black_box(&root), &txns)));
}

criterion_group!(benches, bench_merkle_root, bench_build_only, bench_verify);
criterion_main!(benches);
