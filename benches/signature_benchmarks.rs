//! Micro-benchmarks for signature encoding and the signature cache.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scrambled_matcher::prelude::*;
use scrambled_matcher::signature::interior_signature;

fn words() -> Vec<(&'static str, &'static str)> {
    vec![
        ("short", "ab"),
        ("medium", "scrambled"),
        ("long", "abcdefghijklmnopqrst"),
    ]
}

fn bench_interior_signature(c: &mut Criterion) {
    let mut group = c.benchmark_group("signature/interior");

    for (name, word) in words() {
        group.bench_with_input(BenchmarkId::from_parameter(name), word, |b, word| {
            b.iter(|| interior_signature(black_box(word)).unwrap())
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let text = "aapxjdnrbtvldptfzbbdbbzxtndrvjblnzjfpvhdhhpxjdnrbt".repeat(10);
    c.bench_function("signature/encode_500", |b| {
        b.iter(|| Signature::encode(black_box(&text)).unwrap())
    });
}

fn bench_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("signature/cache");

    for (name, word) in words() {
        let cache = SignatureCache::new(16);
        cache.get_or_encode(word).unwrap();
        group.bench_with_input(BenchmarkId::new("warm", name), word, |b, word| {
            b.iter(|| cache.get_or_encode(black_box(word)).unwrap())
        });

        let disabled = SignatureCache::disabled();
        group.bench_with_input(BenchmarkId::new("disabled", name), word, |b, word| {
            b.iter(|| disabled.get_or_encode(black_box(word)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_interior_signature, bench_encode, bench_cache);
criterion_main!(benches);
