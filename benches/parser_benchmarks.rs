#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::panic_in_result_fn)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tagtree::test_utils::*;

// Benchmark tokenizing
fn bench_tokenizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tokenizer");

    let inputs = [
        ("people", include_str!("../tests/input/people.xml")),
        ("catalog", include_str!("../tests/input/catalog.xml")),
        ("large", include_str!("../tests/input/large.xml")),
    ];

    for (size, input) in &inputs {
        group.bench_with_input(BenchmarkId::new("tokenize", size), input, |b, input| {
            b.iter(|| tokenize(black_box(input)).unwrap());
        });
    }

    group.finish();
}

// Benchmark tree building from pre-tokenized input
fn bench_tree_builder(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tree Builder");

    let tokens = tokenize(include_str!("../tests/input/large.xml")).unwrap();
    group.bench_function("build_large", |b| {
        b.iter(|| build(black_box(tokens.clone())).unwrap());
    });

    let deep = nested_document(DEFAULT_MAX_DEPTH);
    group.bench_function("parse_deep", |b| {
        b.iter(|| parse_str(black_box(&deep)).unwrap());
    });

    group.finish();
}

// Benchmark queries
fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("Queries");

    let tree = parse_str(include_str!("../tests/input/large.xml")).unwrap();

    group.bench_function("find_all_person", |b| {
        b.iter(|| find_all(black_box(&tree), "person").len());
    });

    group.bench_function("find_first_missing", |b| {
        b.iter(|| find_first(black_box(&tree), "missing").is_none());
    });

    group.finish();
}

criterion_group!(benches, bench_tokenizer, bench_tree_builder, bench_queries);
criterion_main!(benches);
