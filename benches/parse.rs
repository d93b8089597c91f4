#![allow(clippy::unwrap_used)]

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use cbor_tree::{parse, parse_with_views, Encoder};

fn sample_small() -> Vec<u8> {
    vec![0xa1, 0x61, 0x61, 0x01] // {"a":1}
}

fn sample_medium() -> Vec<u8> {
    let mut e = Encoder::new();
    e.map(64);
    for i in 0..64_i64 {
        e.text(&format!("k{i:03}"))
            .array(3)
            .int(-i)
            .bytes(&[0x5a; 32])
            .double(1.0 / (i as f64 + 1.0));
    }
    e.into_vec()
}

fn sample_indefinite() -> Vec<u8> {
    let mut bytes = vec![0x9f];
    for _ in 0..256 {
        bytes.extend_from_slice(&[0x5f, 0x42, 0x01, 0x02, 0x41, 0x03, 0xff]);
    }
    bytes.push(0xff);
    bytes
}

fn bench_parse(c: &mut Criterion) {
    let small = sample_small();
    c.bench_function("parse_small", |b| {
        b.iter(|| black_box(parse(black_box(&small)).unwrap()))
    });

    let medium = sample_medium();
    c.bench_function("parse_medium", |b| {
        b.iter(|| black_box(parse(black_box(&medium)).unwrap()))
    });
    c.bench_function("parse_with_views_medium", |b| {
        b.iter(|| black_box(parse_with_views(black_box(&medium)).unwrap()))
    });

    let indefinite = sample_indefinite();
    c.bench_function("parse_indefinite_chunks", |b| {
        b.iter(|| black_box(parse(black_box(&indefinite)).unwrap()))
    });

    let (tree, _) = parse(&medium).unwrap();
    c.bench_function("encode_medium", |b| b.iter(|| black_box(tree.encode())));
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
