//! Scanner Benchmarks
//!
//! Run with: `cargo bench --package yatl-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use yatl_lex::tokenize;
use yatl_util::Handler;

fn token_count(source: &str) -> usize {
    let mut handler = Handler::new();
    tokenize(source, &mut handler).len()
}

fn bench_scanner_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");

    let source = "(1 + 2) * 3 >= 9;";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("expression", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.bench_function("operators", |b| {
        b.iter(|| token_count(black_box("! != = == < <= > >= / * + -")))
    });

    group.finish();
}

fn bench_scanner_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner_large");

    let line = "{ (12.5 + 3) / 4 != \"text\"; } // trailing comment\n";
    let source = line.repeat(1000);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("mixed_1000_lines", |b| {
        b.iter(|| token_count(black_box(&source)))
    });

    let strings = "\"a string that goes on for a while\"\n".repeat(1000);
    group.bench_function("strings_1000", |b| {
        b.iter(|| token_count(black_box(&strings)))
    });

    let errors = "@#$%^&~`\n".repeat(500);
    group.bench_function("error_recovery_500_lines", |b| {
        b.iter(|| token_count(black_box(&errors)))
    });

    group.finish();
}

criterion_group!(benches, bench_scanner_simple, bench_scanner_large);
criterion_main!(benches);
