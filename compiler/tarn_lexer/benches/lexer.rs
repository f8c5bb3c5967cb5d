//! Lexer benchmarks for Tarn.
//!
//! Measures tokenization throughput across input sizes and token mixes.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tarn_ir::ResetPolicy;
use tarn_lexer::Lexer;

/// Plain declarations: identifiers, keywords, punctuation, integers.
fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| format!("func f{i}(x: i32) -> i32 {{\n    return x * {i} + 0x{i:X}\n}}\n"))
        .collect()
}

/// Literal-heavy source: escapes, interpolation, raw strings, comments.
fn generate_n_literals(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "// entry {i}\nlet s{i} = $\"name: {{n{i}}}\\t{{1.5e{i}}}\"\nlet r{i} = \"\"\"\n    line {i}\n      nested\n    \"\"\"\n"
            )
        })
        .collect()
}

fn bench_small(c: &mut Criterion) {
    let source = "func add(a: i32, b: i32) -> i32 { return a + b }";
    let mut lexer = Lexer::new();
    let mut out = lexer.output();

    c.bench_function("lexer/simple_function", |b| {
        b.iter(|| {
            out.reset(ResetPolicy::KeepCommitted);
            black_box(lexer.run_str(&mut out, "bench.tarn", black_box(source)));
        });
    });
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/scaling");

    for (name, generate) in [
        ("functions", generate_n_functions as fn(usize) -> String),
        ("literals", generate_n_literals),
    ] {
        for size in [10, 100, 1000] {
            let source = generate(size);
            let mut lexer = Lexer::new();
            let mut out = lexer.output();
            group.throughput(Throughput::Bytes(source.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &source, |b, src| {
                b.iter(|| {
                    out.reset(ResetPolicy::KeepCommitted);
                    black_box(lexer.run_str(&mut out, "bench.tarn", src));
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_small, bench_scaling);
criterion_main!(benches);
