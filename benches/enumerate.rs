//! Model enumeration benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench enumerate
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use proplogic::ast::Sentence;
use proplogic::lexer::lex;
use proplogic::parser::parse;

/// `(x1 ==> x2) and (x2 ==> x3) and ...` over `n` variables.
fn implication_chain(n: usize) -> String {
    (1..n)
        .map(|i| format!("(x{} ==> x{})", i, i + 1))
        .collect::<Vec<_>>()
        .join(" and ")
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for n in [4, 16, 64] {
        let text = implication_chain(n);
        group.throughput(Throughput::Elements(lex(&text).len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &text, |b, text| {
            b.iter(|| parse(&lex(text)).unwrap())
        });
    }
    group.finish();
}

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_models");
    for n in [4, 8, 12] {
        let sentence: Sentence = implication_chain(n).parse().unwrap();
        group.throughput(Throughput::Elements(1 << n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &sentence, |b, s| {
            b.iter(|| s.enumerate_models())
        });
    }
    group.finish();
}

fn bench_entails(c: &mut Criterion) {
    let a: Sentence = implication_chain(10).parse().unwrap();
    let b: Sentence = "x1 ==> x10".parse().unwrap();
    c.bench_function("entails_chain_10", |bench| bench.iter(|| a.entails(&b)));
}

criterion_group!(benches, bench_parse, bench_enumerate, bench_entails);
criterion_main!(benches);
