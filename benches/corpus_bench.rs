use codemix::complexity::{evaluate_corpus, evaluate_corpus_parallel};
use codemix::ExcludeSet;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const TAGS: [&str; 5] = ["lang1", "lang2", "other", "ne", "lang1"];

fn create_corpus(utterances: usize) -> Vec<Vec<String>> {
    (0..utterances)
        .map(|i| {
            (0..8 + i % 24)
                .map(|j| TAGS[(i * 7 + j * 3 + j / 4) % TAGS.len()].to_string())
                .collect()
        })
        .collect()
}

fn benchmark_corpus_evaluation(c: &mut Criterion) {
    let exclude: ExcludeSet = ["other", "ne"].into_iter().collect();
    let mut group = c.benchmark_group("evaluate_corpus");

    for size in [100, 1_000, 10_000] {
        let corpus = create_corpus(size);
        group.bench_with_input(BenchmarkId::new("sequential", size), &corpus, |b, corpus| {
            b.iter(|| evaluate_corpus(black_box(corpus), &exclude))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &corpus, |b, corpus| {
            b.iter(|| evaluate_corpus_parallel(black_box(corpus), &exclude))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_corpus_evaluation);
criterion_main!(benches);
