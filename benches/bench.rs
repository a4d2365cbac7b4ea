//! Criterion benchmarks for the porter2 stemmer.
//!
//! Covers single-word stemming, parallel batch stemming and the
//! token filter pipeline.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use porter2::analysis::{Filter, IntoTokenStream, StemFilter, StopFilter, Token, TokenStream};
use porter2::english::{EnglishStemmer, r1r2};
use std::hint::black_box;

/// Generate a vocabulary of inflected words for benchmarking.
fn generate_test_words(count: usize) -> Vec<String> {
    let words = vec![
        "running",
        "generalities",
        "hopefulness",
        "consolingly",
        "knightly",
        "communication",
        "dying",
        "skies",
        "proceeding",
        "sensational",
        "relativity",
        "formalize",
        "electricity",
        "adjustment",
        "controlling",
        "crepuscular",
        "the",
        "news",
        "saying",
        "possessive's",
        "irrelevant",
        "abundantly",
        "argument",
        "replacement",
    ];

    (0..count)
        .map(|i| words[i % words.len()].to_string())
        .collect()
}

fn token_stream(words: &[String]) -> TokenStream {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| Token::new(word.clone(), i))
        .collect::<Vec<_>>()
        .into_token_stream()
}

/// Benchmark single-word stemming.
fn bench_stem(c: &mut Criterion) {
    let mut group = c.benchmark_group("stem");

    let stemmer = EnglishStemmer::new();
    let words = generate_test_words(1000);

    group.bench_function("stem_single_word", |b| {
        b.iter(|| black_box(stemmer.stem(black_box("generalities"))))
    });

    group.bench_function("r1r2", |b| b.iter(|| black_box(r1r2(black_box("beautiful")))));

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("stem_sequential", |b| {
        b.iter(|| {
            for word in &words {
                black_box(stemmer.stem(black_box(word)));
            }
        })
    });

    group.finish();
}

/// Benchmark parallel batch stemming at several sizes.
fn bench_stem_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("stem_batch");
    group.sample_size(20);

    let stemmer = EnglishStemmer::new();
    for size in [100, 1_000, 10_000] {
        let words = generate_test_words(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &words, |b, words| {
            b.iter(|| black_box(stemmer.stem_batch(black_box(words))))
        });
    }

    group.finish();
}

/// Benchmark the stop and stem filters over a token stream.
fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters");

    let stop = StopFilter::new();
    let stem = StemFilter::new();
    let words = generate_test_words(1000);

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("stop_then_stem", |b| {
        b.iter(|| {
            let tokens = stop
                .filter(token_stream(&words))
                .and_then(|tokens| stem.filter(tokens));
            if let Ok(tokens) = tokens {
                black_box(tokens.count());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_stem, bench_stem_batch, bench_filters);

criterion_main!(benches);
