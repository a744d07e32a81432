//! Scan and import benchmarks at the maximum file bounds.
//!
//! Scenarios:
//! - Random dictionary with scrambled words planted in noise
//! - Permutation corpus: one word per length, all windows live at once
//! - Early exit on and off
//! - Sequential vs parallel dictionary import

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scrambled_matcher::corpus::CorpusGenerator;
use scrambled_matcher::prelude::*;

const SEED: u64 = 42;

// ============================================================================
// Test Data Generation
// ============================================================================

struct Corpus {
    name: &'static str,
    words: Vec<String>,
    lines: Vec<String>,
}

fn generate_corpora() -> Vec<Corpus> {
    let constraints = Constraints::default();
    let mut generator = CorpusGenerator::new(SEED);

    let words = generator.dictionary(constraints.max_dictionary_words, &constraints);
    let lines = generator.input_lines(&words, constraints.max_input_lines, &constraints);
    let random = Corpus {
        name: "random",
        words,
        lines,
    };

    let (base, words) = generator.permutation_dictionary(&constraints);
    let lines = generator.permutation_lines(&base, constraints.max_input_lines, &constraints);
    let permutation = Corpus {
        name: "permutation",
        words,
        lines,
    };

    vec![random, permutation]
}

fn total_symbols(lines: &[String]) -> u64 {
    lines.iter().map(|line| line.len() as u64).sum()
}

// ============================================================================
// Scan Benchmarks
// ============================================================================

fn bench_scan_all_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan/all_lines");

    for corpus in generate_corpora() {
        let matcher = ScrambledMatcher::from_words(&corpus.words).unwrap();
        group.throughput(Throughput::Bytes(total_symbols(&corpus.lines)));

        for early_exit in [true, false] {
            let options = ScanOptions { early_exit };
            let label = if early_exit { "early_exit" } else { "full" };
            group.bench_with_input(
                BenchmarkId::new(corpus.name, label),
                &corpus.lines,
                |b, lines| {
                    b.iter(|| {
                        let mut total = 0;
                        for line in lines {
                            total += matcher.scan_with(black_box(line), options).unwrap().matches;
                        }
                        total
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_scan_text_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan/text_length");
    let constraints = Constraints::default();
    let mut generator = CorpusGenerator::new(SEED);
    let words = generator.dictionary(constraints.max_dictionary_words, &constraints);
    let matcher = ScrambledMatcher::from_words(&words)
        .unwrap()
        .with_options(ScanOptions { early_exit: false });

    for length in [50, 100, 250, 500] {
        let text = generator.random_word(length);
        group.throughput(Throughput::Bytes(length as u64));
        group.bench_with_input(BenchmarkId::from_parameter(length), &text, |b, text| {
            b.iter(|| matcher.scan(black_box(text)).unwrap())
        });
    }

    group.finish();
}

// ============================================================================
// Import Benchmarks
// ============================================================================

fn bench_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("import");
    let constraints = Constraints::default();
    let words = CorpusGenerator::new(SEED).dictionary(constraints.max_dictionary_words, &constraints);
    group.throughput(Throughput::Elements(words.len() as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| {
            let matcher = ScrambledMatcher::new();
            matcher.add_words(black_box(&words)).unwrap();
            matcher
        })
    });

    group.bench_function("uncached", |b| {
        b.iter(|| {
            let matcher = ScrambledMatcher::with_cache_capacity(0);
            matcher.add_words(black_box(&words)).unwrap();
            matcher
        })
    });

    #[cfg(feature = "parallel")]
    group.bench_function("parallel", |b| {
        b.iter(|| {
            let matcher = ScrambledMatcher::new();
            matcher.par_add_words(black_box(&words)).unwrap();
            matcher
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scan_all_lines,
    bench_scan_text_length,
    bench_import
);
criterion_main!(benches);
