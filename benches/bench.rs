//! Criterion benchmarks for Glossa.
//!
//! Covers the two layers that run per indexed value:
//! - Single-strategy text analysis
//! - Multilingual streams across expanding locale sets

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use glossa::analysis::MultilingualAnalyzer;
use glossa::analysis::analyzer::Analyzer;
use glossa::analysis::analyzer::standard::StandardAnalyzer;
use glossa::analysis::resolver::{InMemoryPropertyMetadata, PropertyAnalyzers};
use glossa::config::{AnalysisConfig, SearchParameters};
use glossa::locale::{AnalysisMode, LocaleTag, encode_directive};

/// Generate French-ish values for benchmarking.
fn generate_test_values(count: usize) -> Vec<String> {
    let words = [
        "ceci", "n'est", "pas", "Française", "été", "crème", "brûlée", "garçon", "forêt", "cœur",
        "naïve", "où", "déjà", "élève", "hôtel", "noël", "aujourd'hui", "façade",
    ];

    let mut values = Vec::with_capacity(count);
    for i in 0..count {
        let length = 10 + (i % 40);
        let text: Vec<&str> = (0..length)
            .map(|j| words[(i * 7 + j * 13) % words.len()])
            .collect();
        values.push(text.join(" "));
    }

    values
}

/// Benchmark single-strategy analysis.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let analyzer = StandardAnalyzer::new().unwrap();
    let values = generate_test_values(1000);

    group.bench_function("analyze_single_value", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(black_box(&values[0])).unwrap().collect();
            black_box(tokens)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("analyze_batch_values", |b| {
        b.iter(|| {
            for value in values.iter().take(100) {
                let count = analyzer.analyze(black_box(value)).unwrap().count();
                black_box(count);
            }
        })
    });

    group.finish();
}

/// Benchmark multilingual streams per analysis mode.
fn bench_multilingual(c: &mut Criterion) {
    let mut group = c.benchmark_group("multilingual_stream");

    let metadata = InMemoryPropertyMetadata::new().with_property(
        "cm:title",
        PropertyAnalyzers::new("standard").with_locale("fr".parse().unwrap(), "french"),
    );
    let analyzer =
        MultilingualAnalyzer::with_builtin(Arc::new(metadata), AnalysisConfig::default()).unwrap();
    let locale: LocaleTag = "fr".parse().unwrap();
    let raw = encode_directive(&locale, &generate_test_values(1)[0]);

    for mode in [
        AnalysisMode::Exact,
        AnalysisMode::ExactCountry,
        AnalysisMode::All,
    ] {
        let params = SearchParameters::new().with_analysis_mode(mode);
        group.bench_function(mode.name(), |b| {
            b.iter(|| {
                let stream = analyzer
                    .token_stream_with("cm:title", black_box(&raw), &params)
                    .unwrap();
                black_box(stream.len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_text_analysis, bench_multilingual);
criterion_main!(benches);
