//! Performance benchmarks for inflection and locale resolution
//!
//! Run with: cargo bench --bench inflection_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use flexion_core::{load_locale, simplify_locale, LocaleRegistry, DEFAULT_NAMESPACE};
use std::hint::black_box;

const WORDS: &[(&str, &[&str])] = &[
    (
        "en",
        &["night", "child", "mother-in-law", "criterion", "dog's", "knife", "city", "fish"],
    ),
    ("fr", &["nuit", "cheval", "bateau", "travail", "arc-en-ciel", "prix"]),
    ("de", &["Tag", "Kind", "Zeitung", "Lehrerin", "Mädchen", "Auto"]),
    ("es", &["casa", "canción", "luz", "árbol", "autobús", "lunes"]),
];

/// Plural then singular over a small vocabulary per locale
fn bench_inflection(c: &mut Criterion) {
    let mut group = c.benchmark_group("inflection");

    for (language, words) in WORDS {
        let bundle = load_locale(language, DEFAULT_NAMESPACE).unwrap();
        group.throughput(Throughput::Elements(words.len() as u64 * 2));

        group.bench_with_input(BenchmarkId::new("round_trip", language), words, |b, words| {
            b.iter(|| {
                for word in words.iter() {
                    let plural = bundle.pluralize(black_box(word));
                    black_box(bundle.singularize(&plural));
                }
            });
        });
    }

    group.finish();
}

/// Cached lookups versus first-time compilation
fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    let registry = LocaleRegistry::embedded();
    registry.load("en", DEFAULT_NAMESPACE).unwrap();
    group.bench_function("cached_fallback", |b| {
        b.iter(|| registry.load(black_box("en_US.UTF-8@euro"), DEFAULT_NAMESPACE).unwrap());
    });

    group.bench_function("cold_load", |b| {
        b.iter(|| {
            let registry = LocaleRegistry::embedded();
            registry.load(black_box("en"), DEFAULT_NAMESPACE).unwrap()
        });
    });

    group.bench_function("simplify", |b| {
        b.iter(|| simplify_locale(black_box("fr_FR.UTF-8@latin")));
    });

    group.finish();
}

criterion_group!(benches, bench_inflection, bench_registry);
criterion_main!(benches);
