//! Criterion benchmarks for unidoc.
//!
//! Covers document indexing and the term dictionary variants:
//! - prefix and range enumeration over the sorted term cache
//! - regular expression enumeration
//! - fuzzy enumeration, edit distance versus Levenshtein automaton

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use unidoc::config::{FuzzyStrategy, IndexConfig};
use unidoc::document::{CompositeTextField, Document};
use unidoc::fuzzy::EditDistanceScratch;
use unidoc::index::SingleDocIndex;

/// Generate a body of text for benchmarking.
fn generate_body(words: usize) -> String {
    let vocabulary = [
        "liquid", "pressure", "boiling", "container", "temperature", "water", "vessel",
        "expansion", "gas", "chamber", "rupture", "atmospheric", "heat", "explosion", "space",
        "sealed", "vented", "equilibrium", "substance", "room", "rapid", "volume", "mass",
        "damage", "industrial", "oxygen", "engine", "cooling", "system", "modern",
    ];

    (0..words)
        .map(|i| {
            let word = vocabulary[i % vocabulary.len()];
            format!("{word}{}", i % 97)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn build_document(body: &str) -> Document {
    Document::builder("bench")
        .add_text("title", "Bleve")
        .add_text("body", body)
        .add_composite(CompositeTextField::all())
        .build()
}

fn bench_index(config: IndexConfig) -> SingleDocIndex {
    let mut index = SingleDocIndex::new(config);
    index.update(build_document(&generate_body(2000))).unwrap();
    index
}

/// Benchmark document analysis.
fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");
    let body = generate_body(2000);

    group.throughput(Throughput::Elements(2000));
    group.bench_function("update_document", |b| {
        let mut index = SingleDocIndex::default();
        b.iter(|| {
            index.update(build_document(black_box(&body))).unwrap();
        })
    });

    group.finish();
}

/// Benchmark prefix and range dictionaries.
fn bench_field_dict(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_dict");
    let mut index = bench_index(IndexConfig::default());

    group.bench_function("field_dict_prefix", |b| {
        b.iter(|| {
            let mut reader = index.reader();
            let mut dict = reader.field_dict_prefix("body", black_box("b")).unwrap();
            while let Some(entry) = dict.next().unwrap() {
                black_box(entry);
            }
        })
    });

    group.bench_function("field_dict_range", |b| {
        b.iter(|| {
            let mut reader = index.reader();
            let mut dict = reader
                .field_dict_range("body", black_box("c"), black_box("r"))
                .unwrap();
            while let Some(entry) = dict.next().unwrap() {
                black_box(entry);
            }
        })
    });

    group.bench_function("field_dict_regexp", |b| {
        b.iter(|| {
            let mut reader = index.reader();
            let mut dict = reader.field_dict_regexp("body", black_box("li.*")).unwrap();
            while let Some(entry) = dict.next().unwrap() {
                black_box(entry);
            }
        })
    });

    group.finish();
}

/// Benchmark fuzzy dictionaries with both strategies.
fn bench_fuzzy(c: &mut Criterion) {
    let mut group = c.benchmark_group("fuzzy");

    for (name, strategy) in [
        ("edit_distance", FuzzyStrategy::EditDistance),
        ("automaton", FuzzyStrategy::Automaton),
    ] {
        let mut index = bench_index(IndexConfig::default().fuzzy_strategy(strategy));
        group.bench_function(format!("field_dict_fuzzy_{name}"), |b| {
            b.iter(|| {
                let mut reader = index.reader();
                let mut dict = reader
                    .field_dict_fuzzy("body", black_box("gas1"), 2, "")
                    .unwrap();
                while let Some(entry) = dict.next().unwrap() {
                    black_box(entry);
                }
            })
        });
    }

    let candidates = generate_body(2000);
    let candidates: Vec<&str> = candidates.split(' ').collect();
    group.throughput(Throughput::Elements(candidates.len() as u64));
    group.bench_function("edit_distance_scratch", |b| {
        let mut scratch = EditDistanceScratch::with_capacity(64);
        b.iter(|| {
            for candidate in &candidates {
                black_box(scratch.is_within("pressure1", candidate, 2));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_update, bench_field_dict, bench_fuzzy);
criterion_main!(benches);
