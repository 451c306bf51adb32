// ABOUTME: Criterion benchmarks for fuzzy body-state classification
// ABOUTME: Measures fuzzification, single classification, explanation and parallel batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the body-state classifier.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dietexercise_companion::{FuzzyClassifier, Measurement, Sex};

/// Deterministic spread of measurements across the supported form ranges
#[allow(clippy::cast_precision_loss)]
fn generate_measurements(count: usize) -> Vec<Measurement> {
    (0..count)
        .map(|index| {
            let height = 130.0 + ((index * 37) % 90) as f64 + 0.25;
            let weight = 30.0 + ((index * 53) % 120) as f64 + 0.5;
            let sex = if index % 2 == 0 { Sex::Male } else { Sex::Female };
            Measurement::new(height, weight, sex)
        })
        .collect()
}

fn bench_fuzzify(c: &mut Criterion) {
    let classifier = FuzzyClassifier::default();
    let mut group = c.benchmark_group("fuzzify");

    group.bench_function("height", |b| {
        b.iter(|| classifier.fuzzify_height(black_box(171.3), black_box(Sex::Male)));
    });
    group.bench_function("weight", |b| {
        b.iter(|| classifier.fuzzify_weight(black_box(81.7), black_box(Sex::Female)));
    });

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let classifier = FuzzyClassifier::default();
    let measurement = Measurement::new(175.0, 80.0, Sex::Male);
    let mut group = c.benchmark_group("classify");

    group.bench_function("single", |b| {
        b.iter(|| classifier.classify_measurement(black_box(&measurement)));
    });
    group.bench_function("explain", |b| {
        b.iter(|| classifier.explain(black_box(&measurement)));
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let classifier = FuzzyClassifier::default();
    let mut group = c.benchmark_group("batch");

    for size in [100_usize, 1_000, 10_000] {
        let measurements = generate_measurements(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::new("parallel", size),
            &measurements,
            |b, measurements| {
                b.iter(|| classifier.classify_batch(black_box(measurements)));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("sequential", size),
            &measurements,
            |b, measurements| {
                b.iter(|| {
                    measurements
                        .iter()
                        .map(|m| classifier.classify_measurement(m))
                        .collect::<Vec<_>>()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_fuzzify, bench_classify, bench_batch);
criterion_main!(benches);
