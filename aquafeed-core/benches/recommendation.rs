//! Composer benchmarks
//!
//! The calculator runs once per pond per feeding round, so latency matters
//! less than keeping the hot path allocation-light. These benches track the
//! single-call cost and the cost of a batch across all species.

use aquafeed_core::{
    factors::environmental_factor, BuiltinSpecies, EnvironmentReading, FeedingCalculator,
    FeedingRequest, SpeciesCatalog, SpeciesTable,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_single_recommendation(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    let calculator = FeedingCalculator::new();

    let cases = [
        ("favourable", EnvironmentReading::new(28.0, 5.0, 7.5)),
        ("hypoxic", EnvironmentReading::new(28.0, 1.0, 7.5)),
        ("all_concerns", EnvironmentReading::new(10.0, 2.0, 5.0)),
    ];

    for (name, reading) in cases.iter() {
        let request = FeedingRequest::new(10_000, 0.5)
            .species("tilapia")
            .environment(*reading);
        group.bench_with_input(BenchmarkId::new("tilapia", name), &request, |b, request| {
            b.iter(|| calculator.recommend(black_box(request)))
        });
    }

    group.finish();
}

fn bench_environment_factor(c: &mut Criterion) {
    let profile = BuiltinSpecies.lookup("grouper");
    let reading = EnvironmentReading::new(26.0, 5.5, 9.5);

    c.bench_function("environmental_factor", |b| {
        b.iter(|| environmental_factor(black_box(&reading), black_box(profile)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let table = SpeciesTable::builtin();
    let calculator = FeedingCalculator::with_catalog(&table);

    let requests: Vec<FeedingRequest> = table
        .keys()
        .flat_map(|key| {
            (0..20).map(move |i| {
                FeedingRequest::new(1000 + i * 250, 0.4)
                    .species(key)
                    .environment(EnvironmentReading::new(18.0 + i as f64 * 0.6, 3.0 + i as f64 * 0.25, 7.5))
            })
        })
        .collect();

    group.throughput(Throughput::Elements(requests.len() as u64));
    group.bench_function("all_species", |b| {
        b.iter(|| {
            requests
                .iter()
                .map(|request| calculator.recommend(black_box(request)).amount)
                .sum::<f64>()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_recommendation,
    bench_environment_factor,
    bench_batch
);
criterion_main!(benches);
