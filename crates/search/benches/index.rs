//! Benchmarks for index construction, prefix search and recommendations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use venue_index::{build_venue_index, recommend_all, SimilarityRecommender, Venue};

const CITIES: &[&str] = &["Pokhara", "Kathmandu", "Lalitpur", "Bhaktapur", "Chitwan"];
const CATEGORIES: &[&str] = &["WEDDING", "PARTY", "CONFERENCE", "CONCERT", "MEETING"];
const SERVICES: &[&str] = &["Catering", "Decoration", "DJ", "Parking", "Photography"];

fn create_test_pool(count: usize) -> Vec<Venue> {
    (0..count)
        .map(|i| {
            Venue::new(format!("venue-{i}"), format!("Venue Hall {i}"))
                .with_city(CITIES[i % CITIES.len()])
                .with_province("Province")
                .with_categories([
                    CATEGORIES[i % CATEGORIES.len()],
                    CATEGORIES[(i / 3) % CATEGORIES.len()],
                ])
                .with_service(SERVICES[i % SERVICES.len()])
                .with_service(SERVICES[(i / 2) % SERVICES.len()])
        })
        .collect()
}

fn bench_build_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_index");

    for size in [10, 100, 1000].iter() {
        let pool = create_test_pool(*size);
        group.bench_with_input(BenchmarkId::new("venues", size), size, |b, _| {
            b.iter(|| build_venue_index(black_box(&pool)))
        });
    }

    group.finish();
}

fn bench_prefix_search(c: &mut Criterion) {
    let pool = create_test_pool(1000);
    let index = build_venue_index(&pool);

    let mut group = c.benchmark_group("prefix_search");

    group.bench_function("short_prefix", |b| b.iter(|| index.search(black_box("v"))));
    group.bench_function("long_prefix", |b| b.iter(|| index.search(black_box("venue hall 99"))));
    group.bench_function("miss", |b| b.iter(|| index.search(black_box("zzz"))));

    group.finish();
}

fn bench_recommendations(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommendations");

    for size in [10, 100, 1000].iter() {
        let pool = create_test_pool(*size);
        group.bench_with_input(BenchmarkId::new("single", size), size, |b, _| {
            b.iter(|| {
                SimilarityRecommender::find_similar_venues(
                    black_box(&pool[0]),
                    black_box(&pool),
                    3,
                )
            })
        });
    }

    let pool = create_test_pool(100);
    group.bench_function("recommend_all_100", |b| b.iter(|| recommend_all(black_box(&pool), 3)));

    group.finish();
}

criterion_group!(benches, bench_build_index, bench_prefix_search, bench_recommendations);
criterion_main!(benches);
