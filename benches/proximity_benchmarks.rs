use chrono::{TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use nearby::{
    Category, FilterCriteria, GeoPoint, Item, ItemType, MemoryItemStore, NearbySearch,
    PredicateBuilder, bounding_box, distance_km,
};
use std::sync::Arc;
use uuid::Uuid;

fn grid(n: usize) -> Vec<Item> {
    let ts = Utc
        .with_ymd_and_hms(2025, 3, 1, 10, 0, 0)
        .unwrap()
        .fixed_offset();
    (0..n)
        .map(|i| {
            let row = (i / 100) as f64;
            let col = (i % 100) as f64;
            Item {
                id: Uuid::new_v4(),
                item_type: if i % 2 == 0 { ItemType::Event } else { ItemType::Deal },
                title: format!("listing {}", i),
                description: "benchmark row".to_string(),
                category: Category::ALL[i % Category::ALL.len()],
                start_date: ts,
                end_date: ts,
                address: String::new(),
                location: GeoPoint::new(12.5 + row * 0.01, 77.2 + col * 0.01),
                image: None,
                owner: Uuid::nil(),
                created_at: ts,
                updated_at: ts,
                count: 0,
            }
        })
        .collect()
}

fn benchmark_geo_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("geo_math");
    let a = GeoPoint::new(12.9767, 77.5713);
    let b = GeoPoint::new(13.05, 77.77);

    group.bench_function("haversine", |bench| {
        bench.iter(|| distance_km(black_box(&a), black_box(&b)))
    });

    group.bench_function("bounding_box", |bench| {
        bench.iter(|| bounding_box(black_box(&a), black_box(20.0)).unwrap())
    });

    group.bench_function("build_predicates", |bench| {
        let criteria = FilterCriteria::new()
            .category(Category::Food)
            .item_type(ItemType::Event)
            .search("listing")
            .near(a, 20.0);
        bench.iter(|| PredicateBuilder::build(black_box(&criteria)).unwrap())
    });

    group.finish();
}

fn benchmark_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let runtime = tokio::runtime::Runtime::new().unwrap();

    for &size in &[1_000usize, 10_000] {
        let search = NearbySearch::builder()
            .store(Arc::new(MemoryItemStore::with_items(grid(size))))
            .build()
            .unwrap();

        for &radius in &[5.0, 20.0] {
            let criteria = FilterCriteria::new().near(GeoPoint::new(12.9767, 77.5713), radius);
            group.bench_with_input(
                BenchmarkId::new(format!("radius_{}km", radius), size),
                &criteria,
                |bench, criteria| {
                    bench.iter(|| runtime.block_on(search.search(criteria.clone())).unwrap())
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_geo_math, benchmark_search);
criterion_main!(benches);
