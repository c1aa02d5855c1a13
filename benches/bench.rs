// Criterion benchmarks for Surplus Deals

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use surplus_deals::core::{DealLister, calculate_stats, filter_deals, distance::haversine_distance};
use surplus_deals::models::{Deal, DealCategory, DealFilters, DealStatus, GeoPoint, Location, ReasonTag};
use chrono::Utc;

fn create_deal(id: usize, lat: f64, lng: f64) -> Deal {
    Deal {
        id: format!("deal-{}", id),
        merchant_id: format!("merchant-{}", id % 50),
        merchant: None,
        title: format!("Surplus batch {}", id),
        description: "End-of-day bakery surplus".to_string(),
        category: match id % 3 {
            0 => DealCategory::Food,
            1 => DealCategory::Retail,
            _ => DealCategory::Services,
        },
        reason_tag: ReasonTag::Surplus,
        was_price: 40.0,
        deal_price: if id % 4 == 0 { 0.0 } else { 15.0 },
        qty_total: 10,
        qty_remaining: (id % 5) as u32,
        pickup_start: Utc::now(),
        pickup_end: Utc::now(),
        photo_url: None,
        status: if id % 7 == 0 { DealStatus::Closed } else { DealStatus::Active },
        location: Location {
            lat,
            lng,
            address: "Tel Aviv".to_string(),
        },
        food_safety: None,
        created_at: Utc::now(),
        view_count: None,
        claim_count: None,
    }
}

fn create_deals(count: usize) -> Vec<Deal> {
    (0..count)
        .map(|i| {
            create_deal(
                i,
                32.0 + (i as f64 * 0.0007) % 0.3,
                34.7 + (i as f64 * 0.0011) % 0.3,
            )
        })
        .collect()
}

fn radius_filters() -> DealFilters {
    DealFilters {
        category: None,
        free_only: false,
        radius_km: Some(5.0),
        user_location: Some(GeoPoint::new(32.0853, 34.7818)),
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(32.0853),
                black_box(34.7818),
                black_box(32.0754),
                black_box(34.7749),
            )
        });
    });
}

fn bench_filter_deals(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_deals");
    let filters = radius_filters();

    for size in [100, 1_000, 10_000].iter() {
        let deals = create_deals(*size);

        group.bench_with_input(BenchmarkId::new("radius", size), &deals, |b, deals| {
            b.iter(|| filter_deals(black_box(deals), black_box(&filters), ""));
        });

        group.bench_with_input(BenchmarkId::new("radius_and_search", size), &deals, |b, deals| {
            b.iter(|| filter_deals(black_box(deals), black_box(&filters), black_box("bakery")));
        });
    }

    group.finish();
}

fn bench_listing(c: &mut Criterion) {
    let deals = create_deals(1_000);
    let filters = radius_filters();
    let lister = DealLister::unlimited();

    c.bench_function("list_1000_deals", |b| {
        b.iter(|| lister.list(black_box(&deals), black_box(&filters), ""));
    });

    c.bench_function("stats_1000_deals", |b| {
        b.iter(|| calculate_stats(black_box(&deals)));
    });
}

criterion_group!(benches, bench_haversine_distance, bench_filter_deals, bench_listing);
criterion_main!(benches);
