// Criterion benchmarks for dispatch-algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;

use dispatch_algo::core::{calculate_match_score, haversine_distance, Ranker};
use dispatch_algo::models::{
    EmergencyType, Hospital, Incident, RouteEstimate, RouteSource, ScoringWeights,
};
use dispatch_algo::services::FallbackRouter;

fn create_hospital(id: u32) -> Hospital {
    Hospital {
        id,
        name: format!("Hospital {}", id),
        lat: 12.9716 + (id as f64 * 0.003) % 0.5,
        lng: 77.5946 + (id as f64 * 0.002) % 0.5,
        icu_beds: id % 6,
        general_beds: 10 + id % 20,
        affordability_tier: (id % 3 + 1) as u8,
        rating: 2.0 + (id % 4) as f64 * 0.75,
        has_cardiology: id % 2 == 0,
        has_trauma: id % 3 == 0,
        has_neurology: id % 4 == 0,
        has_pulmonology: id % 5 == 0,
    }
}

fn create_incident() -> Incident {
    Incident {
        emergency_type: EmergencyType::Cardiac,
        lat: 12.9716,
        lng: 77.5946,
        affordability_pref: Some(2),
        heart_rate: None,
        spo2: None,
        bp_sys: None,
        bp_dia: None,
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(12.9716),
                black_box(77.5946),
                black_box(13.0827),
                black_box(80.2707),
            )
        });
    });
}

fn bench_single_candidate_scoring(c: &mut Criterion) {
    let hospital = create_hospital(2);
    let incident = create_incident();
    let weights = ScoringWeights::default();
    let estimate = RouteEstimate {
        distance_km: 8.2,
        duration_min: 14.0,
        source: RouteSource::Provider,
    };

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| {
            calculate_match_score(
                black_box(&hospital),
                black_box(&incident),
                black_box(&estimate),
                black_box(&weights),
            )
        });
    });
}

fn bench_ranking(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let ranker = Ranker::new(ScoringWeights::default(), Arc::new(FallbackRouter::offline()));
    let incident = create_incident();

    let mut group = c.benchmark_group("ranking");

    for roster_size in [5u32, 20, 50, 200].iter() {
        let hospitals: Vec<Hospital> = (0..*roster_size).map(create_hospital).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", roster_size),
            roster_size,
            |b, _| {
                b.iter(|| {
                    rt.block_on(ranker.rank(black_box(&incident), black_box(hospitals.clone())))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_single_candidate_scoring,
    bench_ranking
);

criterion_main!(benches);
