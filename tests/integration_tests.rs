// Integration tests for dispatch-algo

use async_trait::async_trait;
use std::sync::Arc;

use dispatch_algo::core::{Ranker, FALLBACK_SPEED_KM_PER_MIN};
use dispatch_algo::models::{
    EmergencyType, GeoPoint, Hospital, Incident, RouteEstimate, RouteSource, ScoringWeights,
};
use dispatch_algo::services::{FallbackRouter, OsrmClient, RouteError, RouteProvider};

fn hospital(id: u32, lat: f64, lng: f64) -> Hospital {
    Hospital {
        id,
        name: format!("Hospital {}", id),
        lat,
        lng,
        icu_beds: 2,
        general_beds: 10,
        affordability_tier: 2,
        rating: 4.0,
        has_cardiology: true,
        has_trauma: false,
        has_neurology: false,
        has_pulmonology: false,
    }
}

fn incident(emergency: EmergencyType) -> Incident {
    Incident {
        emergency_type: emergency,
        lat: 12.9716,
        lng: 77.5946,
        affordability_pref: None,
        heart_rate: None,
        spo2: None,
        bp_sys: None,
        bp_dia: None,
    }
}

/// Provider that answers from a fixed table keyed by destination latitude,
/// failing for destinations it does not know.
struct TableProvider {
    entries: Vec<(f64, RouteEstimate)>,
}

#[async_trait]
impl RouteProvider for TableProvider {
    async fn estimate(&self, _origin: GeoPoint, dest: GeoPoint) -> Result<RouteEstimate, RouteError> {
        self.entries
            .iter()
            .find(|(lat, _)| (lat - dest.lat).abs() < 1e-9)
            .map(|(_, estimate)| *estimate)
            .ok_or(RouteError::NoRoutes)
    }
}

fn provider_estimate(distance_km: f64, duration_min: f64) -> RouteEstimate {
    RouteEstimate {
        distance_km,
        duration_min,
        source: RouteSource::Provider,
    }
}

#[tokio::test]
async fn test_end_to_end_cardiac_ranking() {
    // H1: ICU beds + cardiology + 4.5 rating, provider says 10km/15min.
    // H2: no ICU, no cardiology, 3.0 rating, provider says 5km/8min.
    // Readiness dominates the shorter ETA under the default weights.
    let mut h1 = hospital(1, 13.00, 77.60);
    h1.icu_beds = 5;
    h1.rating = 4.5;

    let mut h2 = hospital(2, 13.10, 77.60);
    h2.icu_beds = 0;
    h2.has_cardiology = false;
    h2.rating = 3.0;

    let provider = TableProvider {
        entries: vec![
            (13.00, provider_estimate(10.0, 15.0)),
            (13.10, provider_estimate(5.0, 8.0)),
        ],
    };
    let router = Arc::new(FallbackRouter::new(
        Arc::new(provider),
        FALLBACK_SPEED_KM_PER_MIN,
    ));
    let ranker = Ranker::new(ScoringWeights::default(), router);

    let result = ranker
        .rank(&incident(EmergencyType::Cardiac), vec![h1, h2])
        .await;

    assert_eq!(result.matches.len(), 2);
    assert_eq!(result.matches[0].hospital_id, 1, "H1 should outrank H2");
    assert!(result.matches[0].match_score > result.matches[1].match_score);
    assert_eq!(result.matches[0].route_source, RouteSource::Provider);
}

#[tokio::test]
async fn test_provider_failure_only_demotes_affected_candidate() {
    let known = hospital(1, 13.00, 77.60);
    let unknown = hospital(2, 13.10, 77.60); // provider has no route for this one

    let provider = TableProvider {
        entries: vec![(13.00, provider_estimate(4.0, 6.0))],
    };
    let router = Arc::new(FallbackRouter::new(
        Arc::new(provider),
        FALLBACK_SPEED_KM_PER_MIN,
    ));
    let ranker = Ranker::new(ScoringWeights::default(), router);

    let result = ranker
        .rank(&incident(EmergencyType::Cardiac), vec![known, unknown])
        .await;

    assert_eq!(result.matches.len(), 2, "both candidates must appear");

    let by_id = |id: u32| result.matches.iter().find(|m| m.hospital_id == id).unwrap();
    assert_eq!(by_id(1).route_source, RouteSource::Provider);
    assert_eq!(by_id(2).route_source, RouteSource::Fallback);
}

#[tokio::test]
async fn test_top_n_contract() {
    let router = Arc::new(FallbackRouter::offline());
    let ranker = Ranker::new(ScoringWeights::default(), router);

    for count in [0usize, 1, 2, 3, 7] {
        let hospitals: Vec<Hospital> = (0..count)
            .map(|i| hospital(i as u32 + 1, 12.98 + i as f64 * 0.01, 77.60))
            .collect();

        let result = ranker
            .rank(&incident(EmergencyType::General), hospitals)
            .await;

        assert_eq!(result.matches.len(), count.min(3), "roster of {}", count);
        assert_eq!(result.total_candidates, count);

        for pair in result.matches.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }
}

#[tokio::test]
async fn test_offline_fallback_is_deterministic() {
    let router = Arc::new(FallbackRouter::offline());
    let ranker = Ranker::new(ScoringWeights::default(), router);

    let first = ranker
        .rank(&incident(EmergencyType::Stroke), vec![hospital(1, 13.0, 77.6)])
        .await;
    let second = ranker
        .rank(&incident(EmergencyType::Stroke), vec![hospital(1, 13.0, 77.6)])
        .await;

    assert_eq!(first.matches[0].distance_km, second.matches[0].distance_km);
    assert_eq!(first.matches[0].eta_min, second.matches[0].eta_min);
    assert_eq!(first.matches[0].route_source, RouteSource::Fallback);
    assert!(
        (first.matches[0].eta_min - first.matches[0].distance_km / 0.66).abs() < 1e-9,
        "fallback duration must be distance / 0.66"
    );
}

// OSRM client behavior against a stub HTTP server.

#[tokio::test]
async fn test_osrm_client_parses_route_summary() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", mockito::Matcher::Regex(r"^/route/v1/driving/.*".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"code":"Ok","routes":[{"distance":10500.0,"duration":900.0}]}"#)
        .create_async()
        .await;

    let client = OsrmClient::new(&server.url(), None).unwrap();
    let estimate = client
        .estimate(GeoPoint::new(12.9716, 77.5946), GeoPoint::new(13.0, 77.6))
        .await
        .unwrap();

    assert!((estimate.distance_km - 10.5).abs() < 1e-9);
    assert!((estimate.duration_min - 15.0).abs() < 1e-9);
    assert_eq!(estimate.source, RouteSource::Provider);
}

#[tokio::test]
async fn test_osrm_client_rejects_non_success_status() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", mockito::Matcher::Regex(r"^/route/v1/driving/.*".to_string()))
        .with_status(500)
        .create_async()
        .await;

    let client = OsrmClient::new(&server.url(), None).unwrap();
    let result = client
        .estimate(GeoPoint::new(12.9716, 77.5946), GeoPoint::new(13.0, 77.6))
        .await;

    assert!(matches!(result, Err(RouteError::BadStatus(_))));
}

#[tokio::test]
async fn test_osrm_client_rejects_empty_routes() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", mockito::Matcher::Regex(r"^/route/v1/driving/.*".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"code":"NoRoute","routes":[]}"#)
        .create_async()
        .await;

    let client = OsrmClient::new(&server.url(), None).unwrap();
    let result = client
        .estimate(GeoPoint::new(12.9716, 77.5946), GeoPoint::new(13.0, 77.6))
        .await;

    assert!(matches!(result, Err(RouteError::NoRoutes)));
}

#[tokio::test]
async fn test_osrm_client_rejects_malformed_body() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", mockito::Matcher::Regex(r"^/route/v1/driving/.*".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json at all")
        .create_async()
        .await;

    let client = OsrmClient::new(&server.url(), None).unwrap();
    let result = client
        .estimate(GeoPoint::new(12.9716, 77.5946), GeoPoint::new(13.0, 77.6))
        .await;

    assert!(matches!(result, Err(RouteError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_ranker_degrades_when_provider_unreachable() {
    // Point the client at a server that always errors; the run still
    // completes with fallback-tagged estimates.
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", mockito::Matcher::Regex(r"^/route/v1/driving/.*".to_string()))
        .with_status(503)
        .create_async()
        .await;

    let client = OsrmClient::new(&server.url(), None).unwrap();
    let router = Arc::new(FallbackRouter::new(
        Arc::new(client),
        FALLBACK_SPEED_KM_PER_MIN,
    ));
    let ranker = Ranker::new(ScoringWeights::default(), router);

    let result = ranker
        .rank(
            &incident(EmergencyType::Respiratory),
            vec![hospital(1, 13.0, 77.6), hospital(2, 12.9, 77.5)],
        )
        .await;

    assert_eq!(result.matches.len(), 2);
    for m in &result.matches {
        assert_eq!(m.route_source, RouteSource::Fallback);
    }
}
