use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::models::{GeoPoint, RouteEstimate, RouteSource};
use crate::services::routing::{RouteError, RouteProvider};

const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// OSRM routing client
///
/// Queries the `/route/v1/driving` endpoint for a route summary (no
/// turn-by-turn geometry) and converts the reported meters/seconds into
/// kilometers/minutes. Every failure mode surfaces as a `RouteError` for the
/// fallback layer to absorb.
pub struct OsrmClient {
    endpoint: String,
    client: Client,
}

impl OsrmClient {
    /// Create a client for the given OSRM endpoint
    /// (e.g. `http://router.project-osrm.org`).
    pub fn new(endpoint: &str, timeout_secs: Option<u64>) -> Result<Self, RouteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(
                timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ))
            .build()?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    /// Travel distance in meters.
    distance: f64,
    /// Travel duration in seconds.
    duration: f64,
}

#[async_trait]
impl RouteProvider for OsrmClient {
    async fn estimate(&self, origin: GeoPoint, dest: GeoPoint) -> Result<RouteEstimate, RouteError> {
        // OSRM expects longitude,latitude order
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}?overview=false",
            self.endpoint, origin.lng, origin.lat, dest.lng, dest.lat
        );

        tracing::debug!("querying routing provider: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(RouteError::BadStatus(response.status()));
        }

        let parsed: OsrmRouteResponse = response
            .json()
            .await
            .map_err(|e| RouteError::InvalidResponse(e.to_string()))?;

        let route = parsed.routes.first().ok_or(RouteError::NoRoutes)?;

        Ok(RouteEstimate {
            distance_km: route.distance / 1000.0,
            duration_min: route.duration / 60.0,
            source: RouteSource::Provider,
        })
    }
}
