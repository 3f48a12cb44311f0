use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::core::distance::{geometric_estimate, FALLBACK_SPEED_KM_PER_MIN};
use crate::models::{GeoPoint, RouteEstimate};

/// Errors that can occur while querying a routing provider
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("provider returned status {0}")]
    BadStatus(reqwest::StatusCode),

    #[error("provider response contained no routes")]
    NoRoutes,

    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Capability the ranker depends on: one travel estimate per origin/dest pair.
#[async_trait]
pub trait RouteProvider: Send + Sync {
    async fn estimate(&self, origin: GeoPoint, dest: GeoPoint) -> Result<RouteEstimate, RouteError>;
}

/// Infallible routing front-end.
///
/// Wraps a live `RouteProvider` and substitutes a deterministic geometric
/// estimate on any provider failure, so routing trouble never reaches the
/// ranker. Runs provider-less (always geometric) when constructed offline.
pub struct FallbackRouter {
    inner: Option<Arc<dyn RouteProvider>>,
    speed_km_per_min: f64,
}

impl FallbackRouter {
    pub fn new(inner: Arc<dyn RouteProvider>, speed_km_per_min: f64) -> Self {
        Self {
            inner: Some(inner),
            speed_km_per_min,
        }
    }

    /// Router with no live provider; every estimate is geometric.
    pub fn offline() -> Self {
        Self {
            inner: None,
            speed_km_per_min: FALLBACK_SPEED_KM_PER_MIN,
        }
    }

    /// Travel estimate between two points. Never fails: provider errors
    /// collapse into the geometric fallback, tagged by provenance.
    pub async fn estimate(&self, origin: GeoPoint, dest: GeoPoint) -> RouteEstimate {
        if let Some(provider) = &self.inner {
            match provider.estimate(origin, dest).await {
                Ok(estimate) => return estimate,
                Err(e) => {
                    tracing::warn!("routing provider failed, using geometric fallback: {}", e);
                }
            }
        }

        geometric_estimate(origin, dest, self.speed_km_per_min)
    }
}
