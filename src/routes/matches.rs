use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Ranker;
use crate::models::{ErrorResponse, HealthResponse, MatchRequest, MatchResponse};
use crate::services::HospitalDirectory;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<HospitalDirectory>,
    pub ranker: Ranker,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/match", web::post().to(match_hospitals));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Match hospitals endpoint
///
/// POST /api/v1/match
///
/// Request body:
/// ```json
/// {
///   "emergencyType": "Cardiac|Trauma|Stroke|Respiratory|General",
///   "lat": 12.9716,
///   "lng": 77.5946,
///   "affordabilityPref": 2
/// }
/// ```
///
/// Ranks the directory's hospital roster against the incident and returns the
/// top candidates. Routing-provider trouble never fails the request; affected
/// candidates simply carry fallback provenance.
async fn match_hospitals(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("validation failed for match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request_id = uuid::Uuid::new_v4().to_string();
    let incident = req.into_inner().into_incident();

    tracing::info!(
        "matching hospitals for {} incident at ({}, {}), request {}",
        incident.emergency_type,
        incident.lat,
        incident.lng,
        request_id
    );

    let hospitals = match state.directory.get_hospitals().await {
        Ok(hospitals) => hospitals,
        Err(e) => {
            tracing::error!("failed to fetch hospital roster: {}", e);
            return HttpResponse::BadGateway().json(ErrorResponse {
                error: "Failed to fetch hospital roster".to_string(),
                message: e.to_string(),
                status_code: 502,
            });
        }
    };

    tracing::debug!("scoring {} candidate hospitals", hospitals.len());

    let result = state.ranker.rank(&incident, hospitals).await;

    tracing::info!(
        "returning {} matches (from {} candidates) for request {}",
        result.matches.len(),
        result.total_candidates,
        request_id
    );

    HttpResponse::Ok().json(MatchResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
        request_id,
    })
}
