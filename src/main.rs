use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use dispatch_algo::config::Settings;
use dispatch_algo::core::{Ranker, FALLBACK_SPEED_KM_PER_MIN};
use dispatch_algo::models::ScoringWeights;
use dispatch_algo::routes::{self, matches::AppState};
use dispatch_algo::services::{FallbackRouter, HospitalDirectory, OsrmClient};
use std::sync::Arc;
use tracing::{error, info};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST),
        )
        .content_type("application/json")
        .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors (including unrecognized emergency categories,
/// which fail enum deserialization here and never reach the ranker)
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(
    err: error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt().with_target(false).with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting dispatch-algo hospital matching service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize routing provider and its fallback wrapper
    let osrm = OsrmClient::new(&settings.routing.endpoint, Some(settings.routing.timeout_secs))
        .unwrap_or_else(|e| {
            error!("Failed to build routing client: {}", e);
            panic!("Routing client error: {}", e);
        });

    let router = Arc::new(FallbackRouter::new(Arc::new(osrm), FALLBACK_SPEED_KM_PER_MIN));

    info!(
        "Routing provider initialized ({}, timeout {}s, geometric fallback armed)",
        settings.routing.endpoint, settings.routing.timeout_secs
    );

    // Initialize hospital directory client
    let directory = Arc::new(
        HospitalDirectory::new(settings.directory.endpoint.clone(), settings.directory.api_key)
            .unwrap_or_else(|e| {
                error!("Failed to build directory client: {}", e);
                panic!("Directory client error: {}", e);
            }),
    );

    info!("Hospital directory client initialized ({})", settings.directory.endpoint);

    // Initialize ranker with configured weights
    let weights: ScoringWeights = settings.scoring.weights.into();
    let ranker = Ranker::new(weights, router).with_top_n(settings.matching.top_n);

    info!("Ranker initialized with weights: {:?}", weights);

    // Build application state
    let app_state = AppState { directory, ranker };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
