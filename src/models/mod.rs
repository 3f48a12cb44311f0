// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    EmergencyType, GeoPoint, Hospital, Incident, RankedHospital, RouteEstimate, RouteSource,
    ScoringWeights,
};
pub use requests::MatchRequest;
pub use responses::{ErrorResponse, HealthResponse, MatchResponse};
