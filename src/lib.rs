//! Dispatch Algo - Hospital matching service for emergency dispatch
//!
//! This library ranks candidate hospitals for an incoming incident by
//! combining road-routing travel estimates (with a deterministic geometric
//! fallback) with bed availability, specialist coverage, affordability, and
//! quality signals.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{haversine_distance, Ranker};
pub use models::{
    EmergencyType, GeoPoint, Hospital, Incident, MatchRequest, MatchResponse, RankedHospital,
    RouteEstimate, RouteSource, ScoringWeights,
};
pub use services::{FallbackRouter, HospitalDirectory, OsrmClient, RouteProvider};
