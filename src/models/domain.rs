use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic point in WGS84 degrees.
///
/// Range validity (-90..90, -180..180) is the caller's responsibility;
/// request DTOs validate at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Emergency category of an incident.
///
/// Closed enumeration: an unrecognized category fails serde deserialization
/// at the request boundary instead of silently falling through the scoring
/// branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmergencyType {
    Cardiac,
    Trauma,
    Stroke,
    Respiratory,
    General,
}

impl fmt::Display for EmergencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EmergencyType::Cardiac => "Cardiac",
            EmergencyType::Trauma => "Trauma",
            EmergencyType::Stroke => "Stroke",
            EmergencyType::Respiratory => "Respiratory",
            EmergencyType::General => "General",
        };
        f.write_str(name)
    }
}

/// An incoming incident, as assembled from a match request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    pub emergency_type: EmergencyType,
    pub lat: f64,
    pub lng: f64,
    /// Affordability tier preference (lower = cheaper); `None` = no preference.
    #[serde(default)]
    pub affordability_pref: Option<u8>,
    #[serde(default)]
    pub heart_rate: Option<u16>,
    #[serde(default)]
    pub spo2: Option<u8>,
    #[serde(default)]
    pub bp_sys: Option<u16>,
    #[serde(default)]
    pub bp_dia: Option<u16>,
}

impl Incident {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// Candidate hospital supplied by the directory service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hospital {
    pub id: u32,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub icu_beds: u32,
    #[serde(default)]
    pub general_beds: u32,
    /// Cost bracket, lower = cheaper.
    #[serde(default = "default_tier")]
    pub affordability_tier: u8,
    /// Quality rating on a 1.0-5.0 scale.
    #[serde(default = "default_rating")]
    pub rating: f64,
    #[serde(default)]
    pub has_cardiology: bool,
    #[serde(default)]
    pub has_trauma: bool,
    #[serde(default)]
    pub has_neurology: bool,
    #[serde(default)]
    pub has_pulmonology: bool,
}

fn default_tier() -> u8 {
    2
}

fn default_rating() -> f64 {
    3.0
}

impl Hospital {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }

    pub fn total_beds(&self) -> u32 {
        self.icu_beds + self.general_beds
    }
}

/// Where a route estimate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteSource {
    Provider,
    Fallback,
}

impl fmt::Display for RouteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteSource::Provider => f.write_str("provider"),
            RouteSource::Fallback => f.write_str("fallback"),
        }
    }
}

/// Transient travel estimate between an incident and a hospital.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteEstimate {
    pub distance_km: f64,
    pub duration_min: f64,
    pub source: RouteSource,
}

/// Scoring weights for the composite hospital score.
///
/// Fixed coefficients summing to 1.0, injected into the ranker so alternate
/// weight sets can be configured and tested.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub eta: f64,
    pub beds: f64,
    pub specialist: f64,
    pub affordability: f64,
    pub rating: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            eta: 0.40,
            beds: 0.20,
            specialist: 0.20,
            affordability: 0.10,
            rating: 0.10,
        }
    }
}

/// Scored hospital candidate returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedHospital {
    #[serde(rename = "hospitalId")]
    pub hospital_id: u32,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "etaMin")]
    pub eta_min: f64,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    #[serde(rename = "routeSource")]
    pub route_source: RouteSource,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    pub explanation: String,
}
