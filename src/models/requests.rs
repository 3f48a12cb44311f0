use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{EmergencyType, Incident};

/// Request to match hospitals for an incident.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[serde(alias = "emergency_type", rename = "emergencyType")]
    pub emergency_type: EmergencyType,
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
    #[validate(range(min = 1))]
    #[serde(default)]
    #[serde(alias = "affordability_pref", rename = "affordabilityPref")]
    pub affordability_pref: Option<u8>,
    #[serde(default)]
    #[serde(alias = "heart_rate", rename = "heartRate")]
    pub heart_rate: Option<u16>,
    #[serde(default)]
    pub spo2: Option<u8>,
    #[serde(default)]
    #[serde(alias = "bp_sys", rename = "bpSys")]
    pub bp_sys: Option<u16>,
    #[serde(default)]
    #[serde(alias = "bp_dia", rename = "bpDia")]
    pub bp_dia: Option<u16>,
}

impl MatchRequest {
    pub fn into_incident(self) -> Incident {
        Incident {
            emergency_type: self.emergency_type,
            lat: self.lat,
            lng: self.lng,
            affordability_pref: self.affordability_pref,
            heart_rate: self.heart_rate,
            spo2: self.spo2,
            bp_sys: self.bp_sys,
            bp_dia: self.bp_dia,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_request() {
        let req: MatchRequest = serde_json::from_str(
            r#"{"emergencyType": "Trauma", "lat": 40.7128, "lng": -74.0060}"#,
        )
        .unwrap();

        assert_eq!(req.emergency_type, EmergencyType::Trauma);
        assert_eq!(req.affordability_pref, None);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn accepts_snake_case_aliases() {
        let req: MatchRequest = serde_json::from_str(
            r#"{"emergency_type": "Cardiac", "lat": 12.97, "lng": 77.59, "affordability_pref": 2}"#,
        )
        .unwrap();

        assert_eq!(req.affordability_pref, Some(2));
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let req: MatchRequest = serde_json::from_str(
            r#"{"emergencyType": "General", "lat": 95.0, "lng": 0.0}"#,
        )
        .unwrap();

        assert!(req.validate().is_err());
    }
}
