use crate::models::{EmergencyType, Hospital, Incident, RouteEstimate, ScoringWeights};

/// Calculate a composite match score (0-100) for a hospital candidate
///
/// Scoring formula:
/// score = (
///     eta_score * 0.40 +            # Shorter travel time = higher
///     bed_score * 0.20 +            # Category-appropriate beds available
///     specialist_score * 0.20 +     # Specialty flag matches the emergency
///     affordability_score * 0.10 +  # Tier close to the stated preference
///     rating_score * 0.10           # 1.0-5.0 rating rescaled to 0-100
/// )
pub fn calculate_match_score(
    hospital: &Hospital,
    incident: &Incident,
    estimate: &RouteEstimate,
    weights: &ScoringWeights,
) -> (f64, String) {
    let eta = eta_score(estimate.duration_min);
    let beds = bed_score(hospital, incident.emergency_type);
    let specialist = specialist_score(hospital, incident.emergency_type);
    let affordability = affordability_score(hospital.affordability_tier, incident.affordability_pref);
    let rating = rating_score(hospital.rating);

    let total = eta * weights.eta
        + beds * weights.beds
        + specialist * weights.specialist
        + affordability * weights.affordability
        + rating * weights.rating;

    let explanation = build_explanation(
        incident,
        hospital,
        estimate,
        beds.max(specialist),
    );

    (total.clamp(0.0, 100.0), explanation)
}

/// ETA score (0-100): linear decay, zero at 60 minutes and beyond.
#[inline]
pub fn eta_score(eta_min: f64) -> f64 {
    (100.0 - eta_min * 100.0 / 60.0).max(0.0)
}

/// Bed score (0-100), dependent on the emergency category.
///
/// A hospital with no beds at all scores 0 regardless of category.
#[inline]
pub fn bed_score(hospital: &Hospital, emergency: EmergencyType) -> f64 {
    if hospital.total_beds() == 0 {
        return 0.0;
    }

    match emergency {
        // ICU-dependent emergencies
        EmergencyType::Cardiac | EmergencyType::Stroke | EmergencyType::Respiratory => {
            if hospital.icu_beds > 0 {
                100.0
            } else {
                20.0
            }
        }
        EmergencyType::Trauma => {
            if hospital.has_trauma && hospital.icu_beds > 0 {
                100.0
            } else if hospital.icu_beds > 0 {
                80.0
            } else {
                20.0
            }
        }
        EmergencyType::General => {
            if hospital.general_beds > 0 {
                100.0
            } else {
                50.0
            }
        }
    }
}

/// Specialist score: 100 when the hospital's specialty flag matches the
/// emergency category, 0 otherwise. General emergencies need no specialist.
#[inline]
pub fn specialist_score(hospital: &Hospital, emergency: EmergencyType) -> f64 {
    let matched = match emergency {
        EmergencyType::Cardiac => hospital.has_cardiology,
        EmergencyType::Trauma => hospital.has_trauma,
        EmergencyType::Stroke => hospital.has_neurology,
        EmergencyType::Respiratory => hospital.has_pulmonology,
        EmergencyType::General => true,
    };

    if matched {
        100.0
    } else {
        0.0
    }
}

/// Affordability score based on absolute tier distance: 0 -> 100, 1 -> 50,
/// 2 or more -> 0. No stated preference is neutral (100).
#[inline]
pub fn affordability_score(tier: u8, pref: Option<u8>) -> f64 {
    match pref {
        None => 100.0,
        Some(p) => match tier.abs_diff(p) {
            0 => 100.0,
            1 => 50.0,
            _ => 0.0,
        },
    }
}

/// Rating score: 1.0-5.0 rating linearly rescaled to 0-100.
#[inline]
pub fn rating_score(rating: f64) -> f64 {
    (rating / 5.0) * 100.0
}

fn build_explanation(
    incident: &Incident,
    hospital: &Hospital,
    estimate: &RouteEstimate,
    readiness: f64,
) -> String {
    let mut explanation = format!(
        "ETA: {:.1}m ({:.1}km).",
        estimate.duration_min, estimate.distance_km
    );

    if readiness > 80.0 {
        explanation.push_str(&format!(" High readiness for {}.", incident.emergency_type));
    }

    if incident
        .affordability_pref
        .is_some_and(|p| p == hospital.affordability_tier)
    {
        explanation.push_str(" Meets affordability preference.");
    }

    explanation
}
