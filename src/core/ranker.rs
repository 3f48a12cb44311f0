use futures::future::join_all;
use std::sync::Arc;

use crate::core::scoring::calculate_match_score;
use crate::models::{Hospital, Incident, RankedHospital, ScoringWeights};
use crate::services::FallbackRouter;

/// Result of a matching run
#[derive(Debug)]
pub struct RankResult {
    pub matches: Vec<RankedHospital>,
    pub total_candidates: usize,
}

/// Hospital ranking orchestrator
///
/// For each candidate: obtain a travel estimate through the fallback router,
/// combine it with the hospital's readiness, affordability, and quality
/// attributes into a composite score, then sort and truncate. Candidates are
/// estimated concurrently and independently; one degraded route lookup never
/// affects the others.
#[derive(Clone)]
pub struct Ranker {
    weights: ScoringWeights,
    router: Arc<FallbackRouter>,
    top_n: usize,
}

impl Ranker {
    pub const DEFAULT_TOP_N: usize = 3;

    pub fn new(weights: ScoringWeights, router: Arc<FallbackRouter>) -> Self {
        Self {
            weights,
            router,
            top_n: Self::DEFAULT_TOP_N,
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Rank candidate hospitals for an incident.
    ///
    /// Returns at most `top_n` hospitals in non-increasing score order; exact
    /// score ties break on ascending hospital id. An empty roster yields an
    /// empty result, not an error.
    pub async fn rank(&self, incident: &Incident, hospitals: Vec<Hospital>) -> RankResult {
        let total_candidates = hospitals.len();
        let origin = incident.location();

        let scored = join_all(hospitals.into_iter().map(|hospital| async move {
            let estimate = self.router.estimate(origin, hospital.location()).await;
            let (score, explanation) =
                calculate_match_score(&hospital, incident, &estimate, &self.weights);

            RankedHospital {
                hospital_id: hospital.id,
                name: hospital.name,
                lat: hospital.lat,
                lng: hospital.lng,
                eta_min: estimate.duration_min,
                distance_km: estimate.distance_km,
                route_source: estimate.source,
                match_score: score,
                explanation,
            }
        }))
        .await;

        let mut matches = scored;
        matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.hospital_id.cmp(&b.hospital_id))
        });
        matches.truncate(self.top_n);

        RankResult {
            matches,
            total_candidates,
        }
    }
}
