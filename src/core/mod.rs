// Core algorithm exports
pub mod distance;
pub mod ranker;
pub mod scoring;

pub use distance::{geometric_estimate, haversine_distance, FALLBACK_SPEED_KM_PER_MIN};
pub use ranker::{RankResult, Ranker};
pub use scoring::{
    affordability_score, bed_score, calculate_match_score, eta_score, rating_score,
    specialist_score,
};
