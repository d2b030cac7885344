//! Location comparison: weighted multi-criteria scoring, ranking and a
//! recommendation.
//!
//! The flow is `select_candidates` -> (server fetches enrichment) ->
//! `compare_locations`, which scores each candidate with `score_location`,
//! orders them with `rank_scores` and picks a winner with `recommend`.

mod engine;
mod error;
mod ranking;
mod requests;
mod scoring;
mod types;
mod weights;

pub use engine::compare_locations;
pub use error::{comparison_error_to_status_code, ComparisonError};
pub use ranking::{rank_scores, recommend, HIGH_CONFIDENCE_MARGIN, MEDIUM_CONFIDENCE_MARGIN};
pub use requests::{
    select_candidates, ComparisonRequest, CompareQuery, SaveComparisonRequest,
    MAX_COMPARED_LOCATIONS, MIN_COMPARED_LOCATIONS,
};
pub use scoring::{
    accommodation_score, cost_range, cost_score, distance_score, logistics_score,
    score_location, transit_score, weather_score, IDEAL_HIGH_C, MAX_TRAVEL_KM,
    STRENGTH_THRESHOLD, WEAKNESS_THRESHOLD,
};
pub use types::{
    Comparison, ComparisonResult, Confidence, Criterion, CriterionScore, LocationScore,
    Recommendation,
};
pub use weights::ScoringWeights;
