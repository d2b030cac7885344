use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use super::ranking::{rank_scores, recommend};
use super::scoring::{cost_range, score_location};
use super::types::ComparisonResult;
use super::weights::ScoringWeights;
use crate::enrichment::LocationEnrichment;
use crate::location::Location;
use crate::project::Project;

/// Scores, ranks and recommends among the candidate locations.
///
/// Candidates without an entry in `enrichments` are scored on the criteria
/// that need no third-party data.
pub fn compare_locations(
    project: &Project,
    candidates: &[Location],
    enrichments: &HashMap<Uuid, LocationEnrichment>,
    weights: &ScoringWeights,
) -> ComparisonResult {
    let range = cost_range(candidates);

    let scores = candidates
        .iter()
        .map(|location| {
            score_location(
                location,
                project,
                enrichments.get(&location.id),
                range,
                weights,
            )
        })
        .collect();

    let ranking = rank_scores(scores);
    let recommendation = recommend(&ranking);

    ComparisonResult {
        project_id: project.id,
        weights: *weights,
        ranking,
        recommendation,
        generated_at: Utc::now(),
    }
}
