//! Request types for running and saving comparisons.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ComparisonError;
use super::weights::ScoringWeights;
use crate::location::Location;
use crate::serde::{deserialize_flexible_bool, deserialize_optional_string};

/// Most locations a single comparison may include.
pub const MAX_COMPARED_LOCATIONS: usize = 25;
/// Fewest locations a comparison needs.
pub const MIN_COMPARED_LOCATIONS: usize = 2;

/// Body of `POST /api/projects/{id}/compare`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    /// Locations to compare. Empty means every location of the project.
    #[serde(default)]
    pub location_ids: Vec<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<ScoringWeights>,
    /// Bypass cached enrichment.
    #[serde(default, deserialize_with = "deserialize_flexible_bool")]
    pub refresh: bool,
    /// Keep rejected locations when `location_ids` is empty.
    #[serde(default, deserialize_with = "deserialize_flexible_bool")]
    pub include_rejected: bool,
}

impl ComparisonRequest {
    /// Compare every eligible location of the project with default weights.
    pub fn all() -> Self {
        Self::default()
    }

    /// Compare the given locations.
    pub fn of(location_ids: Vec<Uuid>) -> Self {
        Self {
            location_ids,
            ..Self::default()
        }
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    /// Weights to score with.
    pub fn effective_weights(&self) -> ScoringWeights {
        self.weights.unwrap_or_default()
    }

    /// Checks the request on its own, before any location is loaded.
    pub fn validate(&self) -> Result<(), ComparisonError> {
        if let Some(weights) = &self.weights {
            weights.validate()?;
        }
        if self.location_ids.len() > MAX_COMPARED_LOCATIONS {
            return Err(ComparisonError::TooManyLocations {
                max: MAX_COMPARED_LOCATIONS,
            });
        }
        let mut seen = HashSet::with_capacity(self.location_ids.len());
        for id in &self.location_ids {
            if !seen.insert(*id) {
                return Err(ComparisonError::DuplicateLocation(*id));
            }
        }
        Ok(())
    }
}

/// Body of `POST /api/projects/{id}/comparisons`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveComparisonRequest {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
    #[serde(flatten)]
    pub comparison: ComparisonRequest,
}

/// Query string of the comparison endpoints (`?refresh=true`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompareQuery {
    #[serde(default, deserialize_with = "deserialize_flexible_bool")]
    pub refresh: bool,
}

/// Resolves which of the project's locations take part in a comparison.
///
/// `project_locations` must be every location of the project. Explicit ids
/// keep the request's order; an id that is not in the project is reported as
/// unknown. With no ids, rejected locations are skipped unless
/// `include_rejected` is set.
pub fn select_candidates(
    request: &ComparisonRequest,
    project_locations: Vec<Location>,
) -> Result<Vec<Location>, ComparisonError> {
    request.validate()?;

    let candidates = if request.location_ids.is_empty() {
        let mut candidates: Vec<Location> = project_locations
            .into_iter()
            .filter(|location| request.include_rejected || !location.status.is_rejected())
            .collect();
        if candidates.len() > MAX_COMPARED_LOCATIONS {
            return Err(ComparisonError::TooManyLocations {
                max: MAX_COMPARED_LOCATIONS,
            });
        }
        candidates.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        candidates
    } else {
        let mut pool = project_locations;
        let mut candidates = Vec::with_capacity(request.location_ids.len());
        for id in &request.location_ids {
            let position = pool
                .iter()
                .position(|location| location.id == *id)
                .ok_or(ComparisonError::UnknownLocation(*id))?;
            candidates.push(pool.swap_remove(position));
        }
        candidates
    };

    if candidates.len() < MIN_COMPARED_LOCATIONS {
        return Err(ComparisonError::NotEnoughLocations {
            required: MIN_COMPARED_LOCATIONS,
            found: candidates.len(),
        });
    }
    Ok(candidates)
}
