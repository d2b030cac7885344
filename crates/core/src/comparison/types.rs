use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::weights::ScoringWeights;
use crate::project::TenantId;

/// A dimension a location is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Cost,
    Accommodation,
    Transit,
    Weather,
    Distance,
    Logistics,
}

impl Criterion {
    pub const ALL: [Criterion; 6] = [
        Criterion::Cost,
        Criterion::Accommodation,
        Criterion::Transit,
        Criterion::Weather,
        Criterion::Distance,
        Criterion::Logistics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Cost => "cost",
            Criterion::Accommodation => "accommodation",
            Criterion::Transit => "transit",
            Criterion::Weather => "weather",
            Criterion::Distance => "distance",
            Criterion::Logistics => "logistics",
        }
    }
}

impl std::str::FromStr for Criterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Criterion::ALL
            .into_iter()
            .find(|criterion| criterion.as_str() == s)
            .ok_or_else(|| format!("unknown criterion: {s}"))
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score of one location on one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub criterion: Criterion,
    /// Sub-score in `[0, 1]`.
    pub score: f64,
    /// Weight after normalisation over the available criteria.
    pub weight: f64,
    /// `score * weight * 100`, i.e. points added to the total.
    pub contribution: f64,
}

/// Full scoring result for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationScore {
    pub location_id: Uuid,
    pub name: String,
    /// 1-based position after ranking; 0 until ranked.
    pub rank: usize,
    /// Weighted total in `[0, 100]`.
    pub total: f64,
    pub daily_rate: Option<f64>,
    pub breakdown: Vec<CriterionScore>,
    /// Criteria skipped for lack of data.
    pub missing: Vec<Criterion>,
    pub strengths: Vec<Criterion>,
    pub weaknesses: Vec<Criterion>,
    /// Enrichment warnings carried over for display.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl LocationScore {
    /// Sub-score for a criterion, if it was available.
    pub fn score_for(&self, criterion: Criterion) -> Option<f64> {
        self.breakdown
            .iter()
            .find(|entry| entry.criterion == criterion)
            .map(|entry| entry.score)
    }
}

/// How clear the winner is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// The suggested location and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub location_id: Uuid,
    pub name: String,
    pub score: f64,
    /// Points ahead of the runner-up.
    pub margin: f64,
    pub confidence: Confidence,
    pub reasons: Vec<String>,
}

/// Output of a comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub project_id: Uuid,
    pub weights: ScoringWeights,
    pub ranking: Vec<LocationScore>,
    pub recommendation: Option<Recommendation>,
    pub generated_at: DateTime<Utc>,
}

/// A saved comparison result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub project_id: Uuid,
    pub label: Option<String>,
    pub result: ComparisonResult,
    pub created_at: DateTime<Utc>,
}

impl Comparison {
    /// Wraps a result as a new snapshot owned by the tenant.
    pub fn new(tenant_id: TenantId, result: ComparisonResult, label: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            project_id: result.project_id,
            label,
            result,
            created_at: Utc::now(),
        }
    }

    pub fn is_owned_by(&self, tenant_id: TenantId) -> bool {
        self.tenant_id == tenant_id
    }
}
