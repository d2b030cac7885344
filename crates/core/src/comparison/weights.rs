use serde::{Deserialize, Serialize};

use super::error::ComparisonError;
use super::types::Criterion;

/// Relative importance of each criterion.
///
/// Weights are relative: only their ratios matter. They are normalised over
/// the criteria that actually have data for a location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub cost: f64,
    pub accommodation: f64,
    pub transit: f64,
    pub weather: f64,
    pub distance: f64,
    pub logistics: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            cost: 0.25,
            accommodation: 0.15,
            transit: 0.10,
            weather: 0.15,
            distance: 0.15,
            logistics: 0.20,
        }
    }
}

impl ScoringWeights {
    /// All weights zero; useful as a starting point for `with`.
    pub fn zero() -> Self {
        Self {
            cost: 0.0,
            accommodation: 0.0,
            transit: 0.0,
            weather: 0.0,
            distance: 0.0,
            logistics: 0.0,
        }
    }

    /// Returns a copy with one weight replaced.
    pub fn with(mut self, criterion: Criterion, weight: f64) -> Self {
        match criterion {
            Criterion::Cost => self.cost = weight,
            Criterion::Accommodation => self.accommodation = weight,
            Criterion::Transit => self.transit = weight,
            Criterion::Weather => self.weather = weight,
            Criterion::Distance => self.distance = weight,
            Criterion::Logistics => self.logistics = weight,
        }
        self
    }

    /// Raw weight of a criterion.
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Cost => self.cost,
            Criterion::Accommodation => self.accommodation,
            Criterion::Transit => self.transit,
            Criterion::Weather => self.weather,
            Criterion::Distance => self.distance,
            Criterion::Logistics => self.logistics,
        }
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        Criterion::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Checks every weight is finite and non-negative, their sum is finite and
    /// at least one is positive.
    pub fn validate(&self) -> Result<(), ComparisonError> {
        for criterion in Criterion::ALL {
            let weight = self.get(criterion);
            if !weight.is_finite() {
                return Err(ComparisonError::InvalidWeights(format!(
                    "{criterion} weight must be a finite number"
                )));
            }
            if weight < 0.0 {
                return Err(ComparisonError::InvalidWeights(format!(
                    "{criterion} weight cannot be negative"
                )));
            }
        }
        let total = self.total();
        if !total.is_finite() {
            return Err(ComparisonError::InvalidWeights(
                "weights are too large to add up".to_string(),
            ));
        }
        if total <= 0.0 {
            return Err(ComparisonError::InvalidWeights(
                "at least one weight must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
