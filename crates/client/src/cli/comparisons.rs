//! Comparison CLI commands.

use clap::{Args, Parser, Subcommand};
use reelscout_core::comparison::{
    ComparisonRequest, Criterion, SaveComparisonRequest, ScoringWeights,
};
use uuid::Uuid;

/// Comparison commands.
#[derive(Debug, Parser)]
pub struct ComparisonsCommand {
    #[command(subcommand)]
    pub action: ComparisonsAction,
}

/// Available comparison actions.
#[derive(Debug, Subcommand)]
pub enum ComparisonsAction {
    /// Score and rank a project's locations.
    Run {
        /// Project ID.
        project_id: Uuid,
        #[command(flatten)]
        args: CompareArgs,
    },
    /// Run a comparison and save the result.
    Save {
        /// Project ID.
        project_id: Uuid,
        /// Label for the snapshot.
        #[arg(long)]
        label: Option<String>,
        #[command(flatten)]
        args: CompareArgs,
    },
    /// List saved comparisons of a project.
    List {
        /// Project ID.
        project_id: Uuid,
    },
    /// Get a saved comparison by ID.
    Get {
        /// Comparison ID.
        id: Uuid,
    },
    /// Delete a saved comparison.
    Delete {
        /// Comparison ID.
        id: Uuid,
    },
}

/// Options of a comparison run.
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Location to compare; repeat for more. Defaults to every location.
    #[arg(long = "location")]
    pub locations: Vec<Uuid>,
    /// Override a criterion weight, e.g. `cost=0.5`.
    #[arg(long = "weight", value_parser = parse_weight)]
    pub weights: Vec<(Criterion, f64)>,
    /// Bypass cached enrichment.
    #[arg(long)]
    pub refresh: bool,
    /// Keep rejected locations when comparing the whole project.
    #[arg(long)]
    pub include_rejected: bool,
}

impl CompareArgs {
    /// Build the comparison request. Overrides apply on top of the default weights.
    pub fn into_request(self) -> ComparisonRequest {
        let weights = (!self.weights.is_empty()).then(|| {
            self.weights
                .iter()
                .fold(ScoringWeights::default(), |weights, (criterion, weight)| {
                    weights.with(*criterion, *weight)
                })
        });
        ComparisonRequest {
            location_ids: self.locations,
            weights,
            refresh: self.refresh,
            include_rejected: self.include_rejected,
        }
    }

    pub fn into_save_request(self, label: Option<String>) -> SaveComparisonRequest {
        SaveComparisonRequest {
            label,
            comparison: self.into_request(),
        }
    }
}

fn parse_weight(raw: &str) -> Result<(Criterion, f64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected CRITERION=WEIGHT, got `{raw}`"))?;
    let criterion = name.trim().parse::<Criterion>()?;
    let weight = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid weight `{value}`: {e}"))?;
    Ok((criterion, weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight("cost=0.4"), Ok((Criterion::Cost, 0.4)));
        assert_eq!(
            parse_weight(" logistics = 1 "),
            Ok((Criterion::Logistics, 1.0))
        );
        assert!(parse_weight("cost").is_err());
        assert!(parse_weight("cost=lots").is_err());
        assert!(parse_weight("vibes=1").is_err());
    }

    #[test]
    fn test_no_overrides_keeps_server_defaults() {
        let args = CompareArgs {
            locations: vec![],
            weights: vec![],
            refresh: false,
            include_rejected: true,
        };
        let request = args.into_save_request(Some("first pass".into()));
        assert!(request.comparison.weights.is_none());
        assert!(request.comparison.include_rejected);
        assert_eq!(request.label.as_deref(), Some("first pass"));
    }
}
