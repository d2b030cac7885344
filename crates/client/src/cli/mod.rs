//! CLI command definitions.

pub mod comparisons;
pub mod health;
pub mod locations;
pub mod projects;

use clap::{Parser, Subcommand, ValueEnum};
use reelscout_core::project::TenantId;

/// CLI client for the reelscout API.
#[derive(Debug, Parser)]
#[command(name = "reelscout-client")]
#[command(about = "CLI client for the reelscout API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "REELSCOUT_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Tenant to act as.
    #[arg(long, env = "REELSCOUT_TENANT")]
    pub tenant: Option<TenantId>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Project management.
    Projects(projects::ProjectsCommand),
    /// Scouted location management.
    Locations(locations::LocationsCommand),
    /// Score, rank and save location comparisons.
    Comparisons(comparisons::ComparisonsCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_compare_with_weights() {
        let tenant = TenantId::new();
        let project = uuid::Uuid::new_v4();
        let cli = Cli::try_parse_from([
            "reelscout-client",
            "--tenant",
            &tenant.to_string(),
            "--format",
            "json",
            "comparisons",
            "run",
            &project.to_string(),
            "--weight",
            "cost=0.5",
            "--weight",
            "weather=0",
            "--refresh",
        ])
        .unwrap();

        assert_eq!(cli.tenant, Some(tenant));
        match cli.command {
            Commands::Comparisons(cmd) => match cmd.action {
                comparisons::ComparisonsAction::Run { project_id, args } => {
                    assert_eq!(project_id, project);
                    let request = args.into_request();
                    assert!(request.refresh);
                    let weights = request.weights.unwrap();
                    assert_eq!(weights.cost, 0.5);
                    assert_eq!(weights.weather, 0.0);
                }
                other => panic!("unexpected action {other:?}"),
            },
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_criterion() {
        let result = Cli::try_parse_from([
            "reelscout-client",
            "comparisons",
            "run",
            &uuid::Uuid::new_v4().to_string(),
            "--weight",
            "glamour=1",
        ]);
        assert!(result.is_err());
    }
}
