//! reelscout-client CLI entry point.

use clap::Parser;
use reelscout_client::cli::comparisons::ComparisonsAction;
use reelscout_client::cli::health::HealthAction;
use reelscout_client::cli::locations::{list_query, LocationsAction};
use reelscout_client::cli::projects::ProjectsAction;
use reelscout_client::cli::{Cli, Commands, OutputFormat};
use reelscout_client::output::{format_output, pretty};
use reelscout_client::ReelscoutClient;
use reelscout_core::location::Coordinates;

/// Print a value as JSON or with its pretty formatter.
fn emit<T: serde::Serialize>(
    value: &T,
    format: OutputFormat,
    heading: &str,
    pretty: fn(&T) -> String,
) {
    match format {
        OutputFormat::Json => println!("{}", format_output(value, format)),
        OutputFormat::Pretty => println!("{}{}", heading, pretty(value)),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ReelscoutClient::new(&cli.base_url).with_tenant(cli.tenant);
    let format = cli.format;

    match cli.command {
        Commands::Projects(cmd) => match cmd.action {
            ProjectsAction::List => {
                let projects = client.list_projects().await?;
                emit(&projects, format, "", |p| pretty::format_projects(p));
            }
            ProjectsAction::Create { name, fields } => {
                let project = client.create_project(&fields.into_create(name)?).await?;
                emit(&project, format, "Created:\n", pretty::format_project);
            }
            ProjectsAction::Get { id } => {
                let project = client.get_project(id).await?;
                emit(&project, format, "", pretty::format_project);
            }
            ProjectsAction::Update {
                id,
                name,
                fields,
                clear,
            } => {
                let project = client
                    .update_project(id, &fields.into_update(name, clear)?)
                    .await?;
                emit(&project, format, "Updated:\n", pretty::format_project);
            }
            ProjectsAction::Delete { id } => {
                client.delete_project(id).await?;
                if !cli.quiet {
                    println!("Deleted project {}", id);
                }
            }
        },
        Commands::Locations(cmd) => match cmd.action {
            LocationsAction::List {
                project_id,
                status,
                include_rejected,
            } => {
                let locations = client
                    .list_locations(project_id, &list_query(status, include_rejected))
                    .await?;
                emit(&locations, format, "", |l| pretty::format_locations(l));
            }
            LocationsAction::Create {
                project_id,
                name,
                lat,
                lon,
                fields,
            } => {
                let req = fields.into_create(name, Coordinates::new(lat, lon));
                let location = client.create_location(project_id, &req).await?;
                emit(&location, format, "Created:\n", pretty::format_location);
            }
            LocationsAction::Get { id } => {
                let location = client.get_location(id).await?;
                emit(&location, format, "", pretty::format_location);
            }
            LocationsAction::Update {
                id,
                name,
                lat,
                lon,
                fields,
            } => {
                let coordinates = lat.zip(lon).map(|(lat, lon)| Coordinates::new(lat, lon));
                let location = client
                    .update_location(id, &fields.into_update(name, coordinates))
                    .await?;
                emit(&location, format, "Updated:\n", pretty::format_location);
            }
            LocationsAction::Delete { id } => {
                client.delete_location(id).await?;
                if !cli.quiet {
                    println!("Deleted location {}", id);
                }
            }
            LocationsAction::Enrich { id, refresh } => {
                let enrichment = client.get_enrichment(id, refresh).await?;
                emit(&enrichment, format, "", pretty::format_enrichment);
            }
        },
        Commands::Comparisons(cmd) => match cmd.action {
            ComparisonsAction::Run { project_id, args } => {
                let result = client.compare(project_id, &args.into_request()).await?;
                emit(&result, format, "", pretty::format_comparison_result);
            }
            ComparisonsAction::Save {
                project_id,
                label,
                args,
            } => {
                let comparison = client
                    .save_comparison(project_id, &args.into_save_request(label))
                    .await?;
                emit(&comparison, format, "Saved:\n", pretty::format_comparison);
            }
            ComparisonsAction::List { project_id } => {
                let comparisons = client.list_comparisons(project_id).await?;
                emit(&comparisons, format, "", |c| pretty::format_comparisons(c));
            }
            ComparisonsAction::Get { id } => {
                let comparison = client.get_comparison(id).await?;
                match format {
                    OutputFormat::Json => println!("{}", format_output(&comparison, format)),
                    OutputFormat::Pretty => println!(
                        "{}\n\n{}",
                        pretty::format_comparison(&comparison),
                        pretty::format_comparison_result(&comparison.result)
                    ),
                }
            }
            ComparisonsAction::Delete { id } => {
                client.delete_comparison(id).await?;
                if !cli.quiet {
                    println!("Deleted comparison {}", id);
                }
            }
        },
        Commands::Health(cmd) => match cmd.action {
            HealthAction::Live => {
                client.livez().await?;
                if !cli.quiet {
                    println!("ok");
                }
            }
            HealthAction::Check => {
                let health = client.healthz().await?;
                emit(&health, format, "", pretty::format_health);
            }
        },
    }

    Ok(())
}
