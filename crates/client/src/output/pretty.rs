//! Pretty output formatting.

use reelscout_core::comparison::{Comparison, ComparisonResult, LocationScore};
use reelscout_core::enrichment::LocationEnrichment;
use reelscout_core::location::Location;
use reelscout_core::project::Project;

use crate::client::health::Health;

fn format_list<T>(title: &str, items: &[T], empty: &str, format: fn(&T) -> String) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    let mut output = format!("{} ({})\n", title, items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}", format(item)));
        output.push('\n');
    }
    output
}

/// Format a project for display.
pub fn format_project(project: &Project) -> String {
    let mut output = format!("{}\n  ID: {}", project.name, project.id);
    if let Some(desc) = &project.description {
        output.push_str(&format!("\n  Description: {}", desc));
    }
    if let Some(base) = &project.base {
        output.push_str(&format!(
            "\n  Base: {:.5}, {:.5}",
            base.latitude, base.longitude
        ));
    }
    if let Some(window) = &project.shoot_window {
        output.push_str(&format!("\n  Shoot: {} to {}", window.start, window.end));
    }
    if let Some(budget) = project.daily_budget {
        output.push_str(&format!("\n  Daily budget: {:.2}", budget));
    }
    output
}

/// Format projects for display.
pub fn format_projects(projects: &[Project]) -> String {
    format_list("PROJECTS", projects, "No projects found.", format_project)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Format a location for display.
pub fn format_location(location: &Location) -> String {
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  Project: {}\n  Coordinates: {:.5}, {:.5}\n  Permit: {}\n  Parking: {}  Power: {}  Restrooms: {}  Holding: {}",
        location.name,
        location.status.as_str(),
        location.id,
        location.project_id,
        location.coordinates.latitude,
        location.coordinates.longitude,
        location.permit.as_str(),
        location.facilities.parking_spaces,
        yes_no(location.facilities.power_available),
        yes_no(location.facilities.restrooms),
        yes_no(location.facilities.holding_area),
    );
    if let Some(address) = &location.address {
        output.push_str(&format!("\n  Address: {}", address));
    }
    if let Some(rate) = location.daily_rate {
        output.push_str(&format!("\n  Daily rate: {:.2}", rate));
    }
    if let Some(notes) = &location.notes {
        output.push_str(&format!("\n  Notes: {}", notes));
    }
    output
}

/// Format locations for display.
pub fn format_locations(locations: &[Location]) -> String {
    format_list("LOCATIONS", locations, "No locations found.", format_location)
}

/// Format enrichment data for display.
pub fn format_enrichment(enrichment: &LocationEnrichment) -> String {
    let mut output = format!("ENRICHMENT {}", enrichment.location_id);
    match &enrichment.hotels {
        Some(hotels) => {
            output.push_str(&format!("\n  Hotels: {} nearby", hotels.count));
            if let Some(rate) = hotels.average_nightly_rate {
                output.push_str(&format!(", avg {:.0}/night", rate));
            }
        }
        None => output.push_str("\n  Hotels: unavailable"),
    }
    match &enrichment.transit {
        Some(transit) => output.push_str(&format!(
            "\n  Transit: {} stations within 1km",
            transit.stations_within_1km
        )),
        None => output.push_str("\n  Transit: unavailable"),
    }
    match &enrichment.weather {
        Some(weather) => output.push_str(&format!(
            "\n  Weather: {:.0}% rainy days, avg high {:.1}C",
            weather.rainy_day_ratio * 100.0,
            weather.average_high_c
        )),
        None => output.push_str("\n  Weather: unavailable"),
    }
    match &enrichment.route {
        Some(route) => {
            output.push_str(&format!("\n  Route: {:.1} km", route.distance_km));
            if let Some(minutes) = route.drive_minutes {
                output.push_str(&format!(", {:.0} min", minutes));
            }
            if route.estimated {
                output.push_str(" (estimated)");
            }
        }
        None => output.push_str("\n  Route: unavailable"),
    }
    for warning in &enrichment.warnings {
        output.push_str(&format!("\n  ! {}", warning));
    }
    output
}

fn format_score(score: &LocationScore) -> String {
    let mut output = format!("#{} {} ({:.1})", score.rank, score.name, score.total);
    for entry in &score.breakdown {
        output.push_str(&format!(
            "\n    {:<14} {:>5.2}  +{:.1}",
            entry.criterion.as_str(),
            entry.score,
            entry.contribution
        ));
    }
    if !score.missing.is_empty() {
        let missing: Vec<_> = score.missing.iter().map(|c| c.as_str()).collect();
        output.push_str(&format!("\n    missing: {}", missing.join(", ")));
    }
    for warning in &score.warnings {
        output.push_str(&format!("\n    ! {}", warning));
    }
    output
}

/// Format a comparison result for display.
pub fn format_comparison_result(result: &ComparisonResult) -> String {
    let mut output = format!("RANKING ({})\n", result.ranking.len());
    output.push_str(&"-".repeat(40));
    for score in &result.ranking {
        output.push_str(&format!("\n{}", format_score(score)));
    }
    match &result.recommendation {
        Some(recommendation) => {
            output.push_str(&format!(
                "\n\nRecommended: {} ({:.1}, +{:.1}, {:?} confidence)",
                recommendation.name,
                recommendation.score,
                recommendation.margin,
                recommendation.confidence
            ));
            for reason in &recommendation.reasons {
                output.push_str(&format!("\n  - {}", reason));
            }
        }
        None => output.push_str("\n\nNo recommendation."),
    }
    output
}

/// Format a saved comparison for display.
pub fn format_comparison(comparison: &Comparison) -> String {
    let label = comparison.label.as_deref().unwrap_or("(unlabelled)");
    let winner = comparison
        .result
        .recommendation
        .as_ref()
        .map(|r| r.name.as_str())
        .unwrap_or("none");
    format!(
        "{}\n  ID: {}\n  Project: {}\n  Created: {}\n  Locations: {}\n  Recommended: {}",
        label,
        comparison.id,
        comparison.project_id,
        comparison.created_at.format("%Y-%m-%d %H:%M"),
        comparison.result.ranking.len(),
        winner
    )
}

/// Format saved comparisons for display.
pub fn format_comparisons(comparisons: &[Comparison]) -> String {
    format_list(
        "COMPARISONS",
        comparisons,
        "No saved comparisons.",
        format_comparison,
    )
}

/// Format the health report.
pub fn format_health(health: &Health) -> String {
    format!(
        "Health:\n  Status: {}\n  Storage: {}\n  Enrichment: {}",
        health.status, health.storage, health.enrichment_provider
    )
}
