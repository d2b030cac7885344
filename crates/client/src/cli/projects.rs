//! Project CLI commands.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use reelscout_core::location::Coordinates;
use reelscout_core::project::{CreateProjectRequest, ProjectField, UpdateProjectRequest};
use reelscout_core::storage::DateRange;
use uuid::Uuid;

use crate::error::{ClientError, Result};

/// Project management commands.
#[derive(Debug, Parser)]
pub struct ProjectsCommand {
    #[command(subcommand)]
    pub action: ProjectsAction,
}

/// Available project actions.
#[derive(Debug, Subcommand)]
pub enum ProjectsAction {
    /// List the tenant's projects.
    List,
    /// Create a new project.
    Create {
        /// Project name.
        #[arg(long)]
        name: String,
        #[command(flatten)]
        fields: ProjectFields,
    },
    /// Get project by ID.
    Get {
        /// Project ID.
        id: Uuid,
    },
    /// Update a project.
    Update {
        /// Project ID.
        id: Uuid,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        fields: ProjectFields,
        /// Unset a field (description, base, shoot-window, daily-budget); repeatable.
        #[arg(long, value_parser = parse_project_field)]
        clear: Vec<ProjectField>,
    },
    /// Delete a project with its locations and saved comparisons.
    Delete {
        /// Project ID.
        id: Uuid,
    },
}

/// Optional project attributes shared by create and update.
#[derive(Debug, Args)]
pub struct ProjectFields {
    /// Project description.
    #[arg(long)]
    pub description: Option<String>,
    /// Latitude of the production base.
    #[arg(long, requires = "base_lon", allow_hyphen_values = true)]
    pub base_lat: Option<f64>,
    /// Longitude of the production base.
    #[arg(long, requires = "base_lat", allow_hyphen_values = true)]
    pub base_lon: Option<f64>,
    /// First shoot day (YYYY-MM-DD).
    #[arg(long, requires = "shoot_end")]
    pub shoot_start: Option<NaiveDate>,
    /// Last shoot day (YYYY-MM-DD).
    #[arg(long, requires = "shoot_start")]
    pub shoot_end: Option<NaiveDate>,
    /// Per-day location budget.
    #[arg(long)]
    pub budget: Option<f64>,
}

impl ProjectFields {
    fn base(&self) -> Option<Coordinates> {
        self.base_lat
            .zip(self.base_lon)
            .map(|(lat, lon)| Coordinates::new(lat, lon))
    }

    fn shoot_window(&self) -> Result<Option<DateRange>> {
        match (self.shoot_start, self.shoot_end) {
            (Some(start), Some(end)) => DateRange::new(start, end)
                .map(Some)
                .map_err(|e| ClientError::InvalidInput(e.to_string())),
            _ => Ok(None),
        }
    }

    /// Build a create request for the named project.
    pub fn into_create(self, name: String) -> Result<CreateProjectRequest> {
        let mut req = CreateProjectRequest::new(name);
        req.base = self.base();
        req.shoot_window = self.shoot_window()?;
        req.description = self.description;
        req.daily_budget = self.budget;
        Ok(req)
    }

    /// Build a partial update request.
    pub fn into_update(
        self,
        name: Option<String>,
        clear: Vec<ProjectField>,
    ) -> Result<UpdateProjectRequest> {
        Ok(UpdateProjectRequest {
            name,
            base: self.base(),
            shoot_window: self.shoot_window()?,
            description: self.description,
            daily_budget: self.budget,
            clear,
        })
    }
}

fn parse_project_field(raw: &str) -> std::result::Result<ProjectField, String> {
    match raw.trim().replace('_', "-").as_str() {
        "description" => Ok(ProjectField::Description),
        "base" => Ok(ProjectField::Base),
        "shoot-window" => Ok(ProjectField::ShootWindow),
        "daily-budget" | "budget" => Ok(ProjectField::DailyBudget),
        other => Err(format!("unknown project field: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project_field() {
        assert_eq!(parse_project_field("base"), Ok(ProjectField::Base));
        assert_eq!(
            parse_project_field("shoot_window"),
            Ok(ProjectField::ShootWindow)
        );
        assert_eq!(parse_project_field("budget"), Ok(ProjectField::DailyBudget));
        assert!(parse_project_field("name").is_err());
    }

    #[test]
    fn test_update_carries_cleared_fields() {
        let fields = ProjectFields {
            description: None,
            base_lat: None,
            base_lon: None,
            shoot_start: None,
            shoot_end: None,
            budget: None,
        };
        let req = fields
            .into_update(None, vec![ProjectField::Base, ProjectField::DailyBudget])
            .unwrap();

        assert!(req.base.is_none());
        assert_eq!(req.clear, vec![ProjectField::Base, ProjectField::DailyBudget]);
    }
}
