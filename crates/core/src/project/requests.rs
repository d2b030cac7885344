//! API request types for project operations.
//!
//! Shared between the server and the client for type-safe API communication.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::types::{Project, TenantId};
use crate::location::Coordinates;
use crate::serde::deserialize_optional_string;
use crate::storage::DateRange;

/// Request payload for creating a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoot_window: Option<DateRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_budget: Option<f64>,
}

impl CreateProjectRequest {
    /// Create a new request with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            base: None,
            shoot_window: None,
            daily_budget: None,
        }
    }

    /// Convert into a project owned by the tenant.
    pub fn into_project(self, tenant_id: TenantId) -> Project {
        let mut project = Project::new(tenant_id, self.name.trim());
        project.description = self.description;
        project.base = self.base;
        project.shoot_window = self.shoot_window;
        project.daily_budget = self.daily_budget;
        project
    }
}

/// Optional project attribute that an update can reset to unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectField {
    Description,
    Base,
    ShootWindow,
    DailyBudget,
}

/// Request payload for a partial project update.
///
/// Absent fields are left unchanged, so an empty `description` is not a way
/// to remove it. Fields listed in `clear` are unset first; a value given for
/// the same field in this request then wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoot_window: Option<DateRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clear: Vec<ProjectField>,
}

impl UpdateProjectRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the project name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the per-day budget.
    pub fn with_daily_budget(mut self, budget: f64) -> Self {
        self.daily_budget = Some(budget);
        self
    }

    /// Unset an optional field.
    pub fn clearing(mut self, field: ProjectField) -> Self {
        self.clear.push(field);
        self
    }

    /// Apply updates to an existing project and bump `updated_at`.
    pub fn apply_to(self, project: &mut Project) {
        for field in &self.clear {
            match field {
                ProjectField::Description => project.description = None,
                ProjectField::Base => project.base = None,
                ProjectField::ShootWindow => project.shoot_window = None,
                ProjectField::DailyBudget => project.daily_budget = None,
            }
        }
        if let Some(name) = self.name {
            project.name = name.trim().to_string();
        }
        if let Some(description) = self.description {
            project.description = Some(description);
        }
        if let Some(base) = self.base {
            project.base = Some(base);
        }
        if let Some(window) = self.shoot_window {
            project.shoot_window = Some(window);
        }
        if let Some(budget) = self.daily_budget {
            project.daily_budget = Some(budget);
        }
        project.updated_at = Utc::now();
    }
}
