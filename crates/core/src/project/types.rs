use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::location::Coordinates;
use crate::storage::DateRange;

/// Identifies the production company that owns a piece of data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(Uuid);

impl TenantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TenantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TenantId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// A film production whose locations are being scouted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub name: String,
    pub description: Option<String>,
    /// Production base (unit base or office); distances are measured from here.
    pub base: Option<Coordinates>,
    /// Planned shoot dates, used for weather lookups.
    pub shoot_window: Option<DateRange>,
    /// Per-day location budget, in the production's currency.
    pub daily_budget: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project owned by the given tenant.
    pub fn new(tenant_id: TenantId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            name: name.into(),
            description: None,
            base: None,
            shoot_window: None,
            daily_budget: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the description for this project.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the production base.
    pub fn with_base(mut self, base: Coordinates) -> Self {
        self.base = Some(base);
        self
    }

    /// Sets the shoot window.
    pub fn with_shoot_window(mut self, window: DateRange) -> Self {
        self.shoot_window = Some(window);
        self
    }

    /// Sets the per-day location budget.
    pub fn with_daily_budget(mut self, budget: f64) -> Self {
        self.daily_budget = Some(budget);
        self
    }

    /// Sets a specific ID for this project (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Returns true if the project belongs to the tenant.
    pub fn is_owned_by(&self, tenant_id: TenantId) -> bool {
        self.tenant_id == tenant_id
    }
}
