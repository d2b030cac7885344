use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::geo::Coordinates;
use crate::project::TenantId;

/// How hard it is to obtain filming permission for a location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermitRequirement {
    /// Private property or no permit needed.
    #[default]
    None,
    /// A standard filming permit.
    Simple,
    /// Road closures, police presence, multiple authorities.
    Complex,
}

impl PermitRequirement {
    /// Multiplier applied to the logistics score.
    pub fn logistics_factor(&self) -> f64 {
        match self {
            PermitRequirement::None => 1.0,
            PermitRequirement::Simple => 0.9,
            PermitRequirement::Complex => 0.7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PermitRequirement::None => "none",
            PermitRequirement::Simple => "simple",
            PermitRequirement::Complex => "complex",
        }
    }
}

impl std::str::FromStr for PermitRequirement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(PermitRequirement::None),
            "simple" => Ok(PermitRequirement::Simple),
            "complex" => Ok(PermitRequirement::Complex),
            other => Err(format!("unknown permit requirement: {other}")),
        }
    }
}

/// Where a location stands in the scouting process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationStatus {
    #[default]
    Scouted,
    Shortlisted,
    Confirmed,
    Rejected,
}

impl LocationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationStatus::Scouted => "scouted",
            LocationStatus::Shortlisted => "shortlisted",
            LocationStatus::Confirmed => "confirmed",
            LocationStatus::Rejected => "rejected",
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, LocationStatus::Rejected)
    }
}

impl std::str::FromStr for LocationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scouted" => Ok(LocationStatus::Scouted),
            "shortlisted" => Ok(LocationStatus::Shortlisted),
            "confirmed" => Ok(LocationStatus::Confirmed),
            "rejected" => Ok(LocationStatus::Rejected),
            other => Err(format!("unknown location status: {other}")),
        }
    }
}

/// On-site facilities recorded by the scout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Facilities {
    /// Vehicles that can park on or next to the site (trucks, trailers, cars).
    pub parking_spaces: u32,
    /// Mains power the crew can tie into.
    pub power_available: bool,
    pub restrooms: bool,
    /// Space for cast/extras holding and wardrobe.
    pub holding_area: bool,
}

/// A scouted filming location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub project_id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub coordinates: Coordinates,
    /// Location fee per shoot day.
    pub daily_rate: Option<f64>,
    pub permit: PermitRequirement,
    pub facilities: Facilities,
    pub status: LocationStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Location {
    /// Creates a new scouted location for a project.
    pub fn new(
        tenant_id: TenantId,
        project_id: Uuid,
        name: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            project_id,
            name: name.into(),
            address: None,
            coordinates,
            daily_rate: None,
            permit: PermitRequirement::default(),
            facilities: Facilities::default(),
            status: LocationStatus::default(),
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_daily_rate(mut self, rate: f64) -> Self {
        self.daily_rate = Some(rate);
        self
    }

    pub fn with_permit(mut self, permit: PermitRequirement) -> Self {
        self.permit = permit;
        self
    }

    pub fn with_facilities(mut self, facilities: Facilities) -> Self {
        self.facilities = facilities;
        self
    }

    pub fn with_status(mut self, status: LocationStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets a specific ID for this location (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Returns true if the location belongs to the tenant.
    pub fn is_owned_by(&self, tenant_id: TenantId) -> bool {
        self.tenant_id == tenant_id
    }
}
