//! API request types for location operations.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::geo::Coordinates;
use super::types::{Facilities, Location, LocationStatus, PermitRequirement};
use crate::project::TenantId;
use crate::serde::deserialize_optional_string;

/// Request payload for adding a scouted location to a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLocationRequest {
    pub name: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<String>,
    pub coordinates: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_rate: Option<f64>,
    #[serde(default)]
    pub permit: PermitRequirement,
    #[serde(default)]
    pub facilities: Facilities,
    #[serde(default)]
    pub status: LocationStatus,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
}

impl CreateLocationRequest {
    /// Create a request with the required fields only.
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            address: None,
            coordinates,
            daily_rate: None,
            permit: PermitRequirement::default(),
            facilities: Facilities::default(),
            status: LocationStatus::default(),
            notes: None,
        }
    }

    /// Convert into a location of the given project.
    pub fn into_location(self, tenant_id: TenantId, project_id: Uuid) -> Location {
        let mut location = Location::new(tenant_id, project_id, self.name.trim(), self.coordinates);
        location.address = self.address;
        location.daily_rate = self.daily_rate;
        location.permit = self.permit;
        location.facilities = self.facilities;
        location.status = self.status;
        location.notes = self.notes;
        location
    }
}

/// Request payload for a partial location update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLocationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permit: Option<PermitRequirement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facilities: Option<Facilities>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LocationStatus>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
}

impl UpdateLocationRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scouting status.
    pub fn with_status(mut self, status: LocationStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the daily rate.
    pub fn with_daily_rate(mut self, rate: f64) -> Self {
        self.daily_rate = Some(rate);
        self
    }

    /// Returns true if the update moves the location.
    ///
    /// Cached enrichment is keyed by position, so callers use this to decide
    /// whether previously fetched data still applies.
    pub fn moves_location(&self, location: &Location) -> bool {
        self.coordinates
            .is_some_and(|coordinates| coordinates != location.coordinates)
    }

    /// Apply updates to an existing location and bump `updated_at`.
    pub fn apply_to(self, location: &mut Location) {
        if let Some(name) = self.name {
            location.name = name.trim().to_string();
        }
        if let Some(address) = self.address {
            location.address = Some(address);
        }
        if let Some(coordinates) = self.coordinates {
            location.coordinates = coordinates;
        }
        if let Some(rate) = self.daily_rate {
            location.daily_rate = Some(rate);
        }
        if let Some(permit) = self.permit {
            location.permit = permit;
        }
        if let Some(facilities) = self.facilities {
            location.facilities = facilities;
        }
        if let Some(status) = self.status {
            location.status = status;
        }
        if let Some(notes) = self.notes {
            location.notes = Some(notes);
        }
        location.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults() {
        let json = r#"{
            "name": "Quarry",
            "coordinates": { "latitude": 51.2, "longitude": -2.4 },
            "permit": "complex",
            "facilities": { "parking_spaces": 30, "power_available": true }
        }"#;
        let request: CreateLocationRequest = serde_json::from_str(json).unwrap();
        let tenant = TenantId::new();
        let project_id = Uuid::new_v4();
        let location = request.into_location(tenant, project_id);

        assert_eq!(location.project_id, project_id);
        assert_eq!(location.permit, PermitRequirement::Complex);
        assert_eq!(location.status, LocationStatus::Scouted);
        assert_eq!(location.facilities.parking_spaces, 30);
        assert!(location.facilities.power_available);
        assert!(!location.facilities.restrooms);
    }

    #[test]
    fn test_update_request_applies_only_given_fields() {
        let mut location = Location::new(
            TenantId::new(),
            Uuid::new_v4(),
            "Warehouse",
            Coordinates::new(52.48, -1.89),
        )
        .with_daily_rate(1200.0);

        UpdateLocationRequest::new()
            .with_status(LocationStatus::Shortlisted)
            .apply_to(&mut location);

        assert_eq!(location.status, LocationStatus::Shortlisted);
        assert_eq!(location.daily_rate, Some(1200.0));
        assert_eq!(location.name, "Warehouse");
    }

    #[test]
    fn test_moves_location() {
        let location = Location::new(
            TenantId::new(),
            Uuid::new_v4(),
            "Church",
            Coordinates::new(52.0, 0.1),
        );
        let same = UpdateLocationRequest {
            coordinates: Some(Coordinates::new(52.0, 0.1)),
            ..Default::default()
        };
        let moved = UpdateLocationRequest {
            coordinates: Some(Coordinates::new(52.1, 0.1)),
            ..Default::default()
        };

        assert!(!same.moves_location(&location));
        assert!(moved.moves_location(&location));
        assert!(!UpdateLocationRequest::new().moves_location(&location));
    }
}
