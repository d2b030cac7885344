use serde::{Deserialize, Serialize};

use super::error::LocationError;
use super::types::{Location, LocationStatus};
use crate::serde::deserialize_flexible_bool;

/// Maximum length of a location name, in characters.
pub const MAX_LOCATION_NAME_LEN: usize = 120;

/// Validates a location before creation or update.
pub fn validate_location(location: &Location) -> Result<(), LocationError> {
    if location.name.trim().is_empty() {
        return Err(LocationError::EmptyName);
    }
    if location.name.chars().count() > MAX_LOCATION_NAME_LEN {
        return Err(LocationError::NameTooLong);
    }
    if !location.coordinates.is_valid() {
        return Err(LocationError::InvalidCoordinates);
    }
    if let Some(rate) = location.daily_rate {
        if !rate.is_finite() || rate < 0.0 {
            return Err(LocationError::InvalidDailyRate);
        }
    }
    Ok(())
}

/// Query parameters for listing a project's locations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListLocationsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LocationStatus>,
    #[serde(default, deserialize_with = "deserialize_flexible_bool")]
    pub include_rejected: bool,
}

/// Filters locations by status.
///
/// With an explicit status only that status is returned. Otherwise rejected
/// locations are hidden unless `include_rejected` is set.
pub fn filter_locations<'a>(
    locations: &'a [Location],
    query: &ListLocationsQuery,
) -> Vec<&'a Location> {
    locations
        .iter()
        .filter(|location| match query.status {
            Some(status) => location.status == status,
            None => query.include_rejected || !location.status.is_rejected(),
        })
        .collect()
}
