//! SQLite row conversion functions.
//!
//! Pure functions between SQLite rows and domain types.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::Row;
use uuid::Uuid;

use reelscout_core::comparison::{Comparison, ComparisonResult};
use reelscout_core::location::{Coordinates, Facilities, Location, LocationStatus, PermitRequirement};
use reelscout_core::project::{Project, TenantId};
use reelscout_core::storage::{DateRange, RepositoryError};

fn conversion_error(
    column: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
}

fn invalid_text(column: usize, message: String) -> rusqlite::Error {
    conversion_error(
        column,
        std::io::Error::new(std::io::ErrorKind::InvalidData, message),
    )
}

/// Convert a SQLite row to a Project.
///
/// Expected columns: id, tenant_id, name, description, base_latitude,
/// base_longitude, window_start, window_end, daily_budget, created_at, updated_at
pub fn row_to_project(row: &Row) -> rusqlite::Result<Project> {
    let base_latitude: Option<f64> = row.get(4)?;
    let base_longitude: Option<f64> = row.get(5)?;
    let window_start: Option<String> = row.get(6)?;
    let window_end: Option<String> = row.get(7)?;

    let shoot_window = match (window_start, window_end) {
        (Some(start), Some(end)) => Some(
            DateRange::new(parse_date(6, &start)?, parse_date(7, &end)?)
                .map_err(|e| conversion_error(6, e))?,
        ),
        _ => None,
    };

    Ok(Project {
        id: parse_uuid(0, &row.get::<_, String>(0)?)?,
        tenant_id: TenantId::from_uuid(parse_uuid(1, &row.get::<_, String>(1)?)?),
        name: row.get(2)?,
        description: row.get(3)?,
        base: base_latitude
            .zip(base_longitude)
            .map(|(lat, lon)| Coordinates::new(lat, lon)),
        shoot_window,
        daily_budget: row.get(8)?,
        created_at: parse_datetime(9, &row.get::<_, String>(9)?)?,
        updated_at: parse_datetime(10, &row.get::<_, String>(10)?)?,
    })
}

/// Convert a SQLite row to a Location.
///
/// Expected columns: see `LOCATION_COLUMNS` in the schema.
pub fn row_to_location(row: &Row) -> rusqlite::Result<Location> {
    let permit: String = row.get(8)?;
    let status: String = row.get(13)?;

    Ok(Location {
        id: parse_uuid(0, &row.get::<_, String>(0)?)?,
        tenant_id: TenantId::from_uuid(parse_uuid(1, &row.get::<_, String>(1)?)?),
        project_id: parse_uuid(2, &row.get::<_, String>(2)?)?,
        name: row.get(3)?,
        address: row.get(4)?,
        coordinates: Coordinates::new(row.get(5)?, row.get(6)?),
        daily_rate: row.get(7)?,
        permit: permit
            .parse::<PermitRequirement>()
            .map_err(|e| invalid_text(8, e))?,
        facilities: Facilities {
            parking_spaces: row.get(9)?,
            power_available: row.get(10)?,
            restrooms: row.get(11)?,
            holding_area: row.get(12)?,
        },
        status: status
            .parse::<LocationStatus>()
            .map_err(|e| invalid_text(13, e))?,
        notes: row.get(14)?,
        created_at: parse_datetime(15, &row.get::<_, String>(15)?)?,
        updated_at: parse_datetime(16, &row.get::<_, String>(16)?)?,
    })
}

/// Convert a SQLite row to a saved Comparison.
///
/// Expected columns: id, tenant_id, project_id, label, result, created_at
pub fn row_to_comparison(row: &Row) -> rusqlite::Result<Comparison> {
    let result_json: String = row.get(4)?;

    Ok(Comparison {
        id: parse_uuid(0, &row.get::<_, String>(0)?)?,
        tenant_id: TenantId::from_uuid(parse_uuid(1, &row.get::<_, String>(1)?)?),
        project_id: parse_uuid(2, &row.get::<_, String>(2)?)?,
        label: row.get(3)?,
        result: json_to_result(&result_json).map_err(|e| conversion_error(4, e))?,
        created_at: parse_datetime(5, &row.get::<_, String>(5)?)?,
    })
}

/// Serialize a comparison result for the `result` column.
pub fn result_to_json(result: &ComparisonResult) -> Result<String, RepositoryError> {
    serde_json::to_string(result).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

fn json_to_result(json: &str) -> Result<ComparisonResult, serde_json::Error> {
    serde_json::from_str(json)
}

fn parse_uuid(column: usize, s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| conversion_error(column, e))
}

fn parse_date(column: usize, s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| conversion_error(column, e))
}

fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_error(column, e))
}

/// Fixed-width RFC 3339 so `ORDER BY created_at` sorts chronologically.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
