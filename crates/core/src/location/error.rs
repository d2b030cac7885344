use thiserror::Error;

/// Errors that can occur when validating a location.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("Location name cannot be empty")]
    EmptyName,
    #[error("Location name too long (max 120 characters)")]
    NameTooLong,
    #[error("Invalid coordinates: latitude must be within ±90 and longitude within ±180")]
    InvalidCoordinates,
    #[error("Daily rate cannot be negative")]
    InvalidDailyRate,
}
