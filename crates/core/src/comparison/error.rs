use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while setting up or running a comparison.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComparisonError {
    #[error("Invalid scoring weights: {0}")]
    InvalidWeights(String),
    #[error("Location listed more than once: {0}")]
    DuplicateLocation(Uuid),
    #[error("Too many locations to compare (max {max})")]
    TooManyLocations { max: usize },
    #[error("Location not found in project: {0}")]
    UnknownLocation(Uuid),
    #[error("Location {0} belongs to a different project")]
    ForeignLocation(Uuid),
    #[error("At least {required} locations are needed for a comparison, found {found}")]
    NotEnoughLocations { required: usize, found: usize },
}

/// Maps a [`ComparisonError`] to an HTTP status code.
///
/// - `UnknownLocation` -> 404
/// - `NotEnoughLocations` -> 422
/// - everything else -> 400
pub fn comparison_error_to_status_code(error: &ComparisonError) -> u16 {
    match error {
        ComparisonError::UnknownLocation(_) => 404,
        ComparisonError::NotEnoughLocations { .. } => 422,
        ComparisonError::InvalidWeights(_)
        | ComparisonError::DuplicateLocation(_)
        | ComparisonError::TooManyLocations { .. }
        | ComparisonError::ForeignLocation(_) => 400,
    }
}
