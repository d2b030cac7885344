use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when constructing a date range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("Invalid date range: start date must be before or equal to end date")]
    InvalidRange,
}

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Shorthand for a `NotFound` error keyed by a UUID.
    pub fn not_found(entity_type: &'static str, id: Uuid) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Shorthand for an `AlreadyExists` error keyed by a UUID.
    pub fn already_exists(entity_type: &'static str, id: Uuid) -> Self {
        Self::AlreadyExists {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Returns true for `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_shorthand() {
        let error = RepositoryError::not_found("Location", Uuid::nil());

        assert!(error.is_not_found());
        assert_eq!(
            error.to_string(),
            "Location not found: 00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_already_exists_display() {
        let error = RepositoryError::already_exists("Project", Uuid::nil());

        assert!(!error.is_not_found());
        assert_eq!(
            error.to_string(),
            "Project already exists: 00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_query_failed_display() {
        let error = RepositoryError::QueryFailed("no such table: locations".to_string());
        assert_eq!(error.to_string(), "Query failed: no such table: locations");
    }
}
