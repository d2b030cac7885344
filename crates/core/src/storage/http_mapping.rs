//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404
/// - `AlreadyExists` -> 409
/// - `ConnectionFailed` -> 503
/// - `QueryFailed`, `Serialization` -> 500
/// - `InvalidData` -> 400
///
/// # Examples
///
/// ```
/// use reelscout_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::not_found("Project", uuid::Uuid::nil());
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) | RepositoryError::Serialization(_) => 500,
        RepositoryError::InvalidData(_) => 400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_lookup_errors() {
        assert_eq!(
            repository_error_to_status_code(&RepositoryError::not_found("Location", Uuid::nil())),
            404
        );
        assert_eq!(
            repository_error_to_status_code(&RepositoryError::already_exists(
                "Comparison",
                Uuid::nil()
            )),
            409
        );
    }

    #[test]
    fn test_backend_errors() {
        let unavailable = RepositoryError::ConnectionFailed("database is locked".to_string());
        let broken = RepositoryError::Serialization("bad facilities json".to_string());
        let invalid = RepositoryError::InvalidData("latitude out of range".to_string());

        assert_eq!(repository_error_to_status_code(&unavailable), 503);
        assert_eq!(repository_error_to_status_code(&broken), 500);
        assert_eq!(repository_error_to_status_code(&invalid), 400);
    }
}
