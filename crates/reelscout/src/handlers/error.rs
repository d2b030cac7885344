use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use reelscout_core::comparison::{comparison_error_to_status_code, ComparisonError};
use reelscout_core::location::LocationError;
use reelscout_core::project::ProjectError;
use reelscout_core::storage::{repository_error_to_status_code, RepositoryError};

/// Handler error: any error, answered as plain text with a status code
/// picked from the domain error it wraps.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(err)
        } else if let Some(err) = self.0.downcast_ref::<ComparisonError>() {
            comparison_error_to_status_code(err)
        } else if self.0.is::<ProjectError>() || self.0.is::<LocationError>() {
            400
        } else {
            500
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn status_of(err: impl Into<anyhow::Error>) -> StatusCode {
        AppError::from(err).into_response().status()
    }

    #[test]
    fn test_status_codes_follow_domain_errors() {
        assert_eq!(
            status_of(RepositoryError::not_found("Project", Uuid::nil())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_of(ProjectError::EmptyName), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(LocationError::InvalidCoordinates),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ComparisonError::NotEnoughLocations {
                required: 2,
                found: 0
            }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(anyhow::anyhow!("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
