use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<super::SerializationError> for CacheError {
    fn from(error: super::SerializationError) -> Self {
        CacheError::Serialization(error.to_string())
    }
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::SerializationError;

    #[test]
    fn test_operation_failed_display() {
        let error = CacheError::OperationFailed("store poisoned".to_string());
        assert_eq!(error.to_string(), "Cache operation failed: store poisoned");
    }

    #[test]
    fn test_from_serialization_error() {
        let error: CacheError = SerializationError::DeserializeFailed("eof".to_string()).into();
        assert_eq!(
            error,
            CacheError::Serialization("Failed to deserialize: eof".to_string())
        );
    }
}
