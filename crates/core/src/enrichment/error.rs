use thiserror::Error;

/// Errors returned by enrichment providers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnrichmentError {
    #[error("Enrichment service unavailable: {0}")]
    Unavailable(String),
    #[error("Invalid enrichment response: {0}")]
    InvalidResponse(String),
    #[error("Enrichment request timed out")]
    Timeout,
    #[error("Enrichment service rate limit exceeded")]
    RateLimited,
}

/// Result type for enrichment operations.
pub type Result<T> = std::result::Result<T, EnrichmentError>;
