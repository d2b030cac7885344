use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds for repository reads (default: 300)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 10,000)
    pub cache_max_entries: usize,
    /// Path to SQLite database file (default: "reelscout.db")
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub sqlite_path: String,
    /// Enrichment gateway base URL; the mock provider is used when unset.
    pub enrichment_base_url: Option<String>,
    /// Bearer token sent to the enrichment gateway.
    pub enrichment_api_key: Option<String>,
    /// Per-request timeout for the enrichment gateway (default: 10)
    pub enrichment_timeout_seconds: u64,
    /// TTL of cached enrichment facets (default: 21,600)
    pub enrichment_cache_ttl_seconds: u64,
    /// Server-side request timeout (default: 30)
    pub request_timeout_seconds: u64,
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 300)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `SQLITE_PATH` - SQLite database path (default: "reelscout.db")
    /// - `ENRICHMENT_BASE_URL` - Enrichment gateway URL (default: unset, mock data)
    /// - `ENRICHMENT_API_KEY` - Enrichment gateway token (default: unset)
    /// - `ENRICHMENT_TIMEOUT_SECONDS` - Gateway timeout (default: 10)
    /// - `ENRICHMENT_CACHE_TTL_SECONDS` - Enrichment cache TTL (default: 21,600)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 30)
    pub fn from_env() -> Self {
        Self {
            cache_ttl_seconds: parse_var("CACHE_TTL_SECONDS").unwrap_or(300),
            cache_max_entries: parse_var("CACHE_MAX_ENTRIES")
                .filter(|n| *n > 0)
                .unwrap_or(10_000),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "reelscout.db".to_string()),
            enrichment_base_url: non_empty_var("ENRICHMENT_BASE_URL"),
            enrichment_api_key: non_empty_var("ENRICHMENT_API_KEY"),
            enrichment_timeout_seconds: parse_var("ENRICHMENT_TIMEOUT_SECONDS").unwrap_or(10),
            enrichment_cache_ttl_seconds: parse_var("ENRICHMENT_CACHE_TTL_SECONDS")
                .unwrap_or(21_600),
            request_timeout_seconds: parse_var("REQUEST_TIMEOUT_SECONDS").unwrap_or(30),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    pub fn enrichment_timeout(&self) -> Duration {
        Duration::from_secs(self.enrichment_timeout_seconds)
    }

    pub fn enrichment_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.enrichment_cache_ttl_seconds)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
