//! Enrichment providers and the cached enrichment service.
//!
//! - `HttpEnrichmentProvider`: talks to a configurable enrichment gateway
//! - `MockEnrichmentProvider`: deterministic data, for development and tests
//! - `EnrichmentService`: cache-aside facet lookups on top of any provider

mod http;
mod mock;
mod service;

pub use http::HttpEnrichmentProvider;
pub use mock::MockEnrichmentProvider;
pub use service::EnrichmentService;
