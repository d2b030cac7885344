//! Cache abstractions: the byte-level `Cache` trait, key builders, glob
//! matching and JSON (de)serialization of cached values.

mod error;
mod keys;
mod patterns;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{
    enrichment_key, enrichment_pattern, extract_project_id_from_key,
    extract_project_id_from_pattern, is_project_child_key, is_project_metadata_key,
    location_key, project_key, project_locations_key, project_pattern, route_key,
    tenant_projects_key, CACHE_COORDINATE_DECIMALS,
};
pub use patterns::pattern_matches;
pub use serialization::{from_cache_bytes, to_cache_bytes, SerializationError};
pub use traits::Cache;
