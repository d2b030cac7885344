//! Third-party enrichment data about a location.
//!
//! Hotels, transit, weather and routes come from external services. The
//! server caches them aggressively; the comparison engine only ever sees the
//! summaries defined here.

mod error;
mod estimate;
mod traits;
mod types;

pub use error::{EnrichmentError, Result};
pub use estimate::{estimate_route, AVERAGE_SPEED_KMH, ROAD_FACTOR};
pub use traits::EnrichmentProvider;
pub use types::{
    Facet, HotelSummary, LocationEnrichment, RouteSummary, TransitSummary, WeatherSummary,
};
