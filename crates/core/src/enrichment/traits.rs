use async_trait::async_trait;

use super::types::{HotelSummary, RouteSummary, TransitSummary, WeatherSummary};
use super::Result;
use crate::location::Coordinates;
use crate::storage::DateRange;

/// Source of third-party data about a place.
#[async_trait]
pub trait EnrichmentProvider: Send + Sync {
    /// Accommodation around a point.
    async fn hotels(&self, at: Coordinates) -> Result<HotelSummary>;

    /// Public transport around a point.
    async fn transit(&self, at: Coordinates) -> Result<TransitSummary>;

    /// Expected weather at a point, for a date range when one is known.
    async fn weather(&self, at: Coordinates, window: Option<DateRange>) -> Result<WeatherSummary>;

    /// Driving route between two points.
    async fn route(&self, from: Coordinates, to: Coordinates) -> Result<RouteSummary>;

    /// Short name used in logs and health output.
    fn name(&self) -> &'static str;
}
