//! Deterministic enrichment provider.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use reelscout_core::enrichment::{
    estimate_route, EnrichmentError, EnrichmentProvider, Facet, HotelSummary, Result,
    RouteSummary, TransitSummary, WeatherSummary,
};
use reelscout_core::location::Coordinates;
use reelscout_core::storage::DateRange;

/// Pseudo-random value in `[0, 1)` derived from a position and a salt.
fn noise(at: Coordinates, salt: f64) -> f64 {
    let x = (at.latitude * 12.9898 + at.longitude * 78.233 + salt).sin() * 43_758.545_3;
    x - x.floor()
}

/// Provider that derives plausible data from coordinates alone.
///
/// The same coordinates always produce the same answer. Individual facets can
/// be made to fail, and every call is counted.
#[derive(Debug, Default)]
pub struct MockEnrichmentProvider {
    failing: HashSet<Facet>,
    calls: AtomicUsize,
}

impl MockEnrichmentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every request for `facet` fail with `Unavailable`.
    pub fn with_failing(mut self, facet: Facet) -> Self {
        self.failing.insert(facet);
        self
    }

    /// Number of provider calls made so far, across all facets.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn begin(&self, facet: Facet) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&facet) {
            return Err(EnrichmentError::Unavailable(format!(
                "mock {facet} service is down"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl EnrichmentProvider for MockEnrichmentProvider {
    async fn hotels(&self, at: Coordinates) -> Result<HotelSummary> {
        self.begin(Facet::Hotels)?;
        let n = noise(at, 1.0);
        let count = (n * 40.0) as u32;
        Ok(HotelSummary {
            count,
            average_nightly_rate: (count > 0).then(|| 80.0 + n * 170.0),
            nearest_km: (count > 0).then(|| 0.2 + (1.0 - n) * 5.0),
        })
    }

    async fn transit(&self, at: Coordinates) -> Result<TransitSummary> {
        self.begin(Facet::Transit)?;
        let n = noise(at, 2.0);
        Ok(TransitSummary {
            stations_within_1km: (n * 8.0) as u32,
            nearest_station_km: Some(0.1 + (1.0 - n) * 3.0),
        })
    }

    async fn weather(&self, at: Coordinates, window: Option<DateRange>) -> Result<WeatherSummary> {
        self.begin(Facet::Weather)?;
        let month_shift = window
            .map(|w| f64::from(chrono::Datelike::month(&w.start)) / 12.0)
            .unwrap_or(0.5);
        let n = noise(at, 3.0 + month_shift);
        let rainy_day_ratio = n * 0.6;
        Ok(WeatherSummary {
            rainy_day_ratio,
            average_high_c: 30.0 - at.latitude.abs() * 0.4 + n * 6.0,
            average_precip_mm: rainy_day_ratio * 10.0,
        })
    }

    async fn route(&self, from: Coordinates, to: Coordinates) -> Result<RouteSummary> {
        self.begin(Facet::Route)?;
        let estimate = estimate_route(from, to);
        Ok(RouteSummary {
            distance_km: estimate.distance_km,
            drive_minutes: estimate.drive_minutes.map(|m| m * 1.1),
            estimated: false,
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
