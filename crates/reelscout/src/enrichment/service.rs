//! Cache-aside enrichment on top of an `EnrichmentProvider`.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures_util::future::join_all;
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use reelscout_core::cache::{enrichment_key, from_cache_bytes, route_key, to_cache_bytes, Cache};
use reelscout_core::enrichment::{
    estimate_route, EnrichmentError, EnrichmentProvider, Facet, LocationEnrichment,
};
use reelscout_core::location::Location;
use reelscout_core::project::Project;

fn keep_facet<T>(
    location_id: Uuid,
    facet: Facet,
    result: Result<T, EnrichmentError>,
    warnings: &mut Vec<String>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(
                location_id = %location_id,
                facet = %facet,
                error = %err,
                "Enrichment facet unavailable"
            );
            warnings.push(format!("{facet} unavailable: {err}"));
            None
        }
    }
}

/// Fetches enrichment facets through the cache.
///
/// Each facet is cached separately under a key built from rounded
/// coordinates, so nearby locations share entries. A facet that cannot be
/// fetched is left empty and explained in `warnings`; enrichment itself never
/// fails.
pub struct EnrichmentService {
    provider: Arc<dyn EnrichmentProvider>,
    cache: Arc<dyn Cache>,
    ttl: Duration,
}

impl EnrichmentService {
    pub fn new(provider: Arc<dyn EnrichmentProvider>, cache: Arc<dyn Cache>, ttl: Duration) -> Self {
        Self {
            provider,
            cache,
            ttl,
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Enriches one location. The project supplies the base for routes and
    /// the shoot window for weather.
    ///
    /// With `refresh`, cached values are ignored but fresh results are still
    /// written back.
    pub async fn enrich(
        &self,
        location: &Location,
        project: &Project,
        refresh: bool,
    ) -> LocationEnrichment {
        let at = location.coordinates;
        let window = project.shoot_window;
        let provider = self.provider.as_ref();

        let route = async {
            let base = project.base?;
            let fetched = self
                .cached(route_key(base, at), Facet::Route, refresh, provider.route(base, at))
                .await;
            Some(fetched.map_err(|err| (estimate_route(base, at), err)))
        };

        let (hotels, transit, weather, route) = tokio::join!(
            self.cached(
                enrichment_key(Facet::Hotels, at, None),
                Facet::Hotels,
                refresh,
                provider.hotels(at),
            ),
            self.cached(
                enrichment_key(Facet::Transit, at, None),
                Facet::Transit,
                refresh,
                provider.transit(at),
            ),
            self.cached(
                enrichment_key(Facet::Weather, at, window.as_ref()),
                Facet::Weather,
                refresh,
                provider.weather(at, window),
            ),
            route,
        );

        let mut warnings = Vec::new();
        let hotels = keep_facet(location.id, Facet::Hotels, hotels, &mut warnings);
        let transit = keep_facet(location.id, Facet::Transit, transit, &mut warnings);
        let weather = keep_facet(location.id, Facet::Weather, weather, &mut warnings);

        let route = match route {
            Some(Ok(route)) => Some(route),
            Some(Err((estimate, err))) => {
                tracing::warn!(
                    location_id = %location.id,
                    error = %err,
                    "Routing unavailable, using straight-line estimate"
                );
                warnings.push(format!(
                    "route unavailable: {err}; distance is a straight-line estimate"
                ));
                Some(estimate)
            }
            None => None,
        };

        LocationEnrichment {
            location_id: location.id,
            hotels,
            transit,
            weather,
            route,
            warnings,
            fetched_at: Utc::now(),
        }
    }

    /// Enriches several locations concurrently, keyed by location id.
    pub async fn enrich_many(
        &self,
        locations: &[Location],
        project: &Project,
        refresh: bool,
    ) -> HashMap<Uuid, LocationEnrichment> {
        let enrichments =
            join_all(locations.iter().map(|l| self.enrich(l, project, refresh))).await;

        enrichments
            .into_iter()
            .map(|e| (e.location_id, e))
            .collect()
    }

    async fn cached<T, F>(
        &self,
        key: String,
        facet: Facet,
        refresh: bool,
        fetch: F,
    ) -> Result<T, EnrichmentError>
    where
        T: Serialize + DeserializeOwned,
        F: Future<Output = Result<T, EnrichmentError>>,
    {
        if !refresh {
            if let Ok(Some(bytes)) = self.cache.get(&key).await {
                match from_cache_bytes::<T>(&bytes) {
                    Ok(value) => {
                        tracing::trace!(key = %key, "Cache hit for enrichment");
                        return Ok(value);
                    }
                    Err(err) => {
                        tracing::warn!(key = %key, error = %err, "Cached enrichment is unreadable");
                    }
                }
            }
        }

        tracing::trace!(key = %key, facet = %facet, refresh, "Fetching enrichment");
        let value = fetch.await?;

        if let Ok(bytes) = to_cache_bytes(&value) {
            if let Err(err) = self.cache.set(&key, &bytes, Some(self.ttl)).await {
                tracing::warn!(key = %key, error = %err, "Failed to cache enrichment");
            }
        }

        Ok(value)
    }
}
