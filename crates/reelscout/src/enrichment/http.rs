//! Enrichment gateway over HTTP.
//!
//! The gateway exposes one JSON endpoint per facet:
//!
//! - `GET {base}/hotels?lat=..&lon=..`
//! - `GET {base}/transit?lat=..&lon=..`
//! - `GET {base}/weather?lat=..&lon=..[&start=YYYY-MM-DD&end=YYYY-MM-DD]`
//! - `GET {base}/routes?from_lat=..&from_lon=..&to_lat=..&to_lon=..`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use reelscout_core::enrichment::{
    EnrichmentError, EnrichmentProvider, HotelSummary, Result, RouteSummary, TransitSummary,
    WeatherSummary,
};
use reelscout_core::location::Coordinates;
use reelscout_core::storage::DateRange;

fn map_transport_error(err: reqwest::Error) -> EnrichmentError {
    if err.is_timeout() {
        EnrichmentError::Timeout
    } else {
        EnrichmentError::Unavailable(err.to_string())
    }
}

/// `EnrichmentProvider` backed by an HTTP enrichment gateway.
#[derive(Debug, Clone)]
pub struct HttpEnrichmentProvider {
    client: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl HttpEnrichmentProvider {
    /// Builds a provider for `base_url`, sending `api_key` as a bearer token
    /// when present. Every request is bounded by `timeout`.
    pub fn new(base_url: Url, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(EnrichmentError::Unavailable(format!(
                "enrichment base URL cannot have paths: {base_url}"
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EnrichmentError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    fn endpoint(&self, name: &str, query: &[(&str, String)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(name);
        }
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let path = url.path().to_string();
        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::debug!(path = %path, "Enrichment gateway rate limited the request");
            return Err(EnrichmentError::RateLimited);
        }
        if !status.is_success() {
            return Err(EnrichmentError::Unavailable(format!(
                "{path} returned {status}"
            )));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        serde_json::from_slice(&body)
            .map_err(|e| EnrichmentError::InvalidResponse(format!("{path}: {e}")))
    }
}

fn point(at: Coordinates) -> [(&'static str, String); 2] {
    [("lat", at.latitude.to_string()), ("lon", at.longitude.to_string())]
}

#[async_trait]
impl EnrichmentProvider for HttpEnrichmentProvider {
    async fn hotels(&self, at: Coordinates) -> Result<HotelSummary> {
        self.get_json(self.endpoint("hotels", &point(at))).await
    }

    async fn transit(&self, at: Coordinates) -> Result<TransitSummary> {
        self.get_json(self.endpoint("transit", &point(at))).await
    }

    async fn weather(&self, at: Coordinates, window: Option<DateRange>) -> Result<WeatherSummary> {
        let mut query = point(at).to_vec();
        if let Some(window) = window {
            query.push(("start", window.start.format("%Y-%m-%d").to_string()));
            query.push(("end", window.end.format("%Y-%m-%d").to_string()));
        }
        self.get_json(self.endpoint("weather", &query)).await
    }

    async fn route(&self, from: Coordinates, to: Coordinates) -> Result<RouteSummary> {
        let query = [
            ("from_lat", from.latitude.to_string()),
            ("from_lon", from.longitude.to_string()),
            ("to_lat", to.latitude.to_string()),
            ("to_lon", to.longitude.to_string()),
        ];
        self.get_json(self.endpoint("routes", &query)).await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use httpmock::prelude::*;

    const SET: Coordinates = Coordinates {
        latitude: 51.5,
        longitude: -0.25,
    };

    fn provider(server: &MockServer, api_key: Option<&str>) -> HttpEnrichmentProvider {
        HttpEnrichmentProvider::new(
            Url::parse(&server.url("/v1")).unwrap(),
            api_key.map(str::to_string),
            Duration::from_secs(2),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_hotels_sends_coordinates_and_bearer_token() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/hotels")
                .query_param("lat", "51.5")
                .query_param("lon", "-0.25")
                .header("authorization", "Bearer s3cret");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "count": 14,
                    "average_nightly_rate": 132.5,
                    "nearest_km": 0.8
                }));
        });

        let hotels = provider(&server, Some("s3cret")).hotels(SET).await.unwrap();

        api_mock.assert();
        assert_eq!(hotels.count, 14);
        assert_eq!(hotels.average_nightly_rate, Some(132.5));
    }

    #[tokio::test]
    async fn test_weather_passes_window() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/weather")
                .query_param("start", "2025-07-01")
                .query_param("end", "2025-07-10");
            then.status(200).json_body(serde_json::json!({
                "rainy_day_ratio": 0.2,
                "average_high_c": 24.0,
                "average_precip_mm": 1.5
            }));
        });
        let window = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 10).unwrap(),
        )
        .unwrap();

        let weather = provider(&server, None)
            .weather(SET, Some(window))
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(weather.average_high_c, 24.0);
    }

    #[tokio::test]
    async fn test_route_query() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/routes")
                .query_param("from_lat", "51.5")
                .query_param("to_lon", "-0.1");
            then.status(200)
                .json_body(serde_json::json!({"distance_km": 14.2, "drive_minutes": 31.0}));
        });

        let route = provider(&server, None)
            .route(SET, Coordinates::new(51.52, -0.1))
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(route.distance_km, 14.2);
        assert!(!route.estimated);
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/transit");
            then.status(429);
        });

        let err = provider(&server, None).transit(SET).await.unwrap_err();

        assert_eq!(err, EnrichmentError::RateLimited);
    }

    #[tokio::test]
    async fn test_server_error_is_unavailable() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/hotels");
            then.status(503);
        });

        let err = provider(&server, None).hotels(SET).await.unwrap_err();

        assert!(matches!(err, EnrichmentError::Unavailable(msg) if msg.contains("503")));
    }

    #[tokio::test]
    async fn test_bad_body_is_invalid_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/transit");
            then.status(200).body("<html>maintenance</html>");
        });

        let err = provider(&server, None).transit(SET).await.unwrap_err();

        assert!(matches!(err, EnrichmentError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_slow_gateway_times_out() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/hotels");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(serde_json::json!({"count": 1}));
        });
        let slow = HttpEnrichmentProvider::new(
            Url::parse(&server.url("/v1")).unwrap(),
            None,
            Duration::from_millis(50),
        )
        .unwrap();

        let err = slow.hotels(SET).await.unwrap_err();

        assert_eq!(err, EnrichmentError::Timeout);
    }
}
