use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One kind of enrichment data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Hotels,
    Transit,
    Weather,
    Route,
}

impl Facet {
    pub const ALL: [Facet; 4] = [Facet::Hotels, Facet::Transit, Facet::Weather, Facet::Route];

    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::Hotels => "hotels",
            Facet::Transit => "transit",
            Facet::Weather => "weather",
            Facet::Route => "route",
        }
    }
}

impl std::fmt::Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accommodation near a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelSummary {
    /// Hotels within the provider's search radius.
    pub count: u32,
    pub average_nightly_rate: Option<f64>,
    pub nearest_km: Option<f64>,
}

/// Public transport near a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitSummary {
    pub stations_within_1km: u32,
    pub nearest_station_km: Option<f64>,
}

/// Expected weather over the shoot window (or climatology without one).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    /// Share of days with meaningful rain, 0.0 to 1.0.
    pub rainy_day_ratio: f64,
    pub average_high_c: f64,
    pub average_precip_mm: f64,
}

/// Travel from the production base to a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub distance_km: f64,
    pub drive_minutes: Option<f64>,
    /// True when computed offline instead of by a routing service.
    #[serde(default)]
    pub estimated: bool,
}

/// Everything known about a location from third parties.
///
/// Facets are independent: a facet that could not be fetched is `None` and a
/// warning explains why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationEnrichment {
    pub location_id: Uuid,
    pub hotels: Option<HotelSummary>,
    pub transit: Option<TransitSummary>,
    pub weather: Option<WeatherSummary>,
    pub route: Option<RouteSummary>,
    #[serde(default)]
    pub warnings: Vec<String>,
    pub fetched_at: DateTime<Utc>,
}

impl LocationEnrichment {
    /// Creates an enrichment with no facets.
    pub fn empty(location_id: Uuid) -> Self {
        Self {
            location_id,
            hotels: None,
            transit: None,
            weather: None,
            route: None,
            warnings: Vec::new(),
            fetched_at: Utc::now(),
        }
    }

    /// Facets that are absent.
    pub fn missing_facets(&self) -> Vec<Facet> {
        Facet::ALL
            .into_iter()
            .filter(|facet| match facet {
                Facet::Hotels => self.hotels.is_none(),
                Facet::Transit => self.transit.is_none(),
                Facet::Weather => self.weather.is_none(),
                Facet::Route => self.route.is_none(),
            })
            .collect()
    }

    /// Returns true if every facet is present.
    pub fn is_complete(&self) -> bool {
        self.missing_facets().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_facets() {
        let mut enrichment = LocationEnrichment::empty(Uuid::nil());
        assert_eq!(enrichment.missing_facets(), Facet::ALL.to_vec());

        enrichment.transit = Some(TransitSummary {
            stations_within_1km: 2,
            nearest_station_km: Some(0.4),
        });

        assert_eq!(
            enrichment.missing_facets(),
            vec![Facet::Hotels, Facet::Weather, Facet::Route]
        );
        assert!(!enrichment.is_complete());
    }

    #[test]
    fn test_route_estimated_defaults_to_false() {
        let route: RouteSummary =
            serde_json::from_str(r#"{"distance_km": 12.5, "drive_minutes": 20}"#).unwrap();

        assert!(!route.estimated);
        assert_eq!(route.drive_minutes, Some(20.0));
    }
}
