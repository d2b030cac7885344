use super::types::RouteSummary;
use crate::location::{haversine_km, Coordinates};

/// Ratio of road distance to straight-line distance.
pub const ROAD_FACTOR: f64 = 1.3;

/// Average door-to-door driving speed.
pub const AVERAGE_SPEED_KMH: f64 = 50.0;

/// Offline route estimate used when no routing service answers.
pub fn estimate_route(from: Coordinates, to: Coordinates) -> RouteSummary {
    let distance_km = haversine_km(from, to) * ROAD_FACTOR;
    RouteSummary {
        distance_km,
        drive_minutes: Some(distance_km / AVERAGE_SPEED_KMH * 60.0),
        estimated: true,
    }
}
