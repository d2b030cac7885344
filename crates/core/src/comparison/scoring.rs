//! Sub-score functions and per-location scoring.
//!
//! Every sub-score is in `[0, 1]` where 1 is best. A criterion without data
//! is left out and the remaining weights are renormalised, so a location is
//! never penalised for a facet the provider could not deliver.

use super::types::{Criterion, CriterionScore, LocationScore};
use super::weights::ScoringWeights;
use crate::enrichment::{
    estimate_route, HotelSummary, LocationEnrichment, RouteSummary, TransitSummary,
    WeatherSummary,
};
use crate::location::{Facilities, Location, PermitRequirement};
use crate::project::Project;

/// Sub-score at or above which a criterion is listed as a strength.
pub const STRENGTH_THRESHOLD: f64 = 0.75;
/// Sub-score at or below which a criterion is listed as a weakness.
pub const WEAKNESS_THRESHOLD: f64 = 0.35;
/// Most comfortable daytime high for a shoot.
pub const IDEAL_HIGH_C: f64 = 21.0;
/// Travel distance beyond which the distance score is 0.
pub const MAX_TRAVEL_KM: f64 = 150.0;

fn unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Cheapest and dearest daily rate among the locations that have one.
pub fn cost_range<'a>(locations: impl IntoIterator<Item = &'a Location>) -> Option<(f64, f64)> {
    locations
        .into_iter()
        .filter_map(|location| location.daily_rate)
        .fold(None, |range, rate| match range {
            None => Some((rate, rate)),
            Some((min, max)) => Some((f64::min(min, rate), f64::max(max, rate))),
        })
}

/// Cost sub-score.
///
/// With a budget the rate is judged against it (free is 1, twice the budget
/// or more is 0). Without one the rate is placed within `range`.
pub fn cost_score(rate: f64, budget: Option<f64>, range: Option<(f64, f64)>) -> f64 {
    match (budget, range) {
        (Some(budget), _) if budget > 0.0 => unit(1.0 - rate / (2.0 * budget)),
        (_, Some((min, max))) if max > min => unit((max - rate) / (max - min)),
        _ => 1.0,
    }
}

/// Accommodation sub-score from nearby hotels.
pub fn accommodation_score(hotels: &HotelSummary) -> f64 {
    if hotels.count == 0 {
        return 0.0;
    }
    let supply = unit(f64::from(hotels.count) / 10.0);
    let proximity = hotels
        .nearest_km
        .map(|km| 1.0 - unit(km / 20.0))
        .unwrap_or(0.0);
    unit(0.6 * supply + 0.4 * proximity)
}

/// Transit sub-score from nearby stations.
pub fn transit_score(transit: &TransitSummary) -> f64 {
    let stations = unit(f64::from(transit.stations_within_1km) / 3.0);
    let proximity = transit
        .nearest_station_km
        .map(|km| 1.0 - unit(km / 5.0))
        .unwrap_or(0.0);
    unit(0.7 * stations + 0.3 * proximity)
}

/// Weather sub-score: dry days dominate, mild temperatures help.
pub fn weather_score(weather: &WeatherSummary) -> f64 {
    let dry = 1.0 - unit(weather.rainy_day_ratio);
    let comfort = 1.0 - unit((weather.average_high_c - IDEAL_HIGH_C).abs() / 20.0);
    unit(0.7 * dry + 0.3 * comfort)
}

/// Distance sub-score from the route to the production base.
pub fn distance_score(route: &RouteSummary) -> f64 {
    1.0 - unit(route.distance_km / MAX_TRAVEL_KM)
}

/// Logistics sub-score from on-site facilities and the permit burden.
pub fn logistics_score(facilities: &Facilities, permit: PermitRequirement) -> f64 {
    let flag = |present: bool| if present { 1.0 } else { 0.0 };
    let raw = 0.4 * unit(f64::from(facilities.parking_spaces) / 20.0)
        + 0.25 * flag(facilities.power_available)
        + 0.15 * flag(facilities.restrooms)
        + 0.2 * flag(facilities.holding_area);
    unit(raw * permit.logistics_factor())
}

/// Computes the available sub-scores for a location.
fn sub_scores(
    location: &Location,
    project: &Project,
    enrichment: Option<&LocationEnrichment>,
    cost_range: Option<(f64, f64)>,
) -> Vec<(Criterion, Option<f64>)> {
    let cost = location
        .daily_rate
        .map(|rate| cost_score(rate, project.daily_budget, cost_range));
    let accommodation = enrichment
        .and_then(|e| e.hotels.as_ref())
        .map(accommodation_score);
    let transit = enrichment
        .and_then(|e| e.transit.as_ref())
        .map(transit_score);
    let weather = enrichment
        .and_then(|e| e.weather.as_ref())
        .map(weather_score);
    let distance = project.base.map(|base| {
        match enrichment.and_then(|e| e.route.as_ref()) {
            Some(route) => distance_score(route),
            None => distance_score(&estimate_route(base, location.coordinates)),
        }
    });
    let logistics = Some(logistics_score(&location.facilities, location.permit));

    vec![
        (Criterion::Cost, cost),
        (Criterion::Accommodation, accommodation),
        (Criterion::Transit, transit),
        (Criterion::Weather, weather),
        (Criterion::Distance, distance),
        (Criterion::Logistics, logistics),
    ]
}

/// Scores one location.
///
/// `cost_range` is the cheapest/dearest rate of the compared set and is only
/// used when the project has no budget (see [`cost_range`]). The returned
/// score is unranked (`rank == 0`).
pub fn score_location(
    location: &Location,
    project: &Project,
    enrichment: Option<&LocationEnrichment>,
    cost_range: Option<(f64, f64)>,
    weights: &ScoringWeights,
) -> LocationScore {
    let scores = sub_scores(location, project, enrichment, cost_range);

    let missing: Vec<Criterion> = scores
        .iter()
        .filter(|(_, score)| score.is_none())
        .map(|(criterion, _)| *criterion)
        .collect();
    let available: Vec<(Criterion, f64)> = scores
        .into_iter()
        .filter_map(|(criterion, score)| score.map(|s| (criterion, s)))
        .collect();

    // Finite weights can still overflow their sum; rescale by the largest.
    let raw_sum: f64 = available.iter().map(|(c, _)| weights.get(*c)).sum();
    let scale = if raw_sum.is_finite() {
        1.0
    } else {
        available
            .iter()
            .map(|(c, _)| weights.get(*c))
            .fold(0.0, f64::max)
    };
    let weight_of = |criterion: Criterion| weights.get(criterion) / scale;
    let weight_sum: f64 = available.iter().map(|(c, _)| weight_of(*c)).sum();

    let breakdown: Vec<CriterionScore> = available
        .iter()
        .map(|(criterion, score)| {
            let weight = if weight_sum > 0.0 {
                weight_of(*criterion) / weight_sum
            } else {
                0.0
            };
            CriterionScore {
                criterion: *criterion,
                score: *score,
                weight,
                contribution: score * weight * 100.0,
            }
        })
        .collect();

    let total: f64 = breakdown.iter().map(|entry| entry.contribution).sum();

    let weighted = || breakdown.iter().filter(|entry| entry.weight > 0.0);
    let strengths = weighted()
        .filter(|entry| entry.score >= STRENGTH_THRESHOLD)
        .map(|entry| entry.criterion)
        .collect();
    let weaknesses = weighted()
        .filter(|entry| entry.score <= WEAKNESS_THRESHOLD)
        .map(|entry| entry.criterion)
        .collect();

    LocationScore {
        location_id: location.id,
        name: location.name.clone(),
        rank: 0,
        total: round2(total).clamp(0.0, 100.0),
        daily_rate: location.daily_rate,
        breakdown,
        missing,
        strengths,
        weaknesses,
        warnings: enrichment
            .map(|e| e.warnings.clone())
            .unwrap_or_default(),
    }
}
