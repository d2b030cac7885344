use uuid::Uuid;

use crate::enrichment::Facet;
use crate::location::Coordinates;
use crate::project::TenantId;
use crate::storage::DateRange;

/// Decimals kept from coordinates in enrichment keys (about 110 m).
pub const CACHE_COORDINATE_DECIMALS: i32 = 3;

/// Returns the cache key for a project.
pub fn project_key(project_id: Uuid) -> String {
    format!("project:{}", project_id)
}

/// Returns the cache key for the list of a project's locations.
pub fn project_locations_key(project_id: Uuid) -> String {
    format!("project:{}:locations", project_id)
}

/// Returns the pattern matching every key derived from a project.
pub fn project_pattern(project_id: Uuid) -> String {
    format!("project:{}:*", project_id)
}

/// Returns the cache key for the list of a tenant's projects.
pub fn tenant_projects_key(tenant_id: TenantId) -> String {
    format!("tenant:{}:projects", tenant_id)
}

/// Returns the cache key for a location.
pub fn location_key(location_id: Uuid) -> String {
    format!("location:{}", location_id)
}

fn coordinate_segment(at: Coordinates) -> String {
    let at = at.rounded(CACHE_COORDINATE_DECIMALS);
    format!("{:.3}:{:.3}", at.latitude, at.longitude)
}

/// Returns the cache key for one enrichment facet at a position.
///
/// Coordinates are rounded so nearby locations share third-party data. The
/// weather facet also depends on the shoot window.
///
/// # Examples
///
/// ```
/// use reelscout_core::cache::enrichment_key;
/// use reelscout_core::enrichment::Facet;
/// use reelscout_core::location::Coordinates;
///
/// let key = enrichment_key(Facet::Hotels, Coordinates::new(51.50072, -0.12462), None);
/// assert_eq!(key, "enrichment:hotels:51.501:-0.125");
/// ```
pub fn enrichment_key(facet: Facet, at: Coordinates, window: Option<&DateRange>) -> String {
    match window {
        Some(window) => format!(
            "enrichment:{}:{}:{}:{}",
            facet,
            coordinate_segment(at),
            window.start,
            window.end
        ),
        None => format!("enrichment:{}:{}", facet, coordinate_segment(at)),
    }
}

/// Returns the cache key for a route between two positions.
pub fn route_key(from: Coordinates, to: Coordinates) -> String {
    format!(
        "enrichment:{}:{}:{}",
        Facet::Route,
        coordinate_segment(from),
        coordinate_segment(to)
    )
}

/// Returns the pattern matching every cached value of a facet.
pub fn enrichment_pattern(facet: Facet) -> String {
    format!("enrichment:{}:*", facet)
}

/// Extracts the project ID from a cache key, if present.
///
/// Returns `None` for keys that are not derived from a project.
///
/// # Examples
///
/// ```
/// use reelscout_core::cache::extract_project_id_from_key;
/// use uuid::Uuid;
///
/// let id = Uuid::nil();
/// assert_eq!(extract_project_id_from_key(&format!("project:{id}:locations")), Some(id));
/// assert_eq!(extract_project_id_from_key("location:123"), None);
/// ```
pub fn extract_project_id_from_key(key: &str) -> Option<Uuid> {
    let rest = key.strip_prefix("project:")?;
    let id = rest.split(':').next()?;
    Uuid::parse_str(id).ok()
}

/// Extracts the project ID from a pattern, unless the ID position is a wildcard.
pub fn extract_project_id_from_pattern(pattern: &str) -> Option<Uuid> {
    let rest = pattern.strip_prefix("project:")?;
    let id = rest.split(':').next()?;
    if id.contains('*') {
        return None;
    }
    Uuid::parse_str(id).ok()
}

/// Returns true for `project:{id}` itself.
pub fn is_project_metadata_key(key: &str) -> bool {
    key.strip_prefix("project:")
        .is_some_and(|rest| !rest.contains(':') && Uuid::parse_str(rest).is_ok())
}

/// Returns true for keys below a project, such as `project:{id}:locations`.
pub fn is_project_child_key(key: &str) -> bool {
    match key.strip_prefix("project:").and_then(|rest| rest.split_once(':')) {
        Some((id, child)) => !child.is_empty() && Uuid::parse_str(id).is_ok(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const NIL: &str = "00000000-0000-0000-0000-000000000000";

    #[test]
    fn test_project_keys() {
        assert_eq!(project_key(Uuid::nil()), format!("project:{NIL}"));
        assert_eq!(
            project_locations_key(Uuid::nil()),
            format!("project:{NIL}:locations")
        );
        assert_eq!(project_pattern(Uuid::nil()), format!("project:{NIL}:*"));
        assert_eq!(
            tenant_projects_key(TenantId::from_uuid(Uuid::nil())),
            format!("tenant:{NIL}:projects")
        );
        assert_eq!(location_key(Uuid::nil()), format!("location:{NIL}"));
    }

    #[test]
    fn test_nearby_positions_share_enrichment_key() {
        let a = Coordinates::new(40.41681, -3.70381);
        let b = Coordinates::new(40.41659, -3.70412);

        assert_eq!(
            enrichment_key(Facet::Transit, a, None),
            enrichment_key(Facet::Transit, b, None)
        );
        assert_ne!(
            enrichment_key(Facet::Transit, a, None),
            enrichment_key(Facet::Transit, Coordinates::new(40.42, -3.70381), None)
        );
    }

    #[test]
    fn test_positions_either_side_of_zero_share_enrichment_key() {
        let west = Coordinates::new(10.0, -0.0001);
        let east = Coordinates::new(10.0, 0.0001);

        assert_eq!(
            enrichment_key(Facet::Hotels, west, None),
            "enrichment:hotels:10.000:0.000"
        );
        assert_eq!(
            enrichment_key(Facet::Hotels, west, None),
            enrichment_key(Facet::Hotels, east, None)
        );
        assert_eq!(
            route_key(Coordinates::new(-0.0002, 5.0), east),
            "enrichment:route:0.000:5.000:10.000:0.000"
        );
    }

    #[test]
    fn test_weather_key_includes_window() {
        let window = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        )
        .unwrap();

        assert_eq!(
            enrichment_key(Facet::Weather, Coordinates::new(1.0, 2.0), Some(&window)),
            "enrichment:weather:1.000:2.000:2025-03-01:2025-03-14"
        );
    }

    #[test]
    fn test_route_key_is_directional() {
        let a = Coordinates::new(1.0, 2.0);
        let b = Coordinates::new(3.0, 4.0);

        assert_eq!(route_key(a, b), "enrichment:route:1.000:2.000:3.000:4.000");
        assert_ne!(route_key(a, b), route_key(b, a));
    }

    #[test]
    fn test_project_key_classification() {
        let id = Uuid::nil();

        assert!(is_project_metadata_key(&project_key(id)));
        assert!(!is_project_metadata_key(&project_locations_key(id)));
        assert!(!is_project_metadata_key("project:not-a-uuid"));

        assert!(is_project_child_key(&project_locations_key(id)));
        assert!(!is_project_child_key(&project_key(id)));
        assert!(!is_project_child_key(&location_key(id)));
    }

    #[test]
    fn test_extract_project_id() {
        let id = Uuid::nil();

        assert_eq!(extract_project_id_from_key(&project_key(id)), Some(id));
        assert_eq!(extract_project_id_from_key("project:nope:locations"), None);
        assert_eq!(extract_project_id_from_pattern(&project_pattern(id)), Some(id));
        assert_eq!(extract_project_id_from_pattern("project:*:locations"), None);
        assert_eq!(extract_project_id_from_pattern(&enrichment_pattern(Facet::Hotels)), None);
    }
}
