mod error;
mod geo;
mod operations;
mod requests;
mod types;

pub use error::LocationError;
pub use geo::{haversine_km, Coordinates, EARTH_RADIUS_KM};
pub use operations::{filter_locations, validate_location, ListLocationsQuery};
pub use requests::{CreateLocationRequest, UpdateLocationRequest};
pub use types::{Facilities, Location, LocationStatus, PermitRequirement};
