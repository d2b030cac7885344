//! Location CLI commands.

use clap::{Args, Parser, Subcommand};
use reelscout_core::location::{
    Coordinates, CreateLocationRequest, Facilities, ListLocationsQuery, LocationStatus,
    PermitRequirement, UpdateLocationRequest,
};
use uuid::Uuid;

/// Location management commands.
#[derive(Debug, Parser)]
pub struct LocationsCommand {
    #[command(subcommand)]
    pub action: LocationsAction,
}

/// Available location actions.
#[derive(Debug, Subcommand)]
pub enum LocationsAction {
    /// List a project's locations.
    List {
        /// Project ID.
        project_id: Uuid,
        /// Only locations with this status.
        #[arg(long)]
        status: Option<LocationStatus>,
        /// Include rejected locations.
        #[arg(long)]
        include_rejected: bool,
    },
    /// Add a scouted location to a project.
    Create {
        /// Project ID.
        project_id: Uuid,
        /// Location name.
        #[arg(long)]
        name: String,
        /// Latitude.
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude.
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[command(flatten)]
        fields: LocationFields,
    },
    /// Get location by ID.
    Get {
        /// Location ID.
        id: Uuid,
    },
    /// Update a location.
    Update {
        /// Location ID.
        id: Uuid,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New latitude.
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// New longitude.
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
        #[command(flatten)]
        fields: LocationFields,
    },
    /// Delete location by ID.
    Delete {
        /// Location ID.
        id: Uuid,
    },
    /// Show hotels, transit, weather and route data for a location.
    Enrich {
        /// Location ID.
        id: Uuid,
        /// Bypass cached enrichment.
        #[arg(long)]
        refresh: bool,
    },
}

/// Optional location attributes shared by create and update.
#[derive(Debug, Args)]
pub struct LocationFields {
    /// Street address.
    #[arg(long)]
    pub address: Option<String>,
    /// Daily hire rate.
    #[arg(long)]
    pub rate: Option<f64>,
    /// Permit requirement (none, simple, complex).
    #[arg(long)]
    pub permit: Option<PermitRequirement>,
    /// Parking spaces on or next to the site.
    #[arg(long)]
    pub parking: Option<u32>,
    /// Mains power available (true/false).
    #[arg(long)]
    pub power: Option<bool>,
    /// Restrooms on site (true/false).
    #[arg(long)]
    pub restrooms: Option<bool>,
    /// Holding area for cast and extras (true/false).
    #[arg(long)]
    pub holding_area: Option<bool>,
    /// Scouting status (scouted, shortlisted, confirmed, rejected).
    #[arg(long)]
    pub status: Option<LocationStatus>,
    /// Scout notes.
    #[arg(long)]
    pub notes: Option<String>,
}

impl LocationFields {
    fn facilities(&self) -> Option<Facilities> {
        if self.parking.is_none()
            && self.power.is_none()
            && self.restrooms.is_none()
            && self.holding_area.is_none()
        {
            return None;
        }
        Some(Facilities {
            parking_spaces: self.parking.unwrap_or_default(),
            power_available: self.power.unwrap_or_default(),
            restrooms: self.restrooms.unwrap_or_default(),
            holding_area: self.holding_area.unwrap_or_default(),
        })
    }

    /// Build a create request.
    pub fn into_create(self, name: String, coordinates: Coordinates) -> CreateLocationRequest {
        let mut req = CreateLocationRequest::new(name, coordinates);
        req.facilities = self.facilities().unwrap_or_default();
        req.address = self.address;
        req.daily_rate = self.rate;
        req.permit = self.permit.unwrap_or_default();
        req.status = self.status.unwrap_or_default();
        req.notes = self.notes;
        req
    }

    /// Build a partial update request.
    pub fn into_update(
        self,
        name: Option<String>,
        coordinates: Option<Coordinates>,
    ) -> UpdateLocationRequest {
        UpdateLocationRequest {
            name,
            coordinates,
            facilities: self.facilities(),
            address: self.address,
            daily_rate: self.rate,
            permit: self.permit,
            status: self.status,
            notes: self.notes,
        }
    }
}

/// Build the list query from CLI flags.
pub fn list_query(status: Option<LocationStatus>, include_rejected: bool) -> ListLocationsQuery {
    ListLocationsQuery {
        status,
        include_rejected,
    }
}
