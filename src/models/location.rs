//! Location and coordinate models

use crate::{AirSenseError, Result};
use serde::{Deserialize, Serialize};

/// A geocoded place, as returned to the dashboard
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees
    #[serde(rename = "lat")]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[serde(rename = "lon")]
    pub longitude: f64,
    /// Location name as reported by the geocoder
    pub name: String,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, name: String) -> Self {
        Self {
            latitude,
            longitude,
            name,
        }
    }
}

/// A point queried for weather and pollution data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse the raw `lat`/`lon` query values.
    ///
    /// Both must be present and non-empty, then both must be numeric.
    /// Ranges are not checked; the upstream API decides what it accepts.
    ///
    /// Non-numeric values are rejected here with `InvalidRequest` (400)
    /// instead of being forwarded verbatim, which used to surface as an
    /// upstream failure (500) and put arbitrary text into the upstream URL.
    pub fn parse(lat: Option<&str>, lon: Option<&str>) -> Result<Self> {
        let (lat, lon) = match (non_empty(lat), non_empty(lon)) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => {
                return Err(AirSenseError::invalid_request(
                    "Latitude and longitude are required",
                ));
            }
        };

        match (lat.parse::<f64>(), lon.parse::<f64>()) {
            (Ok(latitude), Ok(longitude)) if latitude.is_finite() && longitude.is_finite() => {
                Ok(Self::new(latitude, longitude))
            }
            _ => Err(AirSenseError::invalid_request(
                "Latitude and longitude must be numeric",
            )),
        }
    }

    /// Format as `lat,lon` for log fields
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4},{:.4}", self.latitude, self.longitude)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
