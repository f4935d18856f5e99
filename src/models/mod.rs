//! Data models for the `AirSense` service
//!
//! - Location: geocoded places and query coordinates
//! - Air quality: the combined snapshot returned to the dashboard

pub mod air_quality;
pub mod location;

pub use air_quality::{AirQualitySnapshot, HourlyPoint};
pub use location::{Coordinates, Location};
