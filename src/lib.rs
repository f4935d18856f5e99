//! `AirSense` - Air quality dashboard backend
//!
//! Resolves city names to coordinates and aggregates OpenWeather current
//! weather, air pollution and pollution forecast data into one categorized
//! snapshot for the dashboard frontend.

pub mod aggregator;
pub mod api;
pub mod categories;
pub mod config;
pub mod error;
pub mod location_resolver;
pub mod models;
pub mod openweather;
pub mod telemetry;
pub mod web;

// Re-export core types for public API
pub use aggregator::AirQualityAggregator;
pub use config::AirSenseConfig;
pub use error::AirSenseError;
pub use location_resolver::GeocodeResolver;
pub use models::{AirQualitySnapshot, Coordinates, HourlyPoint, Location};
pub use openweather::OpenWeatherClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AirSenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
