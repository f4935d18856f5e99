//! OpenWeather response payloads and their conversion into service models

use crate::models::air_quality::Components;
use crate::models::{HourlyPoint, Location};
use crate::{AirSenseError, Result};
use serde::Deserialize;

/// One candidate from the direct geocoding endpoint
#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingResult {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl From<GeocodingResult> for Location {
    fn from(geocoding: GeocodingResult) -> Self {
        Location::new(geocoding.lat, geocoding.lon, geocoding.name)
    }
}

/// Current weather response, reduced to the readings the dashboard shows
#[derive(Debug, Deserialize, Clone)]
pub struct CurrentWeatherResponse {
    pub main: MainReadings,
    /// Visibility in meters
    pub visibility: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MainReadings {
    /// Relative humidity in percent
    pub humidity: i64,
}

/// Shared shape of the current and forecast air pollution responses
#[derive(Debug, Deserialize, Clone)]
pub struct AirPollutionResponse {
    pub list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AirPollutionEntry {
    /// Unix timestamp in seconds
    pub dt: i64,
    pub main: AirQualityIndex,
    pub components: Components,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AirQualityIndex {
    pub aqi: i64,
}

impl AirPollutionResponse {
    /// The current reading is the first list entry
    pub fn current(&self) -> Result<&AirPollutionEntry> {
        self.list
            .first()
            .ok_or_else(|| AirSenseError::upstream("air pollution response contained no readings"))
    }
}

impl AirPollutionEntry {
    fn component(&self, name: &str) -> Result<f64> {
        self.components.get(name).copied().ok_or_else(|| {
            AirSenseError::upstream(format!(
                "forecast entry at {} is missing component '{name}'",
                self.dt
            ))
        })
    }

    pub fn to_hourly_point(&self) -> Result<HourlyPoint> {
        Ok(HourlyPoint::new(
            self.dt,
            self.component("pm2_5")?,
            self.component("pm10")?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocoding_result_to_location() {
        let geocoding: GeocodingResult = serde_json::from_value(serde_json::json!({
            "name": "Interlaken",
            "local_names": {"de": "Interlaken"},
            "lat": 46.6863,
            "lon": 7.8632,
            "country": "CH",
            "state": "Bern"
        }))
        .unwrap();

        let location: Location = geocoding.into();
        assert_eq!(location.name, "Interlaken");
        assert_eq!(location.latitude, 46.6863);
        assert_eq!(location.longitude, 7.8632);
    }

    #[test]
    fn test_current_weather_ignores_unused_fields() {
        let weather: CurrentWeatherResponse = serde_json::from_value(serde_json::json!({
            "weather": [{"id": 800, "main": "Clear"}],
            "main": {"temp": 21.3, "humidity": 45, "pressure": 1012},
            "visibility": 7000,
            "name": "Bern"
        }))
        .unwrap();

        assert_eq!(weather.main.humidity, 45);
        assert_eq!(weather.visibility, 7000);
    }

    #[test]
    fn test_empty_pollution_list_has_no_current_reading() {
        let response = AirPollutionResponse { list: Vec::new() };
        let err = response.current().unwrap_err();
        assert!(matches!(err, AirSenseError::Upstream { .. }));
    }

    #[test]
    fn test_forecast_entry_to_hourly_point() {
        let entry: AirPollutionEntry = serde_json::from_value(serde_json::json!({
            "dt": 1_606_482_000,
            "main": {"aqi": 2},
            "components": {"co": 270.367, "pm2_5": 5.5, "pm10": 7}
        }))
        .unwrap();

        let point = entry.to_hourly_point().unwrap();
        assert_eq!(point, HourlyPoint::new(1_606_482_000, 5.5, 7.0));
    }

    #[test]
    fn test_forecast_entry_missing_component() {
        let entry: AirPollutionEntry = serde_json::from_value(serde_json::json!({
            "dt": 1_606_482_000,
            "main": {"aqi": 2},
            "components": {"pm10": 7.0}
        }))
        .unwrap();

        let err = entry.to_hourly_point().unwrap_err();
        assert!(err.to_string().contains("pm2_5"));
    }
}
