//! Combined air quality snapshot served to the dashboard

use crate::categories::{AqiCategory, HealthCategory, HumidityCategory, VisibilityCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pollutant name (`co`, `no2`, `pm2_5`, ...) to concentration in μg/m³
pub type Components = BTreeMap<String, f64>;

/// Current conditions plus the hourly particulate forecast for one point
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AirQualitySnapshot {
    /// OpenWeather air quality index, 1 (best) to 5 (worst)
    pub aqi: i64,
    pub aqi_category: AqiCategory,
    /// Relative humidity in percent
    pub humidity: i64,
    pub humidity_category: HumidityCategory,
    /// Visibility in kilometers, one decimal place
    pub visibility: f64,
    /// Category of the unrounded visibility in meters
    pub visibility_category: VisibilityCategory,
    /// `6 - aqi`, 5 being best
    pub health_index: i64,
    pub health_category: HealthCategory,
    /// Raw pollutant concentrations of the current reading
    pub components: Components,
    /// Forecast points in upstream order
    pub hourly: Vec<HourlyPoint>,
}

/// One forecast entry of the particulate trend chart
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HourlyPoint {
    /// Unix timestamp in seconds
    pub timestamp: i64,
    /// The timestamp as a string; formatting is left to the client
    pub time: String,
    pub pm25: f64,
    pub pm10: f64,
}

impl HourlyPoint {
    #[must_use]
    pub fn new(timestamp: i64, pm25: f64, pm10: f64) -> Self {
        Self {
            timestamp,
            time: timestamp.to_string(),
            pm25,
            pm10,
        }
    }
}
