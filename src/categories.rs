//! Display categories for air quality, health, humidity and visibility readings.
//!
//! Every lookup is total: values outside the documented table map to an
//! explicit `Unknown` member (AQI based lookups) or fall into the open-ended
//! outer range (humidity and visibility).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category for the 1 to 5 OpenWeather air quality index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AqiCategory {
    Good,
    Fair,
    Moderate,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
    Unknown,
}

/// Health risk category derived from the air quality index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthCategory {
    Excellent,
    Fine,
    Caution,
    #[serde(rename = "High Risk")]
    HighRisk,
    Hazardous,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HumidityCategory {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibilityCategory {
    #[serde(rename = "Very Poor")]
    VeryPoor,
    Poor,
    Moderate,
    Good,
}

impl AqiCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Fair => "Fair",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::Poor => "Poor",
            AqiCategory::VeryPoor => "Very Poor",
            AqiCategory::Unknown => "Unknown",
        }
    }
}

impl HealthCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HealthCategory::Excellent => "Excellent",
            HealthCategory::Fine => "Fine",
            HealthCategory::Caution => "Caution",
            HealthCategory::HighRisk => "High Risk",
            HealthCategory::Hazardous => "Hazardous",
            HealthCategory::Unknown => "Unknown",
        }
    }
}

impl HumidityCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HumidityCategory::Low => "Low",
            HumidityCategory::Moderate => "Moderate",
            HumidityCategory::High => "High",
        }
    }
}

impl VisibilityCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VisibilityCategory::VeryPoor => "Very Poor",
            VisibilityCategory::Poor => "Poor",
            VisibilityCategory::Moderate => "Moderate",
            VisibilityCategory::Good => "Good",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for HealthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for HumidityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for VisibilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[must_use]
pub fn aqi_category(aqi: i64) -> AqiCategory {
    match aqi {
        1 => AqiCategory::Good,
        2 => AqiCategory::Fair,
        3 => AqiCategory::Moderate,
        4 => AqiCategory::Poor,
        5 => AqiCategory::VeryPoor,
        _ => AqiCategory::Unknown,
    }
}

#[must_use]
pub fn health_category(aqi: i64) -> HealthCategory {
    match aqi {
        1 => HealthCategory::Excellent,
        2 => HealthCategory::Fine,
        3 => HealthCategory::Caution,
        4 => HealthCategory::HighRisk,
        5 => HealthCategory::Hazardous,
        _ => HealthCategory::Unknown,
    }
}

/// Humidity in percent. 30 and 60 both belong to `Moderate`.
#[must_use]
pub fn humidity_category(humidity: i64) -> HumidityCategory {
    match humidity {
        ..30 => HumidityCategory::Low,
        30..=60 => HumidityCategory::Moderate,
        _ => HumidityCategory::High,
    }
}

/// Visibility in meters. 5000 is the inclusive top of `Poor`, 10000 the
/// inclusive top of `Moderate`.
#[must_use]
pub fn visibility_category(visibility_meters: i64) -> VisibilityCategory {
    match visibility_meters {
        ..1000 => VisibilityCategory::VeryPoor,
        1000..=5000 => VisibilityCategory::Poor,
        5001..=10000 => VisibilityCategory::Moderate,
        _ => VisibilityCategory::Good,
    }
}

/// Inverse of the AQI on the same 1 to 5 scale, 5 being best. Not clamped.
#[must_use]
pub fn health_index(aqi: i64) -> i64 {
    6 - aqi
}

/// Meters to kilometers, rounded to one decimal place.
///
/// Rounds the binary value of `meters / 1000`, so exact ties go to the even
/// digit (1250 -> 1.2) and values just below a tie round down (4550 -> 4.5).
#[must_use]
pub fn visibility_km(visibility_meters: i64) -> f64 {
    let km = visibility_meters as f64 / 1000.0;
    format!("{km:.1}").parse().unwrap_or(km)
}
