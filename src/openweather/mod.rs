//! OpenWeather API client
//!
//! Thin async wrapper around the direct geocoding, current weather, air
//! pollution and air pollution forecast endpoints. Each call is a single
//! attempt bounded by the configured timeout; any transport failure, non-2xx
//! status or undecodable body becomes [`AirSenseError::Upstream`].

pub mod models;

use crate::config::UpstreamConfig;
use crate::models::Coordinates;
use crate::{AirSenseError, Result};
use anyhow::Context;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

pub use models::{AirPollutionEntry, AirPollutionResponse, CurrentWeatherResponse, GeocodingResult};

const USER_AGENT: &str = concat!("AirSense/", env!("CARGO_PKG_VERSION"));

/// Client for the OpenWeather APIs, shared by all request handlers
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl OpenWeatherClient {
    /// Create a new client from the upstream configuration
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client against an explicit base URL with the default timeout
    pub fn with_base_url(api_key: Option<&str>, base_url: &str) -> anyhow::Result<Self> {
        Self::new(&UpstreamConfig {
            api_key: api_key.map(str::to_string),
            base_url: base_url.to_string(),
            ..UpstreamConfig::default()
        })
    }

    /// The configured credential, or a configuration error when absent
    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| AirSenseError::configuration("API key is missing"))
    }

    /// Look up a city by name, returning at most one candidate
    #[instrument(skip(self))]
    pub async fn geocode(&self, city: &str) -> Result<Vec<GeocodingResult>> {
        let url = format!(
            "{}/geo/1.0/direct?q={}&limit=1&appid={}",
            self.base_url,
            urlencoding::encode(city),
            urlencoding::encode(self.api_key()?)
        );

        let results: Vec<GeocodingResult> = self.get_json("geocoding", &url).await?;
        if results.is_empty() {
            warn!("No geocoding results for '{}'", city);
        } else {
            debug!(
                "Geocoding results: {:?}",
                results
                    .iter()
                    .map(|r| format!("{} ({:.4}, {:.4})", r.name, r.lat, r.lon))
                    .collect::<Vec<_>>()
            );
        }
        Ok(results)
    }

    /// Current weather in metric units
    #[instrument(skip(self, coordinates), fields(coordinates = %coordinates.format_coordinates()))]
    pub async fn current_weather(&self, coordinates: Coordinates) -> Result<CurrentWeatherResponse> {
        let url = format!(
            "{}/data/2.5/weather?{}&units=metric",
            self.base_url,
            self.point_query(coordinates)?
        );
        self.get_json("weather", &url).await
    }

    /// Current air pollution; the first list entry is the current reading
    #[instrument(skip(self, coordinates), fields(coordinates = %coordinates.format_coordinates()))]
    pub async fn air_pollution(&self, coordinates: Coordinates) -> Result<AirPollutionResponse> {
        let url = format!(
            "{}/data/2.5/air_pollution?{}",
            self.base_url,
            self.point_query(coordinates)?
        );
        self.get_json("air pollution", &url).await
    }

    /// Hourly air pollution forecast
    #[instrument(skip(self, coordinates), fields(coordinates = %coordinates.format_coordinates()))]
    pub async fn air_pollution_forecast(
        &self,
        coordinates: Coordinates,
    ) -> Result<AirPollutionResponse> {
        let url = format!(
            "{}/data/2.5/air_pollution/forecast?{}",
            self.base_url,
            self.point_query(coordinates)?
        );
        self.get_json("air pollution forecast", &url).await
    }

    fn point_query(&self, coordinates: Coordinates) -> Result<String> {
        Ok(format!(
            "lat={}&lon={}&appid={}",
            coordinates.latitude,
            coordinates.longitude,
            urlencoding::encode(self.api_key()?)
        ))
    }

    /// Issue a GET and decode the JSON body.
    ///
    /// Error descriptions are stripped of the request URL, which carries the
    /// API key.
    async fn get_json<T: DeserializeOwned>(&self, operation: &str, url: &str) -> Result<T> {
        let start_time = Instant::now();
        debug!("Requesting {} data", operation);

        let response = self.client.get(url).send().await.map_err(|e| {
            let e = e.without_url();
            warn!("{} request failed: {}", operation, e);
            if e.is_timeout() {
                AirSenseError::upstream(format!("{operation} request timed out"))
            } else {
                AirSenseError::upstream(format!("{operation} request failed: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} request returned HTTP {}", operation, status);
            return Err(AirSenseError::upstream(format!(
                "{operation} request failed with status {status}"
            )));
        }

        let body = response.json::<T>().await.map_err(|e| {
            let e = e.without_url();
            warn!("Failed to parse {} response: {}", operation, e);
            AirSenseError::upstream(format!("invalid {operation} response: {e}"))
        })?;

        let total_duration = start_time.elapsed();
        info!(
            "Retrieved {} data in {:.3}s",
            operation,
            total_duration.as_secs_f64()
        );
        if total_duration.as_secs() > 5 {
            warn!(
                "Slow {} response: {:.3}s",
                operation,
                total_duration.as_secs_f64()
            );
        }

        Ok(body)
    }
}
