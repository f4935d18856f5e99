//! Air quality aggregation
//!
//! Combines current weather, current air pollution and the pollution forecast
//! for one point into a single categorized [`AirQualitySnapshot`].

use crate::categories::{
    aqi_category, health_category, health_index, humidity_category, visibility_category,
    visibility_km,
};
use crate::models::{AirQualitySnapshot, Coordinates, HourlyPoint};
use crate::openweather::{AirPollutionResponse, CurrentWeatherResponse, OpenWeatherClient};
use crate::Result;
use tracing::{debug, info};

/// Service building air quality snapshots from the upstream APIs
pub struct AirQualityAggregator;

impl AirQualityAggregator {
    /// Validate the raw `lat`/`lon` values and build the snapshot for them.
    ///
    /// Parameter and credential problems are reported before any upstream
    /// call is made.
    pub async fn get_air_quality(
        api_client: &OpenWeatherClient,
        lat: Option<&str>,
        lon: Option<&str>,
    ) -> Result<AirQualitySnapshot> {
        let coordinates = Coordinates::parse(lat, lon)?;
        api_client.api_key()?;
        Self::fetch_snapshot(api_client, coordinates).await
    }

    /// Fetch the three upstream payloads concurrently and merge them.
    ///
    /// The first failing call aborts the whole operation; nothing partial is
    /// returned.
    pub async fn fetch_snapshot(
        api_client: &OpenWeatherClient,
        coordinates: Coordinates,
    ) -> Result<AirQualitySnapshot> {
        info!(
            "Aggregating air quality for {}",
            coordinates.format_coordinates()
        );

        let (weather, pollution, forecast) = futures::try_join!(
            api_client.current_weather(coordinates),
            api_client.air_pollution(coordinates),
            api_client.air_pollution_forecast(coordinates),
        )?;

        Self::merge(&weather, &pollution, &forecast)
    }

    /// Combine the upstream payloads into the dashboard snapshot
    pub fn merge(
        weather: &CurrentWeatherResponse,
        pollution: &AirPollutionResponse,
        forecast: &AirPollutionResponse,
    ) -> Result<AirQualitySnapshot> {
        let current = pollution.current()?;
        let aqi = current.main.aqi;
        let humidity = weather.main.humidity;
        let visibility_meters = weather.visibility;

        let hourly = forecast
            .list
            .iter()
            .map(|entry| entry.to_hourly_point())
            .collect::<Result<Vec<HourlyPoint>>>()?;

        debug!(
            "Merged aqi={} humidity={} visibility={}m with {} forecast points",
            aqi,
            humidity,
            visibility_meters,
            hourly.len()
        );

        Ok(AirQualitySnapshot {
            aqi,
            aqi_category: aqi_category(aqi),
            humidity,
            humidity_category: humidity_category(humidity),
            visibility: visibility_km(visibility_meters),
            visibility_category: visibility_category(visibility_meters),
            health_index: health_index(aqi),
            health_category: health_category(aqi),
            components: current.components.clone(),
            hourly,
        })
    }
}
