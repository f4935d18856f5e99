//! Location Resolution Module
//!
//! Resolves a free-text city name into the coordinates the dashboard uses for
//! its air quality request.

use crate::models::Location;
use crate::openweather::OpenWeatherClient;
use crate::{AirSenseError, Result};
use tracing::debug;

/// Service for resolving city names
pub struct GeocodeResolver;

impl GeocodeResolver {
    /// Resolve a city name to the first location the geocoder returns.
    ///
    /// Latitude, longitude and name are passed through unchanged.
    pub async fn resolve_city(api_client: &OpenWeatherClient, city: &str) -> Result<Location> {
        let city = city.trim();
        if city.is_empty() {
            return Err(AirSenseError::invalid_request("City name is required"));
        }
        api_client.api_key()?;

        debug!("Geocoding city name: {}", city);

        let location = api_client
            .geocode(city)
            .await?
            .into_iter()
            .next()
            .map(Location::from)
            .ok_or_else(|| AirSenseError::not_found("City not found"))?;

        debug!(
            "Resolved location: {} at ({}, {})",
            location.name, location.latitude, location.longitude
        );

        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_resolve_city_returns_first_result_verbatim() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .and(query_param("q", "Interlaken"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": "Interlaken", "lat": 46.686_347_5, "lon": 7.863_196_8, "country": "CH"}
            ])))
            .mount(&mock_server)
            .await;

        let client = OpenWeatherClient::with_base_url(Some("test_key"), &mock_server.uri()).unwrap();
        let location = GeocodeResolver::resolve_city(&client, "Interlaken")
            .await
            .unwrap();

        assert_eq!(
            location,
            Location::new(46.686_347_5, 7.863_196_8, "Interlaken".to_string())
        );
    }

    #[tokio::test]
    async fn test_empty_city_is_invalid_without_upstream_call() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = OpenWeatherClient::with_base_url(Some("test_key"), &mock_server.uri()).unwrap();
        for city in ["", "   "] {
            let err = GeocodeResolver::resolve_city(&client, city)
                .await
                .unwrap_err();
            assert!(matches!(err, AirSenseError::InvalidRequest { .. }));
        }
    }

    #[tokio::test]
    async fn test_missing_api_key_is_configuration_error() {
        let mock_server = MockServer::start().await;
        let client = OpenWeatherClient::with_base_url(None, &mock_server.uri()).unwrap();

        let err = GeocodeResolver::resolve_city(&client, "Berlin")
            .await
            .unwrap_err();
        assert!(matches!(err, AirSenseError::Configuration { .. }));
    }

    #[tokio::test]
    async fn test_unknown_city_is_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .and(query_param("q", "Atlantis"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = OpenWeatherClient::with_base_url(Some("test_key"), &mock_server.uri()).unwrap();
        let err = GeocodeResolver::resolve_city(&client, "Atlantis")
            .await
            .unwrap_err();

        assert!(matches!(err, AirSenseError::NotFound { .. }));
        assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_upstream_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = OpenWeatherClient::with_base_url(Some("test_key"), &mock_server.uri()).unwrap();
        let err = GeocodeResolver::resolve_city(&client, "Berlin")
            .await
            .unwrap_err();

        assert!(matches!(err, AirSenseError::Upstream { .. }));
        assert!(err.to_string().contains("503"));
    }
}
