use axum::{
    Router,
    extract::{Query, State, rejection::QueryRejection},
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::{
    AirSenseError, VERSION,
    aggregator::AirQualityAggregator,
    location_resolver::GeocodeResolver,
    models::{AirQualitySnapshot, Location},
    openweather::OpenWeatherClient,
};

/// Shared handler state, built once at startup
#[derive(Clone)]
pub struct AppState {
    pub client: OpenWeatherClient,
}

impl AppState {
    #[must_use]
    pub fn new(client: OpenWeatherClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
pub struct GeocodeParams {
    pub city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AirQualityParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiHealth {
    pub healthy: bool,
    pub version: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/geocode", get(get_geocode))
        .route("/air-quality", get(get_air_quality))
        .route("/health", get(get_health))
        .with_state(state)
}

fn query_params<T>(params: Result<Query<T>, QueryRejection>) -> Result<T, AirSenseError> {
    params
        .map(|Query(params)| params)
        .map_err(|rejection| AirSenseError::invalid_request(rejection.body_text()))
}

/// `GET /api/geocode?city=`
async fn get_geocode(
    State(state): State<AppState>,
    params: Result<Query<GeocodeParams>, QueryRejection>,
) -> Result<Json<Location>, AirSenseError> {
    let params = query_params(params)?;
    let city = params.city.unwrap_or_default();
    let location = GeocodeResolver::resolve_city(&state.client, &city).await?;
    Ok(Json(location))
}

/// `GET /api/air-quality?lat=&lon=`
async fn get_air_quality(
    State(state): State<AppState>,
    params: Result<Query<AirQualityParams>, QueryRejection>,
) -> Result<Json<AirQualitySnapshot>, AirSenseError> {
    let params = query_params(params)?;
    let snapshot = AirQualityAggregator::get_air_quality(
        &state.client,
        params.lat.as_deref(),
        params.lon.as_deref(),
    )
    .await?;
    Ok(Json(snapshot))
}

async fn get_health() -> Json<ApiHealth> {
    Json(ApiHealth {
        healthy: true,
        version: VERSION.to_string(),
    })
}
