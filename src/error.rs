//! Error types and HTTP error responses for `AirSense`

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Main error type for request handling
#[derive(Error, Debug)]
pub enum AirSenseError {
    /// A required query parameter is missing, empty or malformed
    #[error("{message}")]
    InvalidRequest { message: String },

    /// The upstream credential is not configured
    #[error("{message}")]
    Configuration { message: String },

    /// Geocoding returned no match
    #[error("{message}")]
    NotFound { message: String },

    /// An upstream call failed at transport level or returned an unusable payload
    #[error("Failed to fetch data from OpenWeather: {message}")]
    Upstream { message: String },
}

/// JSON body returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AirSenseError {
    /// Create a new invalid request error
    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a new not found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// HTTP status reported to the client
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            AirSenseError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            AirSenseError::NotFound { .. } => StatusCode::NOT_FOUND,
            AirSenseError::Configuration { .. } | AirSenseError::Upstream { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AirSenseError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(%status, "Request failed: {}", self);
        } else {
            tracing::warn!(%status, "Request rejected: {}", self);
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
