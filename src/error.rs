//! Error types for the REST API.

use crate::dataset::DatasetError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;


/// API error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Error code.
    pub code: String,
}

/// API error types.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Backing file missing, unreadable or not parseable.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// Expected column absent from the loaded data.
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    /// Aggregate requested over zero rows.
    #[error("Dataset is empty")]
    EmptyDataset,

    /// Required query parameter absent.
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// Query parameter not parseable as its numeric type.
    #[error("Invalid parameter {name}: '{value}' is not a valid {expected}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Raw value supplied.
        value: String,
        /// Expected type, e.g. "integer".
        expected: &'static str,
    },
}

impl ApiError {
    /// HTTP status and machine-readable code for this error.
    #[must_use]
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::DataUnavailable(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATA_UNAVAILABLE"),
            ApiError::SchemaMismatch(_) => (StatusCode::INTERNAL_SERVER_ERROR, "SCHEMA_MISMATCH"),
            ApiError::EmptyDataset => (StatusCode::INTERNAL_SERVER_ERROR, "EMPTY_DATASET"),
            ApiError::MissingParameter(_) => (StatusCode::BAD_REQUEST, "MISSING_PARAMETER"),
            ApiError::InvalidParameter { .. } => (StatusCode::BAD_REQUEST, "INVALID_PARAMETER"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        warn!("Request failed with {}: {}", status, self);

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<DatasetError> for ApiError {
    fn from(err: DatasetError) -> Self {
        match err {
            DatasetError::MissingColumn(_) => ApiError::SchemaMismatch(err.to_string()),
            DatasetError::Empty => ApiError::EmptyDataset,
            DatasetError::Unavailable { .. }
            | DatasetError::Malformed(_)
            | DatasetError::MissingHeader
            | DatasetError::InvalidValue { .. } => ApiError::DataUnavailable(err.to_string()),
        }
    }
}
