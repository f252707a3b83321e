//! API request handlers.

use crate::dataset::{RangeFilter, Record, ValueRange};
use crate::error::{ApiError, ErrorResponse};
use crate::models::{FILTER_PARAMS, HealthResponse, MetadataResponse};
use crate::state::AppState;
use axum::Json;
use axum::extract::{RawQuery, State};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;


/// Looks up a required query parameter and parses it.
fn parse_param<T: FromStr>(
    params: &HashMap<String, String>,
    name: &str,
    expected: &'static str,
) -> Result<T, ApiError> {
    let raw = params
        .get(name)
        .ok_or_else(|| ApiError::MissingParameter(name.to_string()))?;
    raw.trim().parse().map_err(|_| ApiError::InvalidParameter {
        name: name.to_string(),
        value: raw.clone(),
        expected,
    })
}

/// Decodes a raw query string into a parameter map; the last duplicate wins.
pub fn parse_query(raw: Option<&str>) -> Result<HashMap<String, String>, ApiError> {
    let raw = raw.unwrap_or_default();
    serde_urlencoded::from_str::<Vec<(String, String)>>(raw)
        .map(|pairs| pairs.into_iter().collect())
        .map_err(|_| ApiError::InvalidParameter {
            name: "query".to_string(),
            value: raw.to_string(),
            expected: "url-encoded query string",
        })
}

/// Builds a [`RangeFilter`] from the six filter query parameters.
///
/// Parameters are checked in [`FILTER_PARAMS`] order and the first
/// problem is reported. Ranges are not checked for `min <= max`.
pub fn parse_range_filter(params: &HashMap<String, String>) -> Result<RangeFilter, ApiError> {
    let [strike_lo, strike_hi, days_lo, days_hi, iv_lo, iv_hi] = FILTER_PARAMS;

    let strike_min = parse_param::<f64>(params, strike_lo, "number")?;
    let strike_max = parse_param::<f64>(params, strike_hi, "number")?;
    let days_min = parse_param::<i64>(params, days_lo, "integer")?;
    let days_max = parse_param::<i64>(params, days_hi, "integer")?;
    let iv_min = parse_param::<f64>(params, iv_lo, "number")?;
    let iv_max = parse_param::<f64>(params, iv_hi, "number")?;

    Ok(RangeFilter {
        strike: ValueRange::new(strike_min, strike_max),
        days: ValueRange::new(days_min, days_max),
        iv: ValueRange::new(iv_min, iv_max),
    })
}

// ============================================================================
// Health Check
// ============================================================================

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Dataset Queries
// ============================================================================

/// Get min/max bounds of strike, days to expiration and implied volatility.
#[utoipa::path(
    get,
    path = "/metadata/",
    responses(
        (status = 200, description = "Column bounds", body = MetadataResponse),
        (status = 500, description = "Dataset unavailable, malformed or empty", body = ErrorResponse)
    ),
    tag = "Dataset"
)]
pub async fn get_metadata(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MetadataResponse>, ApiError> {
    let dataset = state.load_dataset().await?;
    let meta = MetadataResponse::from(dataset.bounds()?);

    debug!("Metadata: {:?}", meta);
    Ok(Json(meta))
}

/// Get the rows whose strike, days to expiration and implied volatility
/// all fall within the requested inclusive ranges.
#[utoipa::path(
    get,
    path = "/data/",
    params(
        ("strike_min" = f64, Query, description = "Lowest strike, inclusive"),
        ("strike_max" = f64, Query, description = "Highest strike, inclusive"),
        ("days_min" = i64, Query, description = "Fewest days to expiration, inclusive"),
        ("days_max" = i64, Query, description = "Most days to expiration, inclusive"),
        ("iv_min" = f64, Query, description = "Lowest implied volatility, inclusive"),
        ("iv_max" = f64, Query, description = "Highest implied volatility, inclusive")
    ),
    responses(
        (status = 200, description = "Matching rows in file order, with every column of the source file"),
        (status = 400, description = "Missing or non-numeric query parameter", body = ErrorResponse),
        (status = 500, description = "Dataset unavailable or malformed", body = ErrorResponse)
    ),
    tag = "Dataset"
)]
pub async fn get_filtered_data(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<Record>>, ApiError> {
    let params = parse_query(query.as_deref())?;
    let filter = parse_range_filter(&params)?;
    let dataset = state.load_dataset().await?;
    let rows = dataset.filter(&filter);

    debug!("Filtered {} of {} rows", rows.len(), dataset.len());
    Ok(Json(rows))
}
