//! Request and response models for the REST API.

use crate::dataset::DatasetBounds;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Names of the filter query parameters, in validation order.
pub const FILTER_PARAMS: [&str; 6] = [
    "strike_min",
    "strike_max",
    "days_min",
    "days_max",
    "iv_min",
    "iv_max",
];

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Min/max bounds of the three numeric columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MetadataResponse {
    /// Lowest strike price.
    pub strike_min: f64,
    /// Highest strike price.
    pub strike_max: f64,
    /// Fewest days to expiration.
    pub days_min: i64,
    /// Most days to expiration.
    pub days_max: i64,
    /// Lowest implied volatility.
    pub iv_min: f64,
    /// Highest implied volatility.
    pub iv_max: f64,
}

impl From<DatasetBounds> for MetadataResponse {
    fn from(bounds: DatasetBounds) -> Self {
        Self {
            strike_min: bounds.strike.min,
            strike_max: bounds.strike.max,
            days_min: bounds.days.min,
            days_max: bounds.days.max,
            iv_min: bounds.iv.min,
            iv_max: bounds.iv.max,
        }
    }
}
