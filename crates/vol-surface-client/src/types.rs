//! Request and response types for the Vol Surface API.

use serde::{Deserialize, Serialize};


/// One dataset row: every column of the source file keyed by name.
pub type DataRow = serde_json::Map<String, serde_json::Value>;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Min/max bounds of the numeric columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
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

/// Query parameters for the filtered-data endpoint. All bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataQuery {
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

/// Selects the whole dataset.
impl From<&MetadataResponse> for DataQuery {
    fn from(meta: &MetadataResponse) -> Self {
        Self {
            strike_min: meta.strike_min,
            strike_max: meta.strike_max,
            days_min: meta.days_min,
            days_max: meta.days_max,
            iv_min: meta.iv_min,
            iv_max: meta.iv_max,
        }
    }
}

/// Error body returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error message.
    pub error: String,
    /// Error code.
    #[serde(default)]
    pub code: Option<String>,
}
