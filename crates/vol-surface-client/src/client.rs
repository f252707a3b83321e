//! HTTP client for the Vol Surface API.

use crate::error::Error;
use crate::types::*;
use reqwest::Client;
use std::time::Duration;


/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:8000").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the Vol Surface API.
#[derive(Debug, Clone)]
pub struct VolSurfaceClient {
    client: Client,
    base_url: String,
}

impl VolSurfaceClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Base URL requests are sent to, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs a health check.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn health_check(&self) -> Result<HealthResponse, Error> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Gets the min/max bounds of the dataset's numeric columns.
    ///
    /// # Errors
    /// Returns error if the request fails or the dataset is unavailable or empty.
    pub async fn get_metadata(&self) -> Result<MetadataResponse, Error> {
        let url = format!("{}/metadata/", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Gets the rows within the given ranges, in file order.
    ///
    /// # Errors
    /// Returns error if the request fails or the dataset is unavailable.
    pub async fn get_filtered_data(&self, query: &DataQuery) -> Result<Vec<DataRow>, Error> {
        let url = self.data_url(query)?;
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Builds the filtered-data URL for `query`.
    ///
    /// # Errors
    /// Returns error if the query cannot be URL-encoded.
    pub fn data_url(&self, query: &DataQuery) -> Result<String, Error> {
        let params = serde_urlencoded::to_string(query)?;
        Ok(format!("{}/data/?{}", self.base_url, params))
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        if status.is_success() {
            let text = resp.text().await?;
            Ok(serde_json::from_str(&text)?)
        } else {
            let text = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            Err(Error::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
