//! Application state management.

use crate::config::Config;
use crate::dataset::{Dataset, DatasetLoader};
use crate::error::ApiError;

/// Application state shared across all handlers.
///
/// Holds no data: every request loads the dataset afresh through `loader`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loader for the configured dataset file.
    pub loader: DatasetLoader,
    /// Application configuration.
    pub config: Config,
}

impl AppState {
    /// Creates application state from configuration.
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self {
            loader: DatasetLoader::new(config.dataset.path.clone()),
            config,
        }
    }

    /// Loads the dataset on the blocking thread pool.
    ///
    /// # Errors
    /// Returns [`ApiError::DataUnavailable`] or [`ApiError::SchemaMismatch`]
    /// if the file cannot be loaded.
    pub async fn load_dataset(&self) -> Result<Dataset, ApiError> {
        let loader = self.loader.clone();
        let dataset = tokio::task::spawn_blocking(move || loader.load())
            .await
            .map_err(|e| ApiError::DataUnavailable(format!("loader task failed: {e}")))??;
        Ok(dataset)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}
