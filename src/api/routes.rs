//! Route configuration.

use crate::api::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;

/// Dataset routes, served both at the root and under `/api`.
fn dataset_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/metadata/", get(handlers::get_metadata))
        .route("/metadata", get(handlers::get_metadata))
        .route("/data/", get(handlers::get_filtered_data))
        .route("/data", get(handlers::get_filtered_data))
}

/// Creates the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Dataset queries
        .merge(dataset_routes())
        .nest("/api", dataset_routes())
        .with_state(state)
}
