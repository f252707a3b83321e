//! Vol Surface Backend Server
//!
//! REST API server for querying an options implied-volatility dataset.

use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use vol_surface_backend::api::create_router;
use vol_surface_backend::config::Config;
use vol_surface_backend::error::ErrorResponse;
use vol_surface_backend::models::{HealthResponse, MetadataResponse};
use vol_surface_backend::state::AppState;

/// Environment variable naming the TOML configuration file.
const CONFIG_ENV: &str = "VOL_SURFACE_CONFIG";

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        vol_surface_backend::api::handlers::health_check,
        vol_surface_backend::api::handlers::get_metadata,
        vol_surface_backend::api::handlers::get_filtered_data,
    ),
    components(schemas(HealthResponse, MetadataResponse, ErrorResponse)),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Dataset", description = "Options dataset queries"),
    ),
    info(
        title = "Vol Surface API",
        version = "0.1.0",
        description = "REST API over an options implied-volatility dataset",
        license(name = "MIT")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = match std::env::var(CONFIG_ENV) {
        Ok(path) => {
            info!("Loading configuration from {}", path);
            Config::load(&path)?
        }
        Err(_) => Config::default(),
    };
    config.apply_env_overrides()?;

    let addr = config.server.bind_addr();
    let state = Arc::new(AppState::from_config(config));

    info!("Serving dataset {}", state.loader.path().display());
    info!("Swagger UI available at http://{}/swagger-ui/", addr);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = create_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start the server
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
