//! # Vol Surface Backend - REST API Server
//!
//! A small REST API over a static CSV dataset of options-pricing records
//! (strike, days to expiration, implied volatility, plus any other columns).
//! Built with [Axum](https://crates.io/crates/axum) and documented with
//! [utoipa](https://crates.io/crates/utoipa).
//!
//! The dataset file is re-read on every request. Nothing is cached and no
//! state is shared between requests beyond the configured file path.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Route handlers and router configuration |
//! | [`config`] | TOML configuration with environment overrides |
//! | [`dataset`] | CSV loader, row model, range filter and column bounds |
//! | [`error`] | API error types with `IntoResponse` implementation |
//! | [`models`] | Response DTOs with OpenAPI schemas |
//! | [`state`] | Application state management |
//!
//! ## API Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/metadata/` | Min/max of strike, days to expiration, implied volatility |
//! | GET | `/data/` | Rows within the requested ranges |
//!
//! Both dataset endpoints are also served under `/api` (`/api/metadata/`,
//! `/api/data/`).
//!
//! ## Example Usage
//!
//! ```bash
//! # Serve ./data.csv on 0.0.0.0:8000
//! cargo run
//!
//! # Custom file and port
//! DATA_PATH=fixtures/options.csv PORT=3000 cargo run
//!
//! # From a TOML config file
//! VOL_SURFACE_CONFIG=config/default.toml cargo run
//! ```
//!
//! ```bash
//! curl http://localhost:8000/metadata/
//! curl "http://localhost:8000/data/?strike_min=100&strike_max=120&days_min=0&days_max=100&iv_min=0&iv_max=1"
//! ```
//!
//! ## Errors
//!
//! Failures answer with `{"error": "<message>", "code": "<CODE>"}`. Missing or
//! non-numeric query parameters are `400`; an unreadable, malformed or empty
//! dataset is `500`.

pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod models;
pub mod state;
