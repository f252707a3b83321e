//! HTTP client library for the Vol Surface API.
//!
//! This crate provides a typed HTTP client for the metadata and filtered-data
//! endpoints of the Vol Surface backend.
//!
//! # Example
//!
//! ```no_run
//! use vol_surface_client::{ClientConfig, DataQuery, VolSurfaceClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), vol_surface_client::Error> {
//!     let client = VolSurfaceClient::new(ClientConfig {
//!         base_url: "http://localhost:8000".into(),
//!         timeout: Duration::from_secs(30),
//!     })?;
//!
//!     let meta = client.get_metadata().await?;
//!     let rows = client.get_filtered_data(&DataQuery::from(&meta)).await?;
//!     println!("{} rows", rows.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{ClientConfig, VolSurfaceClient};
pub use error::Error;
pub use types::*;
