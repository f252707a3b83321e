//! Integration tests for the Vol Surface API.
//!
//! Each test spawns the real router on an ephemeral local port, backed by a
//! CSV file in a temporary directory, and drives it through the client crate.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::net::TcpListener;
use vol_surface_backend::api::create_router;
use vol_surface_backend::config::{Config, DatasetConfig};
use vol_surface_backend::state::AppState;
use vol_surface_client::VolSurfaceClient;

/// Two-row dataset used across scenarios.
pub const SCENARIO_CSV: &str = "\
strike,days_to_expiration,implied_volatility,option_type
100,30,0.25,call
150,45,0.30,put
";

/// A running server plus its dataset directory.
pub struct TestServer {
    /// Client pointed at the server.
    pub client: VolSurfaceClient,
    /// Bound address.
    pub addr: SocketAddr,
    dir: TempDir,
}

impl TestServer {
    /// Path of the dataset file the server reads.
    #[must_use]
    pub fn dataset_path(&self) -> PathBuf {
        self.dir.path().join("data.csv")
    }

    /// Replaces the dataset file contents.
    pub fn write_dataset(&self, content: &str) {
        std::fs::write(self.dataset_path(), content).expect("Failed to write dataset");
    }

    /// Deletes the dataset file.
    pub fn remove_dataset(&self) {
        std::fs::remove_file(self.dataset_path()).expect("Failed to remove dataset");
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Starts a server whose dataset file holds `csv`, or no file at all if `None`.
///
/// # Panics
/// Panics if the fixture cannot be written or the listener cannot bind.
pub async fn spawn_server(csv: Option<&str>) -> TestServer {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("data.csv");
    if let Some(content) = csv {
        std::fs::write(&path, content).expect("Failed to write dataset");
    }

    let config = Config {
        dataset: DatasetConfig { path },
        ..Config::default()
    };
    let app = create_router(Arc::new(AppState::from_config(config)));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let client =
        VolSurfaceClient::with_base_url(&format!("http://{addr}")).expect("Failed to create client");

    TestServer { client, addr, dir }
}
