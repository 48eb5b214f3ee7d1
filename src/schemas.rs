use common::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Handed to the frontend on start-up
    pub client_config: ClientConfig,
    /// Directory holding the built frontend
    pub static_dir: PathBuf,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Application version
    pub version: String,
}
