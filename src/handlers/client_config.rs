use axum::{extract::State, response::Json};
use common::ClientConfig;
use tracing::{debug, instrument};
use crate::schemas::AppState;

/// Client configuration the single page reads on start-up
#[instrument(skip(state))]
pub async fn get_client_config(State(state): State<AppState>) -> Json<ClientConfig> {
    debug!("Serving client config for revision {}", state.client_config.revision);
    Json(state.client_config)
}
