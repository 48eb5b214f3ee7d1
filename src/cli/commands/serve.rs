use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace, warn};

use crate::config::Settings;
use crate::router::create_router;
use crate::schemas::AppState;

pub async fn serve(settings: &Settings) -> Result<()> {
    trace!("Entering serve function");
    info!("Heartcheck frontend host starting up");
    debug!("Static directory: {}", settings.static_dir.display());
    debug!("Bind address: {}", settings.bind_address);

    if !settings.static_dir.join("index.html").exists() {
        warn!(
            "No index.html in {}; build the frontend first (trunk build in workspace/frontend)",
            settings.static_dir.display()
        );
    }

    let state = AppState {
        client_config: settings.client_config(),
        static_dir: settings.static_dir.clone(),
    };

    trace!("Creating application router");
    let app = create_router(state);

    info!("Starting server on {}", settings.bind_address);
    let listener = match TcpListener::bind(&settings.bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", settings.bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", settings.bind_address, e);
            return Err(e.into());
        }
    };

    info!("Prediction form available on http://{}", settings.bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
