use common::{interpret_response, ClientConfig, PredictionError, PredictionRequest, PredictionResponse, SubmitConfig};
use gloo_net::http::Request;

/// Served by `heartcheck serve` next to the built frontend.
const CLIENT_CONFIG_PATH: &str = "/api/client-config";

/// Fetches the operator's client configuration from the hosting server.
pub async fn fetch_client_config() -> Result<ClientConfig, String> {
    log::debug!("GET request to: {}", CLIENT_CONFIG_PATH);

    let response = Request::get(CLIENT_CONFIG_PATH)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<ClientConfig>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Sends one prediction request and classifies the outcome.
pub async fn predict(
    config: &SubmitConfig,
    request: &PredictionRequest,
) -> Result<PredictionResponse, PredictionError> {
    let url = config.predict_url();
    log::debug!("POST request to: {} with {} fields", url, request.len());

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| {
            log::error!("POST {} - Failed to serialize request: {}", url, e);
            PredictionError::Transport(e.to_string())
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST {} - Request failed: {}", url, e);
            PredictionError::Transport(e.to_string())
        })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        log::error!("POST {} - Failed to read body: {}", url, e);
        PredictionError::Transport(e.to_string())
    })?;

    log::trace!("POST {} - Response {} received, validating", url, status);
    interpret_response(&url, status, &body)
}
