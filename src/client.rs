use common::{PredictionError, PredictionRequest, PredictionResponse, interpret_response, predict_url};
use reqwest::Client;
use std::error::Error as _;
use tracing::{debug, instrument, warn};

/// HTTP client for the prediction endpoint.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http_client: Client,
    predict_url: String,
}

impl PredictionClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            predict_url: predict_url(base_url),
        }
    }

    /// Posts the request once and classifies the result. No retries.
    #[instrument(skip(self, request), fields(url = %self.predict_url))]
    pub async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, PredictionError> {
        debug!("Sending prediction request with {} fields", request.len());

        let response = self
            .http_client
            .post(&self.predict_url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!("Prediction request failed: {}", e);
                PredictionError::Transport(describe(&e))
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| PredictionError::Transport(describe(&e)))?;

        debug!("Prediction endpoint answered {}", status);
        interpret_response(&self.predict_url, status, &body)
    }
}

/// The error and its sources, so the cause of a refused connection stays visible.
fn describe(err: &reqwest::Error) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }
    description
}
