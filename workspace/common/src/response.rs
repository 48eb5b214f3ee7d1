//! Interpretation of the prediction endpoint's answer.
//!
//! Both transports (reqwest on the CLI, gloo-net in the browser) hand the raw
//! status and body here, so the status -> JSON -> shape checks happen in one
//! place and in the same order.

use crate::error::{PredictionError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PREDICT_PATH: &str = "/predict";

/// Declared response schema; extra keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(rename = "Prediction")]
    pub prediction: String,
}

/// `{base}/predict`, tolerating a trailing slash on the base.
pub fn predict_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), PREDICT_PATH)
}

/// Turns a raw HTTP answer from `url` into a validated response or a typed failure.
pub fn interpret_response(url: &str, status: u16, body: &str) -> Result<PredictionResponse> {
    if !(200..300).contains(&status) {
        tracing::warn!("Prediction endpoint {} answered with status {}", url, status);
        return Err(PredictionError::Status {
            status,
            url: url.to_string(),
            body: body.to_string(),
        });
    }

    let json: Value = serde_json::from_str(body).map_err(|e| {
        tracing::error!("Prediction response is not JSON: {}", e);
        PredictionError::Decode(e.to_string())
    })?;

    validate_response(json)
}

/// Checks an already decoded body against the declared schema.
pub fn validate_response(json: Value) -> Result<PredictionResponse> {
    serde_json::from_value::<PredictionResponse>(json).map_err(|e| {
        tracing::error!("Prediction response has an unexpected shape: {}", e);
        PredictionError::UnexpectedFormat(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "http://localhost:8000/predict";

    #[test]
    fn test_predict_url() {
        assert_eq!(predict_url("http://localhost:8000"), "http://localhost:8000/predict");
        assert_eq!(predict_url("http://localhost:8000/"), "http://localhost:8000/predict");
        assert_eq!(predict_url("https://api.example.com/v1"), "https://api.example.com/v1/predict");
    }

    #[test]
    fn test_prediction_kept_verbatim() {
        let response = interpret_response(URL, 200, r#"{"Prediction": "Low risk"}"#).unwrap();
        assert_eq!(response.prediction, "Low risk");

        let padded = interpret_response(URL, 200, r#"{"Prediction": "  High risk of heart disease \n"}"#)
            .unwrap();
        assert_eq!(padded.prediction, "  High risk of heart disease \n");
    }

    #[test]
    fn test_extra_keys_ignored() {
        let response =
            interpret_response(URL, 200, r#"{"Prediction": "Low risk", "probability": 0.12}"#).unwrap();
        assert_eq!(response.prediction, "Low risk");
    }

    #[test]
    fn test_missing_prediction_key() {
        let err = interpret_response(URL, 200, r#"{"result": "Low risk"}"#).unwrap_err();
        assert!(matches!(err, PredictionError::UnexpectedFormat(_)));
    }

    #[test]
    fn test_non_string_prediction() {
        let err = validate_response(json!({"Prediction": 1})).unwrap_err();
        assert!(matches!(err, PredictionError::UnexpectedFormat(_)));

        let err = validate_response(json!(["Low risk"])).unwrap_err();
        assert!(matches!(err, PredictionError::UnexpectedFormat(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = interpret_response(URL, 200, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, PredictionError::Decode(_)));
    }

    #[test]
    fn test_status_checked_before_body() {
        let err = interpret_response(URL, 500, r#"{"Prediction": "Low risk"}"#).unwrap_err();
        assert_eq!(
            err,
            PredictionError::Status {
                status: 500,
                url: URL.to_string(),
                body: r#"{"Prediction": "Low risk"}"#.to_string(),
            }
        );

        let err = interpret_response(URL, 422, "not json").unwrap_err();
        assert!(matches!(err, PredictionError::Status { status: 422, .. }));
    }
}
