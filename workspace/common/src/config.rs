use crate::form::FormState;
use crate::response::predict_url;
use crate::revision::{BmiSource, Revision};
use crate::schema::Schema;
use serde::{Deserialize, Serialize};

/// Operator-facing client settings, as served to the frontend by
/// `GET /api/client-config` and read by the CLI from its own settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the prediction endpoint; the revision's default when absent
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub revision: Revision,
    /// Overrides the revision's own BMI source
    #[serde(default)]
    pub bmi_source: Option<BmiSource>,
}

impl ClientConfig {
    pub fn resolve(&self) -> SubmitConfig {
        let api_url = self
            .api_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.revision.default_api_url().to_string());
        SubmitConfig {
            api_url,
            schema: Schema::resolve(self.revision, self.bmi_source),
        }
    }
}

/// Immutable inputs of one submit: where to send and what shape to send.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitConfig {
    pub api_url: String,
    pub schema: Schema,
}

impl SubmitConfig {
    pub fn predict_url(&self) -> String {
        predict_url(&self.api_url)
    }

    /// A form at its defaults for this schema.
    pub fn new_form(&self) -> FormState {
        FormState::new(self.schema.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_to_revision_url() {
        let config = ClientConfig { revision: Revision::Compact, ..Default::default() };
        let submit = config.resolve();
        assert_eq!(submit.api_url, "http://localhost:8000");
        assert_eq!(submit.predict_url(), "http://localhost:8000/predict");
        assert_eq!(submit.schema.bmi_source, BmiSource::Derived);
    }

    #[test]
    fn test_resolve_with_overrides() {
        let config = ClientConfig {
            api_url: Some("http://predictor.internal:9000/".to_string()),
            revision: Revision::Extended,
            bmi_source: Some(BmiSource::Supplied),
        };
        let submit = config.resolve();
        assert_eq!(submit.predict_url(), "http://predictor.internal:9000/predict");
        assert_eq!(submit.schema.bmi_source, BmiSource::Supplied);
        assert_eq!(submit.schema.revision, Revision::Extended);
    }

    #[test]
    fn test_blank_url_falls_back() {
        let config = ClientConfig { api_url: Some("  ".to_string()), ..Default::default() };
        assert_eq!(config.resolve().api_url, Revision::Full.default_api_url());
    }

    #[test]
    fn test_client_config_json() {
        let config: ClientConfig = serde_json::from_str(r#"{"revision": "extended"}"#).unwrap();
        assert_eq!(config.revision, Revision::Extended);
        assert_eq!(config.api_url, None);
        assert_eq!(config.bmi_source, None);

        let json = serde_json::to_value(&ClientConfig::default()).unwrap();
        assert_eq!(json["revision"], "full");
    }
}
