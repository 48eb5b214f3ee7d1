use anyhow::{Context, Result, anyhow};
use compute::{SubmitOutcome, conclude};
use std::path::PathBuf;
use tracing::{debug, info, trace};

use crate::client::PredictionClient;
use crate::config::Settings;
use crate::render::{outcome_text, report_page};

/// Form input and output options of one `predict` run.
#[derive(Debug, Default)]
pub struct PredictArgs {
    pub input: Option<PathBuf>,
    pub set: Vec<(String, String)>,
    pub charts: Option<PathBuf>,
    pub json: bool,
}

/// Fills the form, submits it once and returns the rendered outcome.
///
/// Failures the revision handles inline are part of the output; the rest are
/// returned as errors.
pub async fn predict(settings: &Settings, args: PredictArgs) -> Result<String> {
    let submit = settings.client_config().resolve();
    debug!("Submitting to {} with revision {}", submit.predict_url(), submit.schema.revision);

    let mut form = submit.new_form();

    if let Some(path) = &args.input {
        trace!("Reading field values from {}", path.display());
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let values: serde_json::Value = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        let values = values
            .as_object()
            .ok_or_else(|| anyhow!("{} must contain a JSON object", path.display()))?;
        form.apply_all(values)?;
    }

    for (key, value) in &args.set {
        form.apply_str(key, value)?;
    }

    let request = form.collect();
    let client = PredictionClient::new(&submit.api_url);
    let result = client.predict(&request).await;
    let outcome = conclude(&submit.schema, &request, result)?;

    if let (Some(path), Some(report)) = (&args.charts, outcome.report()) {
        let page = report_page(report)?;
        tokio::fs::write(path, page)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Charts written to {}", path.display());
    }

    render(&outcome, args.json)
}

fn render(outcome: &SubmitOutcome, json: bool) -> Result<String> {
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(outcome)?))
    } else {
        Ok(outcome_text(outcome))
    }
}
