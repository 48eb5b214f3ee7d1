//! End of a submit: turns the prediction call's result into what the output
//! area shows, according to the revision's error-handling policy.

use crate::report::{PredictionReport, build_report};
use common::{ErrorHandling, PredictionError, PredictionRequest, PredictionResponse, Schema};
use serde::Serialize;
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Prediction plus visualizations
    Rendered(PredictionReport),
    /// Inline error message in place of the output
    Failed { message: String },
}

impl SubmitOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, SubmitOutcome::Rendered(_))
    }

    pub fn report(&self) -> Option<&PredictionReport> {
        match self {
            SubmitOutcome::Rendered(report) => Some(report),
            SubmitOutcome::Failed { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Failed { message } => Some(message),
            SubmitOutcome::Rendered(_) => None,
        }
    }
}

/// Finishes one submit.
///
/// Inline revisions always return `Ok`, with failures folded into
/// [`SubmitOutcome::Failed`]. The propagating revision returns the call's
/// error as is.
pub fn conclude(
    schema: &Schema,
    request: &PredictionRequest,
    result: Result<PredictionResponse, PredictionError>,
) -> Result<SubmitOutcome, PredictionError> {
    match result {
        Ok(response) => {
            info!("Prediction received: {}", response.prediction);
            Ok(SubmitOutcome::Rendered(build_report(schema, request, response)))
        }
        Err(err) => match schema.error_handling() {
            ErrorHandling::Inline => {
                warn!("Prediction failed, showing inline message: {}", err);
                Ok(SubmitOutcome::Failed { message: err.user_message() })
            }
            ErrorHandling::Propagate => {
                error!("Prediction failed with no handler for revision {}: {}", schema.revision, err);
                Err(err)
            }
        },
    }
}
