//! Contract shared by the CLI and the browser frontend: the request schema of
//! each revision, the form state that feeds it, the response shape and the
//! error taxonomy of a prediction call.

mod config;
mod error;
mod form;
mod request;
mod response;
mod revision;
pub mod schema;

pub use config::{ClientConfig, SubmitConfig};
pub use error::{FormError, ParseEnumError, PredictionError, Result};
pub use form::{FieldValue, FormState};
pub use request::PredictionRequest;
pub use response::{PREDICT_PATH, PredictionResponse, interpret_response, predict_url, validate_response};
pub use revision::{BmiSource, ChartPlan, ErrorHandling, HealthChart, Revision, RiskChart};
pub use schema::{Field, Schema, Select, Slider, Toggle, Widget};
