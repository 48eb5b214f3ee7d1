use thiserror::Error;

/// Failures of a single prediction call, in the order they are checked.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// The request never produced a response (DNS, refused connection, reset)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-2xx status
    #[error("HTTP error: {status} for url: {url}")]
    Status { status: u16, url: String, body: String },

    /// The body was not valid JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// The body was JSON but did not match `{"Prediction": "<string>"}`
    #[error("Unexpected response format: {0}")]
    UnexpectedFormat(String),
}

impl PredictionError {
    /// Text shown inline in the output area when the revision catches failures.
    pub fn user_message(&self) -> String {
        match self {
            PredictionError::Transport(cause) => format!("Error connecting to the API: {}", cause),
            PredictionError::Status { status, url, .. } => {
                format!("Error connecting to the API: {}", status_description(*status, url))
            }
            PredictionError::Decode(_) => "Error decoding the API response".to_string(),
            PredictionError::UnexpectedFormat(_) => {
                "Unexpected response format from the API".to_string()
            }
        }
    }
}

/// `"<code> <Client|Server> Error: <reason> for url: <url>"`, the wording HTTP
/// client libraries use for a failed status check.
pub fn status_description(status: u16, url: &str) -> String {
    let kind = match status {
        400..=499 => "Client Error",
        500..=599 => "Server Error",
        _ => "HTTP Error",
    };
    let reason = http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown Status");
    format!("{} {}: {} for url: {}", status, kind, reason, url)
}

/// Rejections raised while feeding raw values into form widgets.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("unknown field '{0}' for this revision")]
    UnknownField(String),

    #[error("field '{key}' expects {expected}")]
    WrongType { key: String, expected: &'static str },

    #[error("'{value}' is not an option of field '{key}'")]
    NotAnOption { key: String, value: String },

    #[error("field '{key}' got non-numeric value '{value}'")]
    NotANumber { key: String, value: String },
}

/// Error for parsing revision, BMI source and similar closed enumerations from text.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown {kind} '{value}', expected one of: {expected}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

pub type Result<T> = std::result::Result<T, PredictionError>;
