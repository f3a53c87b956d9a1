use std::fmt;

use thiserror::Error;

/// A validation failure attached to one input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new<S: Into<String>>(field: &'static str, message: S) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Everything that can stop a lookup from producing a record
#[derive(Debug, Error)]
pub enum LookupError {
    /// Input rejected before any request was made
    #[error("Invalid input: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// Geocoding returned an empty list
    #[error("No location found for \"{city}\"")]
    CityNotFound { city: String },

    /// Forecast response carried no samples
    #[error("No forecast available for {city}")]
    NoForecast { city: String },

    /// Transport failure or a body that could not be decoded
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("{endpoint} request failed with status: {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },
}

impl LookupError {
    /// Field messages for inline display, empty for non-validation errors
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            LookupError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
