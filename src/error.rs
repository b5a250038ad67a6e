//! Widget Errors
//!
//! Every failure an attempt can end in. None of them is fatal: the
//! orchestrator shows one message and returns to an interactive state.

use thiserror::Error;

use crate::config::Messages;

/// Why the raw count input was rejected, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("input is empty")]
    Empty,
    #[error("input is not an integer")]
    NotANumber,
    #[error("count is below the minimum")]
    TooSmall,
    #[error("count is above the maximum")]
    TooLarge,
}

impl ValidationError {
    /// Native validity hint for the input control
    pub fn hint<'a>(&self, messages: &'a Messages) -> &'a str {
        match self {
            ValidationError::Empty => &messages.input_empty,
            ValidationError::NotANumber | ValidationError::TooSmall => &messages.input_out_of_range,
            ValidationError::TooLarge => &messages.input_too_large,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WidgetError {
    #[error("invalid count: {0}")]
    Validation(#[from] ValidationError),

    #[error("HTTP error, status {status}")]
    Http { status: u16 },

    #[error("response body is not an array")]
    Shape,

    #[error("response body is not valid JSON: {0}")]
    Decode(String),

    #[error("network request failed: {0}")]
    Network(String),

    #[error("no items returned")]
    EmptyResult,

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl WidgetError {
    /// Text shown in the error region
    pub fn user_message<'a>(&self, messages: &'a Messages) -> &'a str {
        match self {
            WidgetError::Validation(_) => &messages.invalid_count,
            WidgetError::Http { .. }
            | WidgetError::Shape
            | WidgetError::Decode(_)
            | WidgetError::Network(_) => &messages.fetch_failed,
            WidgetError::EmptyResult => &messages.no_results,
            WidgetError::Unexpected(_) => &messages.unexpected,
        }
    }
}

impl From<serde_json::Error> for WidgetError {
    fn from(err: serde_json::Error) -> Self {
        WidgetError::Decode(err.to_string())
    }
}
