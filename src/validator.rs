//! Count Validator
//!
//! Maps raw input text to a [`RequestedCount`] or the first rule it breaks.

use std::num::IntErrorKind;

use crate::error::ValidationError;
use crate::models::RequestedCount;

/// Outcome of validating the count input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    pub count: Option<RequestedCount>,
    pub reason: Option<ValidationError>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.count.is_some()
    }
}

/// Checked in order: empty, not an integer / below minimum, above maximum
pub fn validate(raw: &str) -> Validation {
    match parse_count(raw) {
        Ok(count) => Validation { count: Some(count), reason: None },
        Err(reason) => Validation { count: None, reason: Some(reason) },
    }
}

pub fn parse_count(raw: &str) -> Result<RequestedCount, ValidationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ValidationError::Empty);
    }
    let value: i64 = text.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => ValidationError::TooLarge,
        IntErrorKind::NegOverflow => ValidationError::TooSmall,
        _ => ValidationError::NotANumber,
    })?;
    if value < RequestedCount::MIN {
        return Err(ValidationError::TooSmall);
    }
    RequestedCount::new(value).ok_or(ValidationError::TooLarge)
}
