//! Error types

use crate::constants::{COUNTRY_LOAD_FAILED, SUBMIT_FAILED};
use crate::types::FormField;
use reqwest::StatusCode;
use thiserror::Error;

/// Failure to obtain the country reference list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("country request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("country API returned status {0}")]
    Status(StatusCode),

    #[error("malformed country list: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LoadError {
    /// Fixed advisory shown in place of the country selectors
    pub fn user_message(&self) -> &'static str {
        COUNTRY_LOAD_FAILED
    }
}

/// Form could not be turned into a submission record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing fields: {}", join_fields(.missing))]
    Incomplete { missing: Vec<FormField> },

    #[error("{field} code {code} is not in the loaded country list")]
    UnknownCountry { field: FormField, code: String },
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure to hand a submission record to the planning backend
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned status {0}")]
    Status(StatusCode),
}

impl SubmitError {
    pub fn user_message(&self) -> &'static str {
        SUBMIT_FAILED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_lists_missing_fields() {
        let err = ValidationError::Incomplete {
            missing: vec![FormField::Duration, FormField::Month],
        };
        assert_eq!(err.to_string(), "missing fields: duration, travel month");
    }

    #[test]
    fn load_error_has_fixed_advisory() {
        let err = LoadError::Status(StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), COUNTRY_LOAD_FAILED);
        assert_eq!(err.to_string(), "country API returned status 400 Bad Request");
    }
}
