//! Structural validation of raw query strings.
//!
//! Validation is advisory and independent of parsing: a query that fails
//! here still parses and evaluates. Callers decide when to enforce it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use kbase_core::defaults::ALLOWED_FIELDS;

use crate::extract::FIELD_MARKER;

/// Reason a query failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing but whitespace
    #[error("Query is empty")]
    EmptyQuery,

    /// Odd number of double quotes
    #[error("Unbalanced quotes in query")]
    UnbalancedQuotes,

    /// One or more `field:` names outside the allowed set
    #[error("{}", unknown_field_message(.fields))]
    UnknownField { fields: Vec<String> },
}

fn unknown_field_message(fields: &[String]) -> String {
    format!(
        "Unknown field(s): {}. Allowed fields: {}",
        fields.join(", "),
        ALLOWED_FIELDS.join(", ")
    )
}

/// Outcome of [`validate`], shaped for the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(error: &ValidationError) -> Self {
        Self {
            valid: false,
            error: Some(error.to_string()),
        }
    }
}

impl From<Result<(), ValidationError>> for ValidationResult {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(e) => Self::invalid(&e),
        }
    }
}

/// Validate a raw query, reporting the first problem as a message.
///
/// ```
/// use kbase_query::validate;
///
/// assert!(validate("title:rust").valid);
/// assert!(!validate("bogus:x").valid);
/// ```
pub fn validate(query: &str) -> ValidationResult {
    check(query).into()
}

/// Validate a raw query, returning the typed reason on failure.
///
/// Checks run in order: empty input, unbalanced double quotes, unknown
/// field names.
pub fn check(query: &str) -> Result<(), ValidationError> {
    if query.trim().is_empty() {
        return Err(ValidationError::EmptyQuery);
    }

    if query.matches('"').count() % 2 != 0 {
        return Err(ValidationError::UnbalancedQuotes);
    }

    let mut unknown: Vec<String> = Vec::new();
    for caps in FIELD_MARKER.captures_iter(query) {
        let Some(name) = caps.get(1).map(|m| m.as_str()) else {
            continue;
        };
        if !ALLOWED_FIELDS.contains(&name) && !unknown.iter().any(|u| u == name) {
            unknown.push(name.to_string());
        }
    }
    if !unknown.is_empty() {
        return Err(ValidationError::UnknownField { fields: unknown });
    }

    Ok(())
}
