//! Runtime configuration for the query engine.
//!
//! Defaults come from [`kbase_core::defaults`]. Each value can be overridden
//! through an environment variable:
//!
//! - `KBASE_SUGGESTION_LIMIT` (default: 10)
//! - `KBASE_SUGGESTION_MIN_CHARS` (default: 2)
//! - `KBASE_HIGHLIGHT_OPEN` (default: `<mark>`)
//! - `KBASE_HIGHLIGHT_CLOSE` (default: `</mark>`)

use std::env;

use serde::{Deserialize, Serialize};

use kbase_core::defaults::{
    ENV_HIGHLIGHT_CLOSE, ENV_HIGHLIGHT_OPEN, ENV_SUGGESTION_LIMIT, ENV_SUGGESTION_MIN_CHARS,
    HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN, SUGGESTION_LIMIT, SUGGESTION_MIN_TOKEN_CHARS,
};
use kbase_core::{Error, Result};

/// Tunables for suggestions and highlighting.
///
/// # Example
/// ```
/// use kbase_query::QueryConfig;
///
/// let config = QueryConfig::default()
///     .with_suggestion_limit(5)
///     .with_highlight_markers("**", "**");
/// assert!(config.validate().is_ok());
/// assert_eq!(config.suggestion_limit, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Maximum number of suggestions returned.
    pub suggestion_limit: usize,

    /// Minimum characters in the last query word before suggesting.
    pub suggestion_min_token_chars: usize,

    /// Marker inserted before each highlighted match.
    pub highlight_open: String,

    /// Marker inserted after each highlighted match.
    pub highlight_close: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: SUGGESTION_LIMIT,
            suggestion_min_token_chars: SUGGESTION_MIN_TOKEN_CHARS,
            highlight_open: HIGHLIGHT_OPEN.to_string(),
            highlight_close: HIGHLIGHT_CLOSE.to_string(),
        }
    }
}

impl QueryConfig {
    /// Constructs a configuration from environment variables.
    ///
    /// Unset or empty variables keep their defaults. Numbers that fail to
    /// parse are logged and replaced by the default.
    pub fn from_env() -> Self {
        Self {
            suggestion_limit: parse_usize_env(ENV_SUGGESTION_LIMIT, SUGGESTION_LIMIT),
            suggestion_min_token_chars: parse_usize_env(
                ENV_SUGGESTION_MIN_CHARS,
                SUGGESTION_MIN_TOKEN_CHARS,
            ),
            highlight_open: string_env(ENV_HIGHLIGHT_OPEN, HIGHLIGHT_OPEN),
            highlight_close: string_env(ENV_HIGHLIGHT_CLOSE, HIGHLIGHT_CLOSE),
        }
    }

    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    pub fn with_suggestion_min_token_chars(mut self, min_chars: usize) -> Self {
        self.suggestion_min_token_chars = min_chars;
        self
    }

    pub fn with_highlight_markers(
        mut self,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        self.highlight_open = open.into();
        self.highlight_close = close.into();
        self
    }

    /// Reject settings that would make an operation useless.
    pub fn validate(&self) -> Result<()> {
        if self.suggestion_limit == 0 {
            return Err(Error::Config(
                "suggestion_limit must be at least 1".to_string(),
            ));
        }
        if self.highlight_open.is_empty() || self.highlight_close.is_empty() {
            return Err(Error::Config(
                "highlight markers must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parses a usize environment variable with a default fallback.
fn parse_usize_env(key: &str, default: usize) -> usize {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => match val.trim().parse::<usize>() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!(key, value = %val, default, "Invalid numeric setting, using default");
                default
            }
        },
        _ => default,
    }
}

fn string_env(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|val| !val.is_empty())
        .unwrap_or_else(|| default.to_string())
}
