//! Query engine facade with configuration and tracing.
//!
//! [`QueryEngine`] exposes the same operations as the free functions in this
//! crate, but applies a [`QueryConfig`] and records each call as a `tracing`
//! span with the workspace's standard fields.

use std::time::Instant;

use tracing::{debug, instrument};

use kbase_core::logging::{
    CLAUSE_COUNT, DATE_FILTER_COUNT, DURATION_US, ERROR_MSG, RESULT_COUNT, VALID,
};
use kbase_core::{Record, Result};

use crate::config::QueryConfig;
use crate::evaluate;
use crate::highlight::highlight_with;
use crate::parsed::ParsedQuery;
use crate::parser;
use crate::suggest::suggest_with;
use crate::validate::{self, ValidationResult};

/// Stateless query engine. Cheap to clone and safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    config: QueryConfig,
}

impl QueryEngine {
    pub fn new(config: QueryConfig) -> Self {
        Self { config }
    }

    /// Build an engine from environment configuration.
    pub fn from_env() -> Result<Self> {
        let config = QueryConfig::from_env();
        config.validate()?;
        debug!(?config, "Query engine configured from environment");
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    #[instrument(skip(self), fields(subsystem = "query", component = "parser", op = "parse"))]
    pub fn parse(&self, query: &str) -> ParsedQuery {
        let start = Instant::now();
        let parsed = parser::parse(query);
        debug!(
            { CLAUSE_COUNT } = parsed.fields.len(),
            { DATE_FILTER_COUNT } = parsed.date_filters.len(),
            connective_count = parsed.connectives.len(),
            has_full_text = parsed.full_text.is_some(),
            { DURATION_US } = start.elapsed().as_micros() as u64,
            "Query parsed"
        );
        parsed
    }

    #[instrument(skip(self, records, query), fields(
        subsystem = "query",
        component = "evaluator",
        op = "filter",
        record_count = records.len(),
    ))]
    pub fn filter(&self, records: &[Record], query: &ParsedQuery) -> Vec<Record> {
        let start = Instant::now();
        let results = evaluate::filter(records, query);
        debug!(
            { RESULT_COUNT } = results.len(),
            { DURATION_US } = start.elapsed().as_micros() as u64,
            "Filter complete"
        );
        results
    }

    /// Parse and filter in one step.
    #[instrument(skip(self, records), fields(subsystem = "query", op = "search"))]
    pub fn search(&self, records: &[Record], query: &str) -> Vec<Record> {
        let parsed = self.parse(query);
        self.filter(records, &parsed)
    }

    #[instrument(skip(self, text), fields(
        subsystem = "query",
        component = "highlighter",
        op = "highlight",
    ))]
    pub fn highlight(&self, text: &str, term: &str) -> String {
        highlight_with(
            text,
            term,
            &self.config.highlight_open,
            &self.config.highlight_close,
        )
    }

    #[instrument(skip(self, records), fields(
        subsystem = "query",
        component = "suggester",
        op = "suggest",
        record_count = records.len(),
    ))]
    pub fn suggestions(&self, partial: &str, records: &[Record]) -> Vec<String> {
        let results = suggest_with(
            partial,
            records,
            self.config.suggestion_limit,
            self.config.suggestion_min_token_chars,
        );
        debug!({ RESULT_COUNT } = results.len(), "Suggestions generated");
        results
    }

    #[instrument(skip(self), fields(subsystem = "query", component = "validator", op = "validate"))]
    pub fn validate(&self, query: &str) -> ValidationResult {
        let result = validate::validate(query);
        debug!(
            { VALID } = result.valid,
            { ERROR_MSG } = result.error.as_deref(),
            "Query validated"
        );
        result
    }
}
