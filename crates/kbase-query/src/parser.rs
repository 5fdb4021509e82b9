//! Query parsing: clause classification and residual text handling.
//!
//! Parsing never fails. Every clause extracted by [`crate::extract`] is routed
//! to one of three destinations:
//!
//! - `created:` / `updated:` become [`DateFilter`]s (appended, never replaced)
//! - `tags:` becomes a list when the value contains commas
//! - any other field, known or not, is stored verbatim (last write wins)
//!
//! # Dropped date clauses
//!
//! A `created:`/`updated:` clause whose value does not start with one of the
//! operators `> < >= <= =`, or has nothing after the operator, is dropped
//! without error. The rest of the query is still parsed and applied.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use kbase_core::logging::FIELD;

use crate::extract::{extract_clauses, normalize_whitespace, residual, Clause};
use crate::parsed::{Connective, DateField, DateFilter, DateOperator, FieldValue, ParsedQuery};

static DATE_COMPARISON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([<>=!]+)(.*)$").expect("date comparison pattern is valid"));

static CONNECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(AND|OR|NOT)\b").expect("connective pattern is valid"));

/// Parse a raw query string.
///
/// # Examples
///
/// ```
/// use kbase_query::{parse, Connective, FieldValue};
///
/// let query = parse("ownership type:note AND tags:rust,async");
/// assert_eq!(query.field("type"), Some(&FieldValue::from("note")));
/// assert_eq!(query.connectives, vec![Connective::And]);
/// assert_eq!(query.full_text.as_deref(), Some("ownership"));
/// ```
pub fn parse(query: &str) -> ParsedQuery {
    let normalized = normalize_whitespace(query);
    let clauses = extract_clauses(&normalized);

    // No clauses: the whole query is free text, connectives included.
    if clauses.is_empty() {
        return ParsedQuery::new().with_full_text(normalized);
    }

    let mut parsed = ParsedQuery::new();
    for clause in &clauses {
        classify(clause, &mut parsed);
    }

    let remaining = residual(&normalized, &clauses);
    parsed.connectives = CONNECTIVE
        .find_iter(&remaining)
        .filter_map(|m| Connective::from_word(m.as_str()))
        .collect();
    let remaining = CONNECTIVE.replace_all(&remaining, "");

    parsed = parsed.with_full_text(normalize_whitespace(&remaining));
    parsed
}

/// Route one clause into the parsed query.
fn classify(clause: &Clause<'_>, parsed: &mut ParsedQuery) {
    trace!({ FIELD } = clause.field, value = clause.value, "Classifying clause");

    if let Some(field) = DateField::from_name(clause.field) {
        match parse_date_comparison(field, clause.value) {
            Some(filter) => parsed.date_filters.push(filter),
            None => debug!(
                { FIELD } = clause.field,
                value = clause.value,
                "Dropping date clause without a valid comparison operator"
            ),
        }
        return;
    }

    let value = if clause.field == "tags" && clause.value.contains(',') {
        FieldValue::Many(split_tags(clause.value))
    } else {
        FieldValue::Single(clause.value.to_string())
    };
    parsed.fields.insert(clause.field.to_string(), value);
}

/// Split `>=2024-01-01` into an operator and a date value.
fn parse_date_comparison(field: DateField, value: &str) -> Option<DateFilter> {
    let caps = DATE_COMPARISON.captures(value)?;
    let operator = DateOperator::from_symbol(caps.get(1)?.as_str())?;
    let date = caps.get(2)?.as_str().trim();
    if date.is_empty() {
        return None;
    }
    Some(DateFilter::new(field, operator, date))
}

/// Comma-separated tag list with each piece trimmed. Empty pieces are kept.
fn split_tags(value: &str) -> Vec<String> {
    value.split(',').map(|tag| tag.trim().to_string()).collect()
}
