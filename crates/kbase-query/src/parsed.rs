//! Structured representation of a parsed query.
//!
//! A [`ParsedQuery`] is produced fresh by every call to
//! [`parse`](crate::parser::parse) and is consumed by the evaluator. Its JSON
//! shape (`fields`, `dateFilters`, `connectives`, `fullText`) is what the UI
//! layer receives.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// FIELD VALUES
// =============================================================================

/// Value of a field clause.
///
/// Only `tags` clauses produce [`FieldValue::Many`], by splitting on commas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Many(Vec<String>),
}

impl FieldValue {
    /// All values as a slice; a single value is a one-element slice.
    pub fn values(&self) -> &[String] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }

    /// Returns true if any value satisfies the predicate.
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&String) -> bool,
    {
        self.values().iter().any(predicate)
    }

    /// The value if it is a single string.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Many(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

// =============================================================================
// DATE FILTERS
// =============================================================================

/// Timestamp a date filter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateField {
    Created,
    Updated,
}

impl DateField {
    /// Map a clause field name to a date field.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "created" => Some(Self::Created),
            "updated" => Some(Self::Updated),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison operator of a date filter.
///
/// `=` compares calendar dates; every other operator compares instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateOperator {
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = "=")]
    Eq,
}

impl DateOperator {
    /// Parse an operator symbol. Anything outside `> < >= <= =` is `None`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ">" => Some(Self::Gt),
            "<" => Some(Self::Lt),
            ">=" => Some(Self::Ge),
            "<=" => Some(Self::Le),
            "=" => Some(Self::Eq),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Ge => ">=",
            Self::Le => "<=",
            Self::Eq => "=",
        }
    }
}

impl fmt::Display for DateOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `created:` or `updated:` comparison.
///
/// The value is kept as written; it is only parsed as a timestamp when the
/// filter is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFilter {
    pub field: DateField,
    pub operator: DateOperator,
    pub value: String,
}

impl DateFilter {
    pub fn new(field: DateField, operator: DateOperator, value: impl Into<String>) -> Self {
        Self {
            field,
            operator,
            value: value.into(),
        }
    }
}

// =============================================================================
// CONNECTIVES
// =============================================================================

/// Boolean-looking keyword found in query text.
///
/// Connectives are recorded for display only; evaluation always combines
/// every predicate with AND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Connective {
    And,
    Or,
    Not,
}

impl Connective {
    /// Match a whole word against the connective keywords, ignoring case.
    pub fn from_word(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("and") {
            Some(Self::And)
        } else if word.eq_ignore_ascii_case("or") {
            Some(Self::Or)
        } else if word.eq_ignore_ascii_case("not") {
            Some(Self::Not)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// PARSED QUERY
// =============================================================================

/// Result of parsing a raw query string.
///
/// Containers are always present (possibly empty). `full_text` is `None`
/// rather than an empty string, so callers can test for it directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuery {
    /// Field clauses keyed by field name. Unrecognized names are kept verbatim.
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,

    /// Date comparisons in source order.
    #[serde(default)]
    pub date_filters: Vec<DateFilter>,

    /// Connective keywords in source order.
    #[serde(default)]
    pub connectives: Vec<Connective>,

    /// Residual free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,
}

impl ParsedQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty query matches every record.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.date_filters.is_empty() && self.full_text.is_none()
    }

    /// Look up a field clause by name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Add or replace a field clause.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Append a date filter.
    pub fn with_date_filter(mut self, filter: DateFilter) -> Self {
        self.date_filters.push(filter);
        self
    }

    /// Set the free text. Blank text clears it.
    pub fn with_full_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.full_text = if text.trim().is_empty() {
            None
        } else {
            Some(text)
        };
        self
    }
}

/// Renders the query in canonical form: free text, then field clauses, then
/// date filters. Connectives are omitted since their position is not kept.
///
/// Queries produced by [`parse`](crate::parser::parse) reparse to an equal
/// value, with two exceptions the query language has no syntax for:
///
/// - a value that needs quoting and contains both `"` and `'`
/// - a tag list with fewer than two entries (only built by hand)
impl fmt::Display for ParsedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if let Some(text) = &self.full_text {
            parts.push(text.clone());
        }
        for (name, value) in &self.fields {
            let rendered = match value {
                FieldValue::Single(v) => quote_if_needed(v),
                FieldValue::Many(vs) => quote_if_needed(&vs.join(",")),
            };
            parts.push(format!("{}:{}", name, rendered));
        }
        for filter in &self.date_filters {
            parts.push(format!("{}:{}{}", filter.field, filter.operator, filter.value));
        }

        f.write_str(&parts.join(" "))
    }
}

/// Bare when the value is one word that does not open a quote. Otherwise
/// wrapped in `"`, or in `'` when the value contains `"`.
fn quote_if_needed(value: &str) -> String {
    let opens_quote = value.starts_with('"') || value.starts_with('\'');
    if !value.is_empty() && !value.contains(' ') && !opens_quote {
        value.to_string()
    } else if value.contains('"') {
        format!("'{}'", value)
    } else {
        format!("\"{}\"", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_values() {
        let single = FieldValue::from("react");
        assert_eq!(single.values(), &["react".to_string()]);
        assert_eq!(single.as_single(), Some("react"));

        let many = FieldValue::from(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(many.values().len(), 2);
        assert_eq!(many.as_single(), None);
        assert!(many.any(|v| v == "b"));
    }

    #[test]
    fn test_date_operator_symbols() {
        for symbol in [">", "<", ">=", "<=", "="] {
            let op = DateOperator::from_symbol(symbol).unwrap();
            assert_eq!(op.as_str(), symbol);
        }
        assert_eq!(DateOperator::from_symbol("!="), None);
        assert_eq!(DateOperator::from_symbol("=>"), None);
        assert_eq!(DateOperator::from_symbol(""), None);
    }

    #[test]
    fn test_date_field_from_name() {
        assert_eq!(DateField::from_name("created"), Some(DateField::Created));
        assert_eq!(DateField::from_name("updated"), Some(DateField::Updated));
        assert_eq!(DateField::from_name("Created"), None);
    }

    #[test]
    fn test_connective_from_word() {
        assert_eq!(Connective::from_word("AND"), Some(Connective::And));
        assert_eq!(Connective::from_word("or"), Some(Connective::Or));
        assert_eq!(Connective::from_word("Not"), Some(Connective::Not));
        assert_eq!(Connective::from_word("android"), None);
    }

    #[test]
    fn test_empty_query() {
        let query = ParsedQuery::new();
        assert!(query.is_empty());
        assert!(query.fields.is_empty());
        assert!(query.date_filters.is_empty());
        assert!(query.connectives.is_empty());
        assert!(query.full_text.is_none());
    }

    #[test]
    fn test_with_full_text_blank_is_none() {
        let query = ParsedQuery::new().with_full_text("   ");
        assert!(query.full_text.is_none());
        assert!(query.is_empty());
    }

    #[test]
    fn test_connectives_alone_do_not_make_query_non_empty() {
        let mut query = ParsedQuery::new();
        query.connectives.push(Connective::And);
        assert!(query.is_empty());
    }

    #[test]
    fn test_serialize_json_shape() {
        let query = ParsedQuery::new()
            .with_field("tags", vec!["a".to_string(), "b".to_string()])
            .with_field("type", "note")
            .with_date_filter(DateFilter::new(
                DateField::Created,
                DateOperator::Ge,
                "2024-01-01",
            ));

        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["fields"]["tags"], serde_json::json!(["a", "b"]));
        assert_eq!(value["fields"]["type"], "note");
        assert_eq!(value["dateFilters"][0]["field"], "created");
        assert_eq!(value["dateFilters"][0]["operator"], ">=");
        assert_eq!(value["connectives"], serde_json::json!([]));
        assert!(value.get("fullText").is_none());
    }

    #[test]
    fn test_deserialize_roundtrip() {
        let json = r#"{"fields":{"title":"x"},"dateFilters":[],"connectives":["OR"],"fullText":"y"}"#;
        let query: ParsedQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.field("title"), Some(&FieldValue::from("x")));
        assert_eq!(query.connectives, vec![Connective::Or]);
        assert_eq!(query.full_text.as_deref(), Some("y"));
    }

    #[test]
    fn test_display_canonical_form() {
        let query = ParsedQuery::new()
            .with_field("title", "react hooks")
            .with_field("tags", vec!["a".to_string(), "b".to_string()])
            .with_date_filter(DateFilter::new(
                DateField::Updated,
                DateOperator::Lt,
                "2024-06-01",
            ))
            .with_full_text("draft");

        assert_eq!(
            query.to_string(),
            "draft tags:a,b title:\"react hooks\" updated:<2024-06-01"
        );
    }

    #[test]
    fn test_display_uses_single_quotes_around_double_quotes() {
        let query = ParsedQuery::new().with_field("title", "say \"hi\" now");
        assert_eq!(query.to_string(), "title:'say \"hi\" now'");
    }

    #[test]
    fn test_display_quotes_tag_list_with_spaces() {
        let query = ParsedQuery::new().with_field(
            "tags",
            vec!["rock and roll".to_string(), "jazz".to_string()],
        );
        assert_eq!(query.to_string(), "tags:\"rock and roll,jazz\"");
    }

    #[test]
    fn test_display_keeps_empty_tag_pieces() {
        let query = ParsedQuery::new().with_field("tags", vec!["a".to_string(), String::new()]);
        assert_eq!(query.to_string(), "tags:a,");
    }

    #[test]
    fn test_display_quotes_value_opening_with_quote() {
        let query = ParsedQuery::new().with_field("title", "'draft'");
        assert_eq!(query.to_string(), "title:\"'draft'\"");

        let query = ParsedQuery::new().with_field("title", "\"draft");
        assert_eq!(query.to_string(), "title:'\"draft'");
    }

    #[test]
    fn test_display_value_with_both_quote_kinds_is_single_quoted() {
        let query = ParsedQuery::new().with_field("title", "it's \"x\"");
        assert_eq!(query.to_string(), "title:'it's \"x\"'");
    }
}
