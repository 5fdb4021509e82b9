//! In-memory evaluation of a [`ParsedQuery`] against records.
//!
//! Every active predicate is AND-combined, whichever connectives the query
//! contained. Evaluation is a linear scan; there is no index.
//!
//! | Clause | Predicate |
//! |--------|-----------|
//! | `title:` / `content:` | record text contains the value, ignoring case |
//! | `type:` | content type name equals the value exactly |
//! | `tags:` | any query tag is a case-insensitive substring of any record tag |
//! | other fields | ignored |
//! | `created:` / `updated:` | timestamp comparison (`=` compares dates) |
//! | free text | contained in title, content or any tag, ignoring case |

use chrono::{DateTime, Utc};
use tracing::field::display;
use tracing::trace;

use kbase_core::logging::RECORD_ID;
use kbase_core::Record;

use crate::parsed::{DateField, DateFilter, DateOperator, FieldValue, ParsedQuery};
use crate::temporal::parse_timestamp;

/// Field names with a defined filter behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryField {
    Title,
    Content,
    Type,
    Tags,
    /// Any other name. Contributes no predicate.
    Unknown,
}

impl QueryField {
    pub fn from_name(name: &str) -> Self {
        match name {
            "title" => Self::Title,
            "content" => Self::Content,
            "type" => Self::Type,
            "tags" => Self::Tags,
            _ => Self::Unknown,
        }
    }
}

/// Records matching the query, cloned, in their original order.
pub fn filter(records: &[Record], query: &ParsedQuery) -> Vec<Record> {
    filter_refs(records, query).into_iter().cloned().collect()
}

/// Borrowing variant of [`filter`].
pub fn filter_refs<'a>(records: &'a [Record], query: &ParsedQuery) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| matches(record, query))
        .collect()
}

/// Check a single record against every predicate of the query.
pub fn matches(record: &Record, query: &ParsedQuery) -> bool {
    let matched = query
        .fields
        .iter()
        .all(|(name, value)| field_matches(record, QueryField::from_name(name), value))
        && query
            .date_filters
            .iter()
            .all(|filter| date_matches(record, filter))
        && query
            .full_text
            .as_deref()
            .map_or(true, |text| full_text_matches(record, text));

    trace!({ RECORD_ID } = display(record.id), matched, "Evaluated record");
    matched
}

fn field_matches(record: &Record, field: QueryField, value: &FieldValue) -> bool {
    match field {
        QueryField::Title => value.any(|v| contains_ignore_case(&record.title, v)),
        QueryField::Content => record
            .content
            .as_deref()
            .is_some_and(|content| value.any(|v| contains_ignore_case(content, v))),
        QueryField::Type => value.any(|v| record.content_type.as_str() == v),
        QueryField::Tags => value.any(|v| {
            let needle = v.to_lowercase();
            record
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
        }),
        QueryField::Unknown => true,
    }
}

fn date_matches(record: &Record, filter: &DateFilter) -> bool {
    let Some(target) = parse_timestamp(&filter.value) else {
        trace!(value = %filter.value, "Date filter value is not a timestamp");
        return false;
    };
    let actual = record_timestamp(record, filter.field);

    match filter.operator {
        DateOperator::Gt => actual > target,
        DateOperator::Lt => actual < target,
        DateOperator::Ge => actual >= target,
        DateOperator::Le => actual <= target,
        DateOperator::Eq => actual.date_naive() == target.date_naive(),
    }
}

fn record_timestamp(record: &Record, field: DateField) -> DateTime<Utc> {
    match field {
        DateField::Created => record.created_at,
        DateField::Updated => record.updated_at,
    }
}

fn full_text_matches(record: &Record, text: &str) -> bool {
    let needle = text.to_lowercase();
    record.title.to_lowercase().contains(&needle)
        || record
            .content
            .as_deref()
            .is_some_and(|content| content.to_lowercase().contains(&needle))
        || record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
