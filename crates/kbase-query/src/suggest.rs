//! Autocomplete suggestions drawn from record values.
//!
//! The last word of the partial query is matched against distinct titles,
//! tags and content types. Suggestions are grouped in that order, each group
//! in the order values were first seen in the collection.

use std::collections::HashSet;

use kbase_core::defaults::{SUGGESTION_LIMIT, SUGGESTION_MIN_TOKEN_CHARS};
use kbase_core::Record;

/// Suggest completions for the last word of `partial`, at most ten.
///
/// ```
/// use kbase_core::{ContentType, Record};
/// use kbase_query::suggestions;
///
/// let records = vec![Record::new("Rust Notes", ContentType::Note).with_tags(["rust"])];
/// assert_eq!(
///     suggestions("learn ru", &records),
///     vec!["title:\"Rust Notes\"".to_string(), "tags:rust".to_string()]
/// );
/// ```
pub fn suggestions(partial: &str, records: &[Record]) -> Vec<String> {
    suggest_with(partial, records, SUGGESTION_LIMIT, SUGGESTION_MIN_TOKEN_CHARS)
}

/// [`suggestions`] with an explicit limit and minimum token length.
pub fn suggest_with(
    partial: &str,
    records: &[Record],
    limit: usize,
    min_token_chars: usize,
) -> Vec<String> {
    let Some(token) = partial.split_whitespace().last() else {
        return Vec::new();
    };
    if token.chars().count() < min_token_chars {
        return Vec::new();
    }
    let needle = token.to_lowercase();
    let matches = |value: &&str| value.to_lowercase().contains(&needle);

    let titles = distinct(records.iter().map(|r| r.title.as_str()));
    let tags = distinct(records.iter().flat_map(|r| r.tags.iter().map(String::as_str)));
    let types = distinct(records.iter().map(|r| r.content_type.as_str()));

    titles
        .into_iter()
        .filter(matches)
        .map(|title| format!("title:\"{}\"", title))
        .chain(tags.into_iter().filter(matches).map(|tag| format!("tags:{}", tag)))
        .chain(types.into_iter().filter(matches).map(|ty| format!("type:{}", ty)))
        .take(limit)
        .collect()
}

/// Unique values in first-seen order.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(*value)).collect()
}
