//! Clause extraction from raw query text.
//!
//! A clause is a word immediately followed by `:` and a value:
//!
//! - `title:"react hooks"` / `title:'react hooks'` (quotes stripped)
//! - `title:react hooks` (bare value, extends over following words)
//!
//! A bare value keeps consuming space-separated words until the next word
//! that starts a new `field:` marker or is a connective keyword
//! (`AND`/`OR`/`NOT`). A marker with nothing after the colon is not a clause.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parsed::Connective;

/// A `field:` marker anywhere in the text. Shared with the validator.
pub(crate) static FIELD_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+):").expect("field marker pattern is valid"));

static LEADING_FIELD_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w+:").expect("leading field marker pattern is valid"));

/// A `field:value` fragment borrowed from the normalized query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause<'a> {
    /// Field name as written.
    pub field: &'a str,
    /// Value with surrounding quotes removed.
    pub value: &'a str,
    /// Byte range of the whole clause, quotes included.
    pub span: Range<usize>,
}

impl Clause<'_> {
    /// The clause exactly as it appeared in the query.
    pub fn source<'s>(&self, normalized: &'s str) -> &'s str {
        &normalized[self.span.clone()]
    }
}

/// Collapse whitespace runs to single spaces and trim both ends.
pub fn normalize_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract clauses left to right from whitespace-normalized text.
///
/// The input must already be normalized (see [`normalize_whitespace`]);
/// word boundaries are single ASCII spaces.
pub fn extract_clauses(normalized: &str) -> Vec<Clause<'_>> {
    let mut clauses = Vec::new();
    let mut pos = 0;

    while pos < normalized.len() {
        let Some(caps) = FIELD_MARKER.captures_at(normalized, pos) else {
            break;
        };
        let (Some(marker), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };

        match scan_value(normalized, marker.end()) {
            Some((value, end)) => {
                clauses.push(Clause {
                    field: name.as_str(),
                    value,
                    span: marker.start()..end,
                });
                pos = end;
            }
            None => pos = marker.end(),
        }
    }

    clauses
}

/// Text left after cutting every clause out of the normalized query.
pub fn residual(normalized: &str, clauses: &[Clause<'_>]) -> String {
    let mut remaining = String::with_capacity(normalized.len());
    let mut cursor = 0;
    for clause in clauses {
        remaining.push_str(&normalized[cursor..clause.span.start]);
        cursor = clause.span.end;
    }
    remaining.push_str(&normalized[cursor..]);
    remaining
}

/// Scan a value starting right after a `field:` marker.
///
/// Returns the value and the byte offset just past it, or `None` when the
/// marker is followed by a space or the end of the text.
fn scan_value(text: &str, start: usize) -> Option<(&str, usize)> {
    let rest = &text[start..];
    let first = rest.chars().next()?;
    if first == ' ' {
        return None;
    }

    if first == '"' || first == '\'' {
        if let Some(close) = rest[1..].find(first) {
            return Some((&rest[1..1 + close], start + close + 2));
        }
        // Unterminated quote: fall through and treat it as a bare value.
    }

    let mut end = start + word_len(rest);
    while let Some(next) = text[end..].strip_prefix(' ') {
        let word = &next[..word_len(next)];
        if word.is_empty()
            || LEADING_FIELD_MARKER.is_match(word)
            || Connective::from_word(word).is_some()
        {
            break;
        }
        end += 1 + word.len();
    }

    Some((&text[start..end], end))
}

fn word_len(text: &str) -> usize {
    text.find(' ').unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &str) -> Vec<(&str, &str)> {
        extract_clauses(text)
            .into_iter()
            .map(|c| (c.field, c.value))
            .collect()
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a \t b\n\nc  "), "a b c");
        assert_eq!(normalize_whitespace("   "), "");
        assert_eq!(normalize_whitespace(""), "");
    }

    #[test]
    fn test_single_clause() {
        assert_eq!(pairs("type:note"), vec![("type", "note")]);
    }

    #[test]
    fn test_multi_word_value_stops_at_next_marker() {
        assert_eq!(
            pairs("title:react hooks guide tags:frontend"),
            vec![("title", "react hooks guide"), ("tags", "frontend")]
        );
    }

    #[test]
    fn test_value_stops_at_connective() {
        assert_eq!(
            pairs("type:note AND tags:react"),
            vec![("type", "note"), ("tags", "react")]
        );
        assert_eq!(pairs("title:rock and roll"), vec![("title", "rock")]);
    }

    #[test]
    fn test_quoted_values_are_stripped() {
        assert_eq!(
            pairs("title:\"rock and roll\" tags:'a b'"),
            vec![("title", "rock and roll"), ("tags", "a b")]
        );
    }

    #[test]
    fn test_quoted_value_does_not_extend() {
        let text = "title:\"react\" hooks";
        let clauses = extract_clauses(text);
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].value, "react");
        assert_eq!(residual(text, &clauses), " hooks");
    }

    #[test]
    fn test_unterminated_quote_is_bare() {
        assert_eq!(pairs("title:\"open ended"), vec![("title", "\"open ended")]);
    }

    #[test]
    fn test_empty_quoted_value() {
        assert_eq!(pairs("title:\"\""), vec![("title", "")]);
    }

    #[test]
    fn test_marker_without_value_is_not_a_clause() {
        assert!(pairs("title:").is_empty());
        assert_eq!(pairs("title: tags:x"), vec![("tags", "x")]);
    }

    #[test]
    fn test_colon_inside_bare_value() {
        assert_eq!(pairs("content:a:b"), vec![("content", "a:b")]);
    }

    #[test]
    fn test_marker_inside_word() {
        let text = "foo-bar:baz";
        let clauses = extract_clauses(text);
        assert_eq!(clauses[0].field, "bar");
        assert_eq!(residual(text, &clauses), "foo-");
    }

    #[test]
    fn test_date_value_with_operator() {
        assert_eq!(
            pairs("created:>=2024-01-01 updated:<2024-06-01"),
            vec![("created", ">=2024-01-01"), ("updated", "<2024-06-01")]
        );
    }

    #[test]
    fn test_clause_spans_and_source() {
        let text = "intro title:\"a b\" outro";
        let clauses = extract_clauses(text);
        assert_eq!(clauses[0].source(text), "title:\"a b\"");
        assert_eq!(residual(text, &clauses), "intro  outro");
    }

    #[test]
    fn test_no_clauses() {
        assert!(extract_clauses("just some words").is_empty());
        assert!(extract_clauses("").is_empty());
    }

    #[test]
    fn test_unicode_text() {
        assert_eq!(
            pairs("title:café crème tags:été"),
            vec![("title", "café crème"), ("tags", "été")]
        );
    }
}
