//! Search-term highlighting.
//!
//! The term is always matched literally: regex metacharacters in user input
//! are escaped before the matcher is built.

use regex::{Captures, RegexBuilder};
use tracing::warn;

use kbase_core::defaults::{HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN};

/// Wrap every case-insensitive occurrence of `term` in `<mark>` tags.
///
/// Matched text keeps its original casing. An empty term returns the text
/// unchanged.
///
/// ```
/// use kbase_query::highlight;
///
/// assert_eq!(highlight("Hello World", "world"), "Hello <mark>World</mark>");
/// assert_eq!(highlight("Hello World", ""), "Hello World");
/// ```
pub fn highlight(text: &str, term: &str) -> String {
    highlight_with(text, term, HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE)
}

/// [`highlight`] with caller-supplied markers.
pub fn highlight_with(text: &str, term: &str, open: &str, close: &str) -> String {
    if term.is_empty() {
        return text.to_string();
    }

    let matcher = match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    {
        Ok(matcher) => matcher,
        Err(e) => {
            warn!(error = %e, term_len = term.len(), "Cannot build highlight matcher, skipping");
            return text.to_string();
        }
    };

    matcher
        .replace_all(text, |caps: &Captures<'_>| {
            format!("{}{}{}", open, &caps[0], close)
        })
        .into_owned()
}
