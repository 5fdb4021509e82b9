//! Centralized default constants for kbase.
//!
//! **This module is the single source of truth** for shared default values.
//! The query engine and its configuration layer reference these constants
//! instead of defining their own magic numbers.

// =============================================================================
// QUERY FIELDS
// =============================================================================

/// Field names accepted by the validator and offered by autocomplete.
///
/// Changing this list is a breaking change for every UI consumer.
pub const ALLOWED_FIELDS: [&str; 6] = ["title", "content", "tags", "type", "created", "updated"];

// =============================================================================
// SUGGESTIONS
// =============================================================================

/// Maximum number of autocomplete suggestions returned.
pub const SUGGESTION_LIMIT: usize = 10;

/// Minimum characters in the last query token before suggesting.
pub const SUGGESTION_MIN_TOKEN_CHARS: usize = 2;

// =============================================================================
// HIGHLIGHTING
// =============================================================================

/// Opening marker inserted before each highlighted match.
pub const HIGHLIGHT_OPEN: &str = "<mark>";

/// Closing marker inserted after each highlighted match.
pub const HIGHLIGHT_CLOSE: &str = "</mark>";

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Environment variable overriding [`SUGGESTION_LIMIT`].
pub const ENV_SUGGESTION_LIMIT: &str = "KBASE_SUGGESTION_LIMIT";

/// Environment variable overriding [`SUGGESTION_MIN_TOKEN_CHARS`].
pub const ENV_SUGGESTION_MIN_CHARS: &str = "KBASE_SUGGESTION_MIN_CHARS";

/// Environment variable overriding [`HIGHLIGHT_OPEN`].
pub const ENV_HIGHLIGHT_OPEN: &str = "KBASE_HIGHLIGHT_OPEN";

/// Environment variable overriding [`HIGHLIGHT_CLOSE`].
pub const ENV_HIGHLIGHT_CLOSE: &str = "KBASE_HIGHLIGHT_CLOSE";
