//! Structured logging schema and field name constants for kbase.
//!
//! The query engine uses these names for its `tracing` span and event
//! fields so that log aggregation can filter by the same keys everywhere.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Not used by the engine (no operation fails on user input) |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Not used by the engine (every call is a cheap computation) |
//! | DEBUG | Decision points, intermediate values, config choices |
//! | TRACE | Per-item iteration (clauses, records, suggestions) |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "query"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "parser", "evaluator", "highlighter", "suggester", "validator"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "parse", "filter", "highlight", "suggest", "validate"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Record UUID being evaluated.
pub const RECORD_ID: &str = "record_id";

/// Raw query text.
pub const QUERY: &str = "query";

/// Field name of a query clause.
pub const FIELD: &str = "field";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in microseconds.
pub const DURATION_US: &str = "duration_us";

/// Number of records handed to the evaluator.
pub const RECORD_COUNT: &str = "record_count";

/// Number of results returned by a filter or suggestion call.
pub const RESULT_COUNT: &str = "result_count";

/// Number of field clauses in a parsed query.
pub const CLAUSE_COUNT: &str = "clause_count";

/// Number of date filters in a parsed query.
pub const DATE_FILTER_COUNT: &str = "date_filter_count";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean valid/invalid indicator.
pub const VALID: &str = "valid";

/// Error message when an operation reports a problem.
pub const ERROR_MSG: &str = "error";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_names_are_unique_snake_case() {
        let names = [
            SUBSYSTEM,
            COMPONENT,
            OPERATION,
            RECORD_ID,
            QUERY,
            FIELD,
            DURATION_US,
            RECORD_COUNT,
            RESULT_COUNT,
            CLAUSE_COUNT,
            DATE_FILTER_COUNT,
            VALID,
            ERROR_MSG,
        ];
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
        for name in names {
            assert!(name.chars().all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }
}
