//! # kbase-query
//!
//! Search-query language and in-memory evaluator for kbase.
//!
//! This crate provides:
//! - Parsing of `field:value` clauses, date comparisons, connectives and
//!   free text into a [`ParsedQuery`]
//! - Conjunctive evaluation of a parsed query over a slice of records
//! - Literal, case-insensitive highlighting of a search term
//! - Autocomplete suggestions drawn from record titles, tags and types
//! - Advisory validation of raw query strings
//!
//! Every operation is a pure function over its inputs. Evaluation is a
//! linear scan with no index, which suits small personal collections.
//!
//! ## Example
//!
//! ```
//! use kbase_core::{ContentType, Record};
//! use kbase_query::{filter, parse, validate};
//!
//! let records = vec![
//!     Record::new("React Best Practices", ContentType::Note).with_tags(["react", "frontend"]),
//!     Record::new("Design Docs", ContentType::Document).with_tags(["design"]),
//! ];
//!
//! assert!(validate("type:note AND tags:react").valid);
//!
//! let hits = filter(&records, &parse("type:note AND tags:react"));
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].title, "React Best Practices");
//! ```

pub mod config;
pub mod engine;
pub mod evaluate;
pub mod extract;
pub mod highlight;
pub mod parsed;
pub mod parser;
pub mod suggest;
pub mod temporal;
pub mod validate;

// Re-export core types
pub use kbase_core::*;

pub use config::QueryConfig;
pub use engine::QueryEngine;
pub use evaluate::{filter, filter_refs, matches, QueryField};
pub use extract::{extract_clauses, normalize_whitespace, Clause};
pub use highlight::{highlight, highlight_with};
pub use parsed::{Connective, DateField, DateFilter, DateOperator, FieldValue, ParsedQuery};
pub use parser::parse;
pub use suggest::{suggest_with, suggestions};
pub use temporal::parse_timestamp;
pub use validate::{check, validate, ValidationError, ValidationResult};
