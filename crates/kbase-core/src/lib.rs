//! # kbase-core
//!
//! Core types and shared definitions for the kbase knowledge base.
//!
//! This crate provides the record model consumed by the query engine, the
//! workspace error type, the structured logging schema, and the centralized
//! default values.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
