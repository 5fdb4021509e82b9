//! Test fixtures for query engine integration tests.
//!
//! Provides a small knowledge base with fixed timestamps and a table of
//! representative queries.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use kbase_core::{ContentType, Record};
use uuid::Uuid;

pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

fn record(n: u128, title: &str, content_type: ContentType) -> Record {
    let mut record = Record::new(title, content_type);
    record.id = Uuid::from_u128(n);
    record
}

/// The two-record collection from the product examples.
pub fn react_and_design() -> Vec<Record> {
    vec![
        record(1, "React Best Practices", ContentType::Note)
            .with_content("Prefer composition and small components.")
            .with_tags(["react", "frontend"])
            .created_at(at(2024, 1, 15, 10))
            .updated_at(at(2024, 2, 1, 9)),
        record(2, "Design Docs", ContentType::Document)
            .with_tags(["design"])
            .created_at(at(2024, 3, 3, 14))
            .updated_at(at(2024, 3, 4, 8)),
    ]
}

/// A larger mixed collection covering every content type.
pub fn library() -> Vec<Record> {
    let mut records = react_and_design();
    records.extend([
        record(3, "Rust Ownership Explained", ContentType::Document)
            .with_content("Borrowing rules, lifetimes and moves.")
            .with_tags(["Rust", "systems"])
            .created_at(at(2023, 12, 31, 23))
            .updated_at(at(2024, 1, 20, 12)),
        record(4, "Team Offsite Photos", ContentType::Image)
            .with_tags(["team", "travel"])
            .created_at(at(2024, 5, 10, 16))
            .updated_at(at(2024, 5, 10, 16)),
        record(5, "Keynote Recording", ContentType::Video)
            .with_content("Talk about design systems at scale.")
            .with_tags(["conference", "design-systems"])
            .created_at(at(2024, 6, 1, 18))
            .updated_at(at(2024, 6, 2, 7)),
        record(6, "Useful Crates", ContentType::Link)
            .with_content("https://crates.io/crates/regex")
            .with_tags(["rust", "tools"])
            .created_at(at(2024, 2, 14, 11))
            .updated_at(at(2024, 7, 1, 10)),
        record(7, "Untitled thought", ContentType::Note)
            .created_at(at(2024, 7, 4, 20))
            .updated_at(at(2024, 7, 4, 20)),
    ]);
    records
}

/// Queries exercising every clause kind, used for property checks.
pub const QUERIES: &[&str] = &[
    "",
    "   ",
    "design",
    "rust",
    "type:note",
    "type:document AND tags:react",
    "tags:rust,design",
    "tags:RUST",
    "title:\"best practices\"",
    "content:design systems",
    "created:>2024-01-01",
    "created:>=2024-02-01 created:<2024-06-01",
    "updated:=2024-03-04",
    "created:2024-01-01",
    "created:>not-a-date",
    "author:someone rust",
    "NOT title:untitled",
    "!!! ::: ,,,",
];
