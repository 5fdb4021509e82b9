//! Knowledge-base record types.
//!
//! A [`Record`] is one item in the user's knowledge base. The query engine
//! only ever reads records; creation and mutation belong to the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

// =============================================================================
// CONTENT TYPE
// =============================================================================

/// Kind of content a record holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Document,
    Image,
    Video,
    #[default]
    Note,
    Link,
}

impl ContentType {
    /// All content types in declaration order.
    pub const ALL: [ContentType; 5] = [
        Self::Document,
        Self::Image,
        Self::Video,
        Self::Note,
        Self::Link,
    ];

    /// Lowercase wire name, as used in `type:` clauses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Image => "image",
            Self::Video => "video",
            Self::Note => "note",
            Self::Link => "link",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "document" => Ok(Self::Document),
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "note" => Ok(Self::Note),
            "link" => Ok(Self::Link),
            _ => Err(Error::InvalidInput(format!("Invalid content type: {}", s))),
        }
    }
}

// =============================================================================
// RECORD
// =============================================================================

/// A single knowledge-base item.
///
/// Tags are stored with their original casing; every comparison made by the
/// query engine is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub content_type: ContentType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    /// Create a record with a fresh UUIDv7 and both timestamps set to now.
    pub fn new(title: impl Into<String>, content_type: ContentType) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: title.into(),
            content: None,
            tags: Vec::new(),
            content_type,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the record body.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Replace the record's tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the creation timestamp.
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    /// Set the last-update timestamp.
    pub fn updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = at;
        self
    }

    /// Parse a single record from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a JSON array of records.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}
