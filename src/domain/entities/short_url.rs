//! Short URL entity representing an immutable code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between a sequential short code and the submitted URL.
///
/// Records are written once and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub id: i64,
    pub original: String,
    pub short: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(id: i64, original: String, short: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            original,
            short,
            created_at,
        }
    }
}

/// Input data for persisting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub original: String,
    pub short: i64,
}

/// Parses a requested short code into the stored integer value.
///
/// Only the canonical decimal rendering of a positive integer matches a stored
/// code: `"01"`, `"+1"` and `" 1"` do not match `1`.
pub fn parse_short_code(code: &str) -> Option<i64> {
    let value = code.parse::<i64>().ok()?;
    (value > 0 && value.to_string() == code).then_some(value)
}
