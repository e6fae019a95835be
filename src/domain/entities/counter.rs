//! Named sequence counter used to assign short codes.

/// Name of the sequence that hands out short URL codes.
pub const SHORT_URL_SEQUENCE: &str = "shortUrlId";

/// Current state of a named sequence.
///
/// `seq` holds the last value handed out; the next increment returns `seq + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub name: String,
    pub seq: i64,
}

impl Counter {
    pub fn new(name: impl Into<String>, seq: i64) -> Self {
        Self {
            name: name.into(),
            seq,
        }
    }
}
