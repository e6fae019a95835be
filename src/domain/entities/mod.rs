//! Core domain entities.
//!
//! Entities are plain data structures without persistence logic.
//!
//! # Entity Types
//!
//! - [`ShortUrl`] - An immutable short code to URL mapping
//! - [`Counter`] - A named sequence that assigns short codes
//!
//! `NewShortUrl` carries the fields supplied at creation time; the store fills in
//! the surrogate id and timestamp.

pub mod counter;
pub mod short_url;

pub use counter::{Counter, SHORT_URL_SEQUENCE};
pub use short_url::{NewShortUrl, ShortUrl, parse_short_code};
