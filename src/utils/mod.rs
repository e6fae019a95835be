//! Helper functions used across the application.
//!
//! - [`url_validator`] - Syntactic URL validation
//! - [`host`] - Host segment extraction for DNS checks

pub mod host;
pub mod url_validator;
