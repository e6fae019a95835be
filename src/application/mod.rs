//! Application layer services.
//!
//! Services orchestrate domain operations by coordinating repository and
//! resolver calls. Handlers talk to services, never to storage.
//!
//! # Available Services
//!
//! - [`services::short_url_service::ShortUrlService`] - Short URL creation and resolution

pub mod services;
