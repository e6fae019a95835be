//! DTOs for the short URL endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Form body of `POST /api/shorturl/new`.
///
/// Only the presence of `url` is checked here. Format and host checks belong to
/// [`crate::application::services::ShortUrlService::create_short_url`].
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateShortUrlForm {
    #[validate(required(message = "missing url field"))]
    pub url: Option<String>,
}

/// Successful creation response.
#[derive(Debug, Serialize)]
pub struct CreateShortUrlResponse {
    pub original_url: String,
    pub short_url: i64,
}
