//! Handler for short URL creation.

use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
};
use tracing::{debug, info};
use validator::Validate;

use crate::api::dto::shorten::{CreateShortUrlForm, CreateShortUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Assigns the next short code to a submitted URL.
///
/// # Endpoint
///
/// `POST /api/shorturl/new` with a url-encoded `url` field.
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.freecodecamp.org/", "short_url": 1 }
/// ```
///
/// # Errors
///
/// - `200 {"error": "invalid URL"}` if the URL is malformed or its host does not resolve.
///   A missing `url` field or an unreadable form body gets the same answer.
/// - `500 {"error": "failed to save short URL"}` if the store fails.
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    form: Result<Form<CreateShortUrlForm>, FormRejection>,
) -> Result<Json<CreateShortUrlResponse>, AppError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!(%rejection, "Unreadable form body");
            CreateShortUrlForm::default()
        }
    };

    form.validate()?;

    let url = form.url.as_deref().unwrap_or_default();
    info!(%url, "Posted URL");

    let short_url = state.short_url_service.create_short_url(url).await?;

    Ok(Json(CreateShortUrlResponse {
        original_url: short_url.original,
        short_url: short_url.short,
    }))
}
