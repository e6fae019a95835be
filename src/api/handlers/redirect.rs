//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url_id}`
///
/// # Responses
///
/// - **302 Found** with `Location` set to the stored URL, byte for byte
/// - **200** `{"error": "No short URL found for given input"}` if the code is unknown
///
/// A storage failure during lookup is logged and answered like an unknown code.
pub async fn redirect_handler(
    Path(short_url_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    redirect_to(&state, short_url_id).await
}

/// `GET /api/shorturl/new`, which shares its path with the creation route.
///
/// `new` is never an assigned code, so this answers with the not-found body.
pub async fn redirect_new_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    redirect_to(&state, "new".to_string()).await
}

async fn redirect_to(state: &AppState, short_url_id: String) -> Result<Response, AppError> {
    info!(short_url_id = %short_url_id, "Requested short URL");

    let short_url = match state.short_url_service.resolve(&short_url_id).await {
        Ok(short_url) => short_url,
        Err(e) if e.is_storage() => {
            error!(error = %e, short_url_id = %short_url_id, "Short URL lookup failed");
            return Err(AppError::not_found(short_url_id));
        }
        Err(e) => return Err(e),
    };

    let location = match HeaderValue::from_bytes(short_url.original.as_bytes()) {
        Ok(location) => location,
        Err(e) => {
            error!(
                error = %e,
                short = short_url.short,
                "Stored URL is not a valid Location header"
            );
            return Err(AppError::not_found(short_url_id));
        }
    };

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
