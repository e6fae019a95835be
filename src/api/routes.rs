//! API route configuration.

use crate::api::handlers::{
    create_short_url_handler, hello_handler, redirect_handler, redirect_new_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET  /hello`                    - Greeting
/// - `POST /shorturl/new`             - Create a short URL (form field `url`)
/// - `GET  /shorturl/{short_url_id}`  - Redirect to the original URL
///
/// `GET /shorturl/new` resolves `new` like any other code.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello_handler))
        .route(
            "/shorturl/new",
            post(create_short_url_handler).get(redirect_new_handler),
        )
        .route("/shorturl/{short_url_id}", get(redirect_handler))
}
