//! Cross-origin resource sharing middleware.

use tower_http::cors::CorsLayer;

/// Allows any origin, method and header.
///
/// The API is public and unauthenticated, so browser clients on other origins
/// may call it directly.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
