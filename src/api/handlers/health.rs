//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Store reachable
/// - **503 Service Unavailable**: Store unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "last_short_url": 42,
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, last short URL: 42" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let (database, last_short_url) = check_database(&state).await;
    let healthy = database.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        last_short_url,
        checks: HealthChecks { database },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Probes the store by reading the short URL sequence.
async fn check_database(state: &AppState) -> (CheckStatus, Option<i64>) {
    match state.short_url_service.sequence_state().await {
        Ok(Some(counter)) => (
            CheckStatus::ok(format!("Connected, last short URL: {}", counter.seq)),
            Some(counter.seq),
        ),
        Ok(None) => (CheckStatus::ok("Connected, no short URLs yet"), None),
        Err(e) => (CheckStatus::error(format!("Database error: {}", e)), None),
    }
}
