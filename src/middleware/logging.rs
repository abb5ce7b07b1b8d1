//! Logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

/// Request logging middleware.
///
/// Logs the matched route template (e.g. `/api/v1/topics/{id}`) when routing
/// has already run, otherwise the raw path.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    if status.is_server_error() {
        warn!(%method, route = %route, status = status.as_u16(), %duration_ms, "Request failed with server error");
    } else if status.is_client_error() && status != StatusCode::NOT_FOUND {
        warn!(%method, route = %route, status = status.as_u16(), %duration_ms, "Request rejected");
    } else {
        info!(%method, route = %route, status = status.as_u16(), %duration_ms, "Request completed");
    }

    response
}
