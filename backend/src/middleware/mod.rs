//! General-purpose middleware for the API.
//!
//! Request logging and CORS, applied to the whole Axum router.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if response.status().is_server_error() {
        warn!(%method, path, status, elapsed_ms, "request failed");
    } else {
        info!(%method, path, status, elapsed_ms, "request handled");
    }
    response
}

/// Any origin, method and header, matching a stock `cors()` setup.
pub fn cors() -> CorsLayer {
    CorsLayer::permissive()
}
