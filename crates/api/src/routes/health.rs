use axum::{routing::get, Json, Router};
use flightmcp_core::provider::{AVIATIONSTACK, FLIGHTAPI};
use serde::Serialize;

use crate::state::AppState;

/// Flight data endpoints advertised by the status banner.
const ENDPOINTS: [&str; 5] = [
    "/api/flights/live",
    "/api/flights/status",
    "/api/airports",
    "/api/routes",
    "/api/airlines",
];

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// Status banner served at the root.
#[derive(Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub apis: [&'static str; 2],
    pub endpoints: [&'static str; 5],
}

/// GET /health -- liveness only; providers are not probed.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET / -- service banner listing the providers and flight endpoints.
async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "✈️ MCP Flight Server Running!",
        status: "online",
        apis: [AVIATIONSTACK, FLIGHTAPI],
        endpoints: ENDPOINTS,
    })
}

/// Mount the root-level status routes (NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health_check))
}
