//! Route definitions for the agent tool surface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::mcp;
use crate::state::AppState;

/// Tool routes, mounted at `/mcp`.
///
/// ```text
/// GET  /manifest -> manifest
/// POST /execute  -> execute
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/manifest", get(mcp::manifest))
        .route("/execute", post(mcp::execute))
}
