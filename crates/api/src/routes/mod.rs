pub mod flights;
pub mod health;
pub mod mcp;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /flights/live        live flights between two airports
/// /flights/status      status of one flight (always answers)
/// /airports            airport search (always answers)
/// /routes              scheduled routes between two airports
/// /airlines            airline catalog
/// ```
pub fn api_routes() -> Router<AppState> {
    flights::router()
}
