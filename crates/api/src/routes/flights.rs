//! Route definitions for the flight data endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::flights;
use crate::state::AppState;

/// Flight data routes, mounted at `/api`.
///
/// ```text
/// GET /flights/live    -> live_flights
/// GET /flights/status  -> flight_status
/// GET /airports        -> search_airports
/// GET /routes          -> routes
/// GET /airlines        -> airlines
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/flights/live", get(flights::live_flights))
        .route("/flights/status", get(flights::flight_status))
        .route("/airports", get(flights::search_airports))
        .route("/routes", get(flights::routes))
        .route("/airlines", get(flights::airlines))
}
