//! Handlers for the flight data endpoints under `/api`.
//!
//! Each handler forwards its query string to the matching
//! [`FlightService`](flightmcp_core::service::FlightService) operation and
//! returns the operation's body unwrapped. A repeated key keeps its first
//! value, so only a missing parameter can fail validation.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use flightmcp_core::params::{
    AirlineParams, AirportSearchParams, FlightStatusParams, LiveFlightsParams, RouteParams,
};

use crate::error::AppResult;
use crate::query::FirstValueQuery;
use crate::state::AppState;

/// GET /api/flights/live?from=&to=&date=
pub async fn live_flights(
    State(state): State<AppState>,
    FirstValueQuery(params): FirstValueQuery<LiveFlightsParams>,
) -> AppResult<impl IntoResponse> {
    let response = state.service.live_flights(&params).await?;
    Ok(Json(response))
}

/// GET /api/flights/status?flight_number=&date=
///
/// Answers 200 whenever `flight_number` is present, degrading to a static
/// "unavailable" body when both providers fail.
pub async fn flight_status(
    State(state): State<AppState>,
    FirstValueQuery(params): FirstValueQuery<FlightStatusParams>,
) -> AppResult<impl IntoResponse> {
    let response = state.service.flight_status(&params).await?;
    Ok(Json(response))
}

/// GET /api/airports?query=
pub async fn search_airports(
    State(state): State<AppState>,
    FirstValueQuery(params): FirstValueQuery<AirportSearchParams>,
) -> AppResult<impl IntoResponse> {
    let response = state.service.search_airports(&params).await?;
    Ok(Json(response))
}

/// GET /api/routes?from=&to=
pub async fn routes(
    State(state): State<AppState>,
    FirstValueQuery(params): FirstValueQuery<RouteParams>,
) -> AppResult<impl IntoResponse> {
    let response = state.service.routes(&params).await?;
    Ok(Json(response))
}

/// GET /api/airlines?code=
pub async fn airlines(
    State(state): State<AppState>,
    FirstValueQuery(params): FirstValueQuery<AirlineParams>,
) -> AppResult<impl IntoResponse> {
    let response = state.service.airlines(&params).await?;
    Ok(Json(response))
}
