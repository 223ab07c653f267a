use std::sync::Arc;

use flightmcp_core::service::FlightService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Flight operations over the configured providers.
    pub service: Arc<FlightService>,
}
