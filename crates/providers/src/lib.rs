//! Upstream flight-data provider adapters.
//!
//! Wraps the AviationStack and FlightAPI.io HTTP APIs using [`reqwest`] and
//! normalizes their responses into the canonical shapes of
//! `flightmcp_core::model`. Each adapter implements one of the provider
//! ports in `flightmcp_core::provider`.

pub mod aviationstack;
pub mod flightapi;
mod http;
mod lenient;

pub use aviationstack::AviationStackClient;
pub use flightapi::FlightApiClient;

/// Build the HTTP client shared by both adapters.
///
/// No request timeout is set; calls are bounded by the transport defaults
/// and the inbound request timeout of the server.
pub fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(concat!("flightmcp/", env!("CARGO_PKG_VERSION")))
        .build()
}
