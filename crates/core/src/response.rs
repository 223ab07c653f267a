//! Success bodies returned by [`crate::service::FlightService`].

use serde::Serialize;

use crate::model::{Airline, Airport, FlightRecord, FlightStatusReport, Route};

#[derive(Debug, Clone, Serialize)]
pub struct LiveFlightsResponse {
    pub success: bool,
    /// `"FROM → TO"`.
    pub route: String,
    /// Requested date, or `"Today"` when none was given.
    pub date: String,
    /// Number of flights the provider returned, before truncation.
    pub total_flights: usize,
    pub flights: Vec<FlightRecord>,
    pub source: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlightStatusResponse {
    pub success: bool,
    pub flight: FlightStatusReport,
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AirportSearchResponse {
    pub success: bool,
    pub query: String,
    pub total_results: usize,
    pub airports: Vec<Airport>,
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoutesResponse {
    pub success: bool,
    pub route: String,
    pub total_routes: usize,
    pub routes: Vec<Route>,
    pub source: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AirlinesResponse {
    pub success: bool,
    /// Requested airline code, or `"All airlines"`.
    pub query: String,
    pub total_airlines: usize,
    pub airlines: Vec<Airline>,
    pub source: &'static str,
}

/// Result of a dispatched tool: the invoked operation's success body.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ToolResult {
    LiveFlights(LiveFlightsResponse),
    FlightStatus(FlightStatusResponse),
    Airports(AirportSearchResponse),
    Routes(RoutesResponse),
    Airlines(AirlinesResponse),
}
