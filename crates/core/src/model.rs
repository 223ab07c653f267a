//! Canonical output shapes.
//!
//! Every record returned to a caller is one of these types, whichever
//! provider (or static table) it came from. Fields a provider did not report
//! serialize as `null`; the few fields only one provider knows about are
//! omitted entirely when absent.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Flights
// ---------------------------------------------------------------------------

/// One end (departure or arrival) of a flight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightEndpoint {
    pub airport: Option<String>,
    pub iata: Option<String>,
    pub scheduled: Option<String>,
    pub estimated: Option<String>,
    pub actual: Option<String>,
    pub terminal: Option<String>,
    pub gate: Option<String>,
    /// Delay in minutes, reported by FlightAPI.io only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<i64>,
}

/// A single flight's schedule and status as listed by a route search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_number: Option<String>,
    pub airline: Option<String>,
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    pub status: Option<String>,
    pub aircraft: Option<String>,
}

/// Gate assignments as reported by the schedule provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GateInfo {
    pub departure_gate: Option<String>,
    pub arrival_gate: Option<String>,
}

/// Real-time status of one flight number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightStatus {
    /// The flight number exactly as the caller requested it.
    pub flight_number: String,
    pub status: String,
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    pub airline: Option<String>,
    pub aircraft: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate_info: Option<GateInfo>,
}

impl FlightStatus {
    /// Status text used when a provider omits it.
    pub const UNKNOWN: &'static str = "Unknown";

    /// Re-key a listed flight as a status answer for `flight_number`.
    pub fn from_record(flight_number: &str, record: FlightRecord) -> Self {
        Self {
            flight_number: flight_number.to_string(),
            status: record.status.unwrap_or_else(|| Self::UNKNOWN.to_string()),
            departure: record.departure,
            arrival: record.arrival,
            airline: record.airline,
            aircraft: record.aircraft,
            gate_info: None,
        }
    }
}

/// Degraded status answer used when no provider could be reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnavailableStatus {
    pub flight_number: String,
    pub status: String,
    pub message: String,
    pub suggested_actions: Vec<String>,
}

impl UnavailableStatus {
    pub const STATUS: &'static str = "Unable to retrieve real-time status";

    pub const SUGGESTED_ACTIONS: [&'static str; 3] = [
        "Check airline's official website",
        "Call airline customer service",
        "Check airport departure/arrival boards",
    ];

    pub fn new(flight_number: &str) -> Self {
        Self {
            flight_number: flight_number.to_string(),
            status: Self::STATUS.to_string(),
            message: format!(
                "Flight {flight_number} status is currently unavailable. Please check the \
                 airline's official website or contact them directly for the most up-to-date \
                 information."
            ),
            suggested_actions: Self::SUGGESTED_ACTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Either a live status or the static "unavailable" answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlightStatusReport {
    Live(FlightStatus),
    Unavailable(UnavailableStatus),
}

// ---------------------------------------------------------------------------
// Airports, routes, airlines
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub name: Option<String>,
    pub iata: Option<String>,
    pub icao: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Airport and IATA code of a route endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteEndpoint {
    pub airport: Option<String>,
    pub iata: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub airline: Option<String>,
    pub airline_iata: Option<String>,
    pub flight_number: Option<String>,
    pub departure: RouteEndpoint,
    pub arrival: RouteEndpoint,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Airline {
    pub name: Option<String>,
    pub iata: Option<String>,
    pub icao: Option<String>,
    pub country: Option<String>,
    pub fleet_size: Option<u32>,
    pub callsign: Option<String>,
}
