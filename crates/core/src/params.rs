//! Inbound parameters for the five flight operations.
//!
//! Each raw params struct deserializes from a query string or from a tool
//! invocation's `parameters` object with every field optional, then
//! `validate()` turns it into a query carrying only what the operation
//! needs. Empty strings count as missing.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Return the value if it is present and non-empty.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Raw parameters
// ---------------------------------------------------------------------------

/// `?from=&to=&date=` for the live flights listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiveFlightsParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: Option<String>,
}

/// `?flight_number=&date=` for the status lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightStatusParams {
    pub flight_number: Option<String>,
    pub date: Option<String>,
}

/// `?query=` for airport search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirportSearchParams {
    pub query: Option<String>,
}

/// `?from=&to=` for the route catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// `?code=` for the airline catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirlineParams {
    pub code: Option<String>,
}

// ---------------------------------------------------------------------------
// Validated queries
// ---------------------------------------------------------------------------

/// Origin/destination pair plus optional `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveFlightsQuery {
    pub from: String,
    pub to: String,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightStatusQuery {
    pub flight_number: String,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    pub from: String,
    pub to: String,
}

impl LiveFlightsParams {
    pub fn validate(&self) -> Result<LiveFlightsQuery, CoreError> {
        match (present(&self.from), present(&self.to)) {
            (Some(from), Some(to)) => Ok(LiveFlightsQuery {
                from: from.to_string(),
                to: to.to_string(),
                date: present(&self.date).map(str::to_string),
            }),
            _ => Err(CoreError::MissingParameter {
                message: "Missing required parameters: from, to",
                example: "/api/flights/live?from=MAA&to=DEL&date=2025-10-14",
            }),
        }
    }
}

impl FlightStatusParams {
    pub fn validate(&self) -> Result<FlightStatusQuery, CoreError> {
        let flight_number = present(&self.flight_number).ok_or(CoreError::MissingParameter {
            message: "Missing required parameter: flight_number",
            example: "/api/flights/status?flight_number=AI101&date=2025-10-14",
        })?;
        Ok(FlightStatusQuery {
            flight_number: flight_number.to_string(),
            date: present(&self.date).map(str::to_string),
        })
    }
}

impl AirportSearchParams {
    pub fn validate(&self) -> Result<String, CoreError> {
        present(&self.query)
            .map(str::to_string)
            .ok_or(CoreError::MissingParameter {
                message: "Missing required parameter: query",
                example: "/api/airports?query=Mumbai",
            })
    }
}

impl RouteParams {
    pub fn validate(&self) -> Result<RouteQuery, CoreError> {
        match (present(&self.from), present(&self.to)) {
            (Some(from), Some(to)) => Ok(RouteQuery {
                from: from.to_string(),
                to: to.to_string(),
            }),
            _ => Err(CoreError::MissingParameter {
                message: "Missing required parameters: from, to",
                example: "/api/routes?from=MAA&to=DEL",
            }),
        }
    }
}

impl AirlineParams {
    /// The airline code filter, if one was given. Never fails.
    pub fn code(&self) -> Option<String> {
        present(&self.code).map(str::to_string)
    }
}
