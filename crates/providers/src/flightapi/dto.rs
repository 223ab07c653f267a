//! FlightAPI.io schedule payload and its mapping to [`FlightStatus`].

use flightmcp_core::model::{FlightEndpoint, FlightStatus, GateInfo};
use serde::Deserialize;

use crate::lenient;

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleDto {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,
    #[serde(default)]
    pub departure: Option<ScheduleEndpointDto>,
    #[serde(default)]
    pub arrival: Option<ScheduleEndpointDto>,
    #[serde(default)]
    pub airline: Option<NamedDto>,
    #[serde(default)]
    pub aircraft: Option<AircraftDto>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleEndpointDto {
    #[serde(default)]
    pub airport_name: Option<String>,
    #[serde(default)]
    pub iata: Option<String>,
    #[serde(default)]
    pub scheduled: Option<String>,
    #[serde(default)]
    pub estimated: Option<String>,
    #[serde(default)]
    pub actual: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub delay: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub gate: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NamedDto {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AircraftDto {
    #[serde(default)]
    pub model: Option<String>,
}

impl ScheduleEndpointDto {
    /// Split into the canonical endpoint and the gate, which this provider
    /// reports separately under `gate_info`.
    fn split(self) -> (FlightEndpoint, Option<String>) {
        let endpoint = FlightEndpoint {
            airport: self.airport_name,
            iata: self.iata,
            scheduled: self.scheduled,
            estimated: self.estimated,
            actual: self.actual,
            terminal: None,
            gate: None,
            delay: self.delay,
        };
        (endpoint, self.gate)
    }
}

impl ScheduleDto {
    /// Map to a status answer for the flight number the caller asked about.
    pub fn into_status(self, flight_number: &str) -> FlightStatus {
        let (departure, departure_gate) = self.departure.map(|d| d.split()).unwrap_or_default();
        let (arrival, arrival_gate) = self.arrival.map(|a| a.split()).unwrap_or_default();

        FlightStatus {
            flight_number: flight_number.to_string(),
            status: self
                .status
                .unwrap_or_else(|| FlightStatus::UNKNOWN.to_string()),
            departure,
            arrival,
            airline: self.airline.and_then(|a| a.name),
            aircraft: self.aircraft.and_then(|a| a.model),
            gate_info: Some(GateInfo {
                departure_gate,
                arrival_gate,
            }),
        }
    }
}
