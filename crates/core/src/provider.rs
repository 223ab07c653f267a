//! Ports implemented by the upstream flight-data adapters.
//!
//! Adapters return canonical records; provider-specific response schemas
//! never cross this boundary.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::model::{Airline, Airport, FlightRecord, FlightStatus, Route};
use crate::params::{FlightStatusQuery, LiveFlightsQuery, RouteQuery};

/// Display name of the flight catalog provider.
pub const AVIATIONSTACK: &str = "AviationStack";

/// Display name of the schedule provider.
pub const FLIGHTAPI: &str = "FlightAPI.io";

/// Catalog-style provider: flight listings, airports, routes, airlines.
#[async_trait]
pub trait FlightCatalog: Send + Sync {
    /// All flights between two airports, optionally on one date.
    async fn live_flights(&self, query: &LiveFlightsQuery)
        -> Result<Vec<FlightRecord>, ProviderError>;

    /// The first flight matching an IATA flight code.
    ///
    /// Returns [`ProviderError::NoData`] when nothing matches.
    async fn flight_by_number(&self, flight_number: &str) -> Result<FlightRecord, ProviderError>;

    /// Airports whose name, city or country match free text.
    async fn search_airports(&self, query: &str) -> Result<Vec<Airport>, ProviderError>;

    async fn routes(&self, query: &RouteQuery) -> Result<Vec<Route>, ProviderError>;

    /// Airlines filtered by IATA code, or the provider's default top list.
    async fn airlines(&self, code: Option<&str>) -> Result<Vec<Airline>, ProviderError>;
}

/// Schedule-style provider keyed by flight number.
#[async_trait]
pub trait FlightSchedule: Send + Sync {
    async fn flight_status(&self, query: &FlightStatusQuery)
        -> Result<FlightStatus, ProviderError>;
}
