//! The six flight operations.
//!
//! Live flights, routes and airlines have a single authoritative source and
//! fail fast. Flight status and airport search chain providers and finally
//! degrade to static data, so they always answer once their required
//! parameter is present.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::fallback::FallbackChain;
use crate::gazetteer::Gazetteer;
use crate::model::{FlightStatus, FlightStatusReport, UnavailableStatus};
use crate::params::{
    AirlineParams, AirportSearchParams, FlightStatusParams, LiveFlightsParams, RouteParams,
};
use crate::provider::{FlightCatalog, FlightSchedule, AVIATIONSTACK, FLIGHTAPI};
use crate::response::{
    AirlinesResponse, AirportSearchResponse, FlightStatusResponse, LiveFlightsResponse,
    RoutesResponse, ToolResult,
};
use crate::tools::{Tool, ToolManifest, ToolRegistry};

/// Maximum flights included in a live listing.
pub const LIVE_FLIGHTS_LIMIT: usize = 10;

pub const SOURCE_AVIATIONSTACK_FALLBACK: &str = "AviationStack (fallback)";
pub const SOURCE_STATUS_FALLBACK: &str = "Fallback response";
pub const SOURCE_AIRPORT_FALLBACK: &str = "Fallback airport data";

pub const NOTE_STATUS_FALLBACK: &str = "Real-time APIs temporarily unavailable";
pub const NOTE_AIRPORT_FALLBACK: &str = "Real-time airport API temporarily unavailable";

const DATE_TODAY: &str = "Today";
const ALL_AIRLINES: &str = "All airlines";

/// Entry point for every flight operation, shared across requests.
pub struct FlightService {
    catalog: Arc<dyn FlightCatalog>,
    schedule: Arc<dyn FlightSchedule>,
    gazetteer: Gazetteer,
    tools: ToolRegistry,
    manifest: ToolManifest,
}

impl FlightService {
    pub fn new(catalog: Arc<dyn FlightCatalog>, schedule: Arc<dyn FlightSchedule>) -> Self {
        Self {
            catalog,
            schedule,
            gazetteer: Gazetteer::default(),
            tools: ToolRegistry::default(),
            manifest: ToolManifest::default(),
        }
    }

    pub fn manifest(&self) -> &ToolManifest {
        &self.manifest
    }

    /// Flights between two airports from the catalog provider.
    pub async fn live_flights(
        &self,
        params: &LiveFlightsParams,
    ) -> Result<LiveFlightsResponse, CoreError> {
        let query = params.validate()?;
        tracing::info!(from = %query.from, to = %query.to, date = ?query.date, "Fetching live flights");

        let flights = self.catalog.live_flights(&query).await.map_err(|e| {
            tracing::error!(error = %e, "Live flights lookup failed");
            CoreError::Upstream {
                context: "Failed to fetch live flights",
                details: e.to_string(),
                fallback: Some("Try using FlightAPI.io endpoint"),
            }
        })?;

        let total_flights = flights.len();
        Ok(LiveFlightsResponse {
            success: true,
            route: format!("{} → {}", query.from, query.to),
            date: query.date.unwrap_or_else(|| DATE_TODAY.to_string()),
            total_flights,
            flights: flights.into_iter().take(LIVE_FLIGHTS_LIMIT).collect(),
            source: AVIATIONSTACK,
        })
    }

    /// Status of one flight: schedule provider, then catalog, then a static
    /// "unavailable" answer. Fails only on a missing flight number.
    pub async fn flight_status(
        &self,
        params: &FlightStatusParams,
    ) -> Result<FlightStatusResponse, CoreError> {
        let query = params.validate()?;
        tracing::info!(flight_number = %query.flight_number, date = ?query.date, "Checking flight status");

        let schedule = &self.schedule;
        let catalog = &self.catalog;
        let q = &query;

        let resolved = FallbackChain::new()
            .tier(FLIGHTAPI, move || async move {
                schedule
                    .flight_status(q)
                    .await
                    .map(FlightStatusReport::Live)
            })
            .tier(SOURCE_AVIATIONSTACK_FALLBACK, move || async move {
                catalog
                    .flight_by_number(&q.flight_number)
                    .await
                    .map(|record| {
                        FlightStatusReport::Live(FlightStatus::from_record(&q.flight_number, record))
                    })
            })
            .run_or_else(SOURCE_STATUS_FALLBACK, |_| {
                FlightStatusReport::Unavailable(UnavailableStatus::new(&query.flight_number))
            })
            .await;

        Ok(FlightStatusResponse {
            success: true,
            flight: resolved.value,
            source: resolved.source,
            note: resolved.degraded.then_some(NOTE_STATUS_FALLBACK),
        })
    }

    /// Airports matching free text: catalog provider, then the gazetteer.
    pub async fn search_airports(
        &self,
        params: &AirportSearchParams,
    ) -> Result<AirportSearchResponse, CoreError> {
        let query = params.validate()?;
        tracing::info!(query = %query, "Searching airports");

        let catalog = &self.catalog;
        let q = query.as_str();

        let resolved = FallbackChain::new()
            .tier(AVIATIONSTACK, move || async move {
                catalog.search_airports(q).await
            })
            .run_or_else(SOURCE_AIRPORT_FALLBACK, |_| self.gazetteer.search(q))
            .await;

        Ok(AirportSearchResponse {
            success: true,
            total_results: resolved.value.len(),
            airports: resolved.value,
            query,
            source: resolved.source,
            note: resolved.degraded.then_some(NOTE_AIRPORT_FALLBACK),
        })
    }

    /// Scheduled routes between two airports from the catalog provider.
    pub async fn routes(&self, params: &RouteParams) -> Result<RoutesResponse, CoreError> {
        let query = params.validate()?;
        tracing::info!(from = %query.from, to = %query.to, "Searching routes");

        let routes = self.catalog.routes(&query).await.map_err(|e| {
            tracing::error!(error = %e, "Routes lookup failed");
            CoreError::Upstream {
                context: "Failed to search routes",
                details: e.to_string(),
                fallback: None,
            }
        })?;

        Ok(RoutesResponse {
            success: true,
            route: format!("{} → {}", query.from, query.to),
            total_routes: routes.len(),
            routes,
            source: AVIATIONSTACK,
        })
    }

    /// Airline catalog, optionally narrowed to one IATA code.
    pub async fn airlines(&self, params: &AirlineParams) -> Result<AirlinesResponse, CoreError> {
        let code = params.code();
        tracing::info!(code = ?code, "Fetching airlines");

        let airlines = self
            .catalog
            .airlines(code.as_deref())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Airlines lookup failed");
                CoreError::Upstream {
                    context: "Failed to fetch airlines",
                    details: e.to_string(),
                    fallback: None,
                }
            })?;

        Ok(AirlinesResponse {
            success: true,
            query: code.unwrap_or_else(|| ALL_AIRLINES.to_string()),
            total_airlines: airlines.len(),
            airlines,
            source: AVIATIONSTACK,
        })
    }

    /// Run the operation registered under `tool_id` with `parameters`.
    ///
    /// An unknown id yields [`CoreError::UnknownTool`] without running
    /// anything; otherwise the invoked operation's result is returned as is.
    pub async fn execute_tool(
        &self,
        tool_id: &str,
        parameters: &Value,
    ) -> Result<ToolResult, CoreError> {
        let tool = self
            .tools
            .resolve(tool_id)
            .ok_or_else(|| CoreError::UnknownTool(tool_id.to_string()))?;
        tracing::info!(tool_id, "Executing tool");

        let args = coerce_parameters(parameters);
        match tool {
            Tool::LiveFlights => self
                .live_flights(&parse_args(args))
                .await
                .map(ToolResult::LiveFlights),
            Tool::FlightStatus => self
                .flight_status(&parse_args(args))
                .await
                .map(ToolResult::FlightStatus),
            Tool::SearchAirports => self
                .search_airports(&parse_args(args))
                .await
                .map(ToolResult::Airports),
            Tool::Routes => self.routes(&parse_args(args)).await.map(ToolResult::Routes),
            Tool::Airlines => self
                .airlines(&parse_args(args))
                .await
                .map(ToolResult::Airlines),
        }
    }
}

/// Flatten tool parameters to the string values a query string would carry.
///
/// Numbers and booleans are stringified; nulls, arrays and nested objects are
/// dropped. Anything other than an object yields no parameters.
fn coerce_parameters(parameters: &Value) -> Map<String, Value> {
    let Value::Object(map) = parameters else {
        return Map::new();
    };

    map.iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((key.clone(), Value::String(text)))
        })
        .collect()
}

/// Decode string parameters into an operation's params struct.
///
/// All params fields are optional strings, so this only falls back to the
/// empty default if the struct shape changes; validation then reports the
/// missing parameters.
fn parse_args<P: DeserializeOwned + Default>(args: Map<String, Value>) -> P {
    serde_json::from_value(Value::Object(args)).unwrap_or_default()
}
