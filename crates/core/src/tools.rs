//! Agent tool catalog.
//!
//! The five flight operations are exposed to AI agents as named tools. The
//! manifest served to agents and the dispatch table used to execute a tool
//! are both derived from [`Tool::ALL`], so every advertised tool can be
//! dispatched and nothing else can.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;

pub const MANIFEST_NAME: &str = "flight-mcp";
pub const MANIFEST_DESCRIPTION: &str = "Real-time flight data connector for AI Voice Travel Agent";
pub const MANIFEST_VERSION: &str = "1.0.0";

/// One of the flight operations reachable through tool dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    LiveFlights,
    FlightStatus,
    SearchAirports,
    Routes,
    Airlines,
}

impl Tool {
    pub const ALL: [Tool; 5] = [
        Tool::LiveFlights,
        Tool::FlightStatus,
        Tool::SearchAirports,
        Tool::Routes,
        Tool::Airlines,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Tool::LiveFlights => "get-live-flights",
            Tool::FlightStatus => "get-flight-status",
            Tool::SearchAirports => "search-airports",
            Tool::Routes => "get-routes",
            Tool::Airlines => "get-airlines",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tool::LiveFlights => "Get real-time flight data between airports",
            Tool::FlightStatus => "Get specific flight status by flight number",
            Tool::SearchAirports => "Search airports by city or country",
            Tool::Routes => "Get available routes between cities/airports",
            Tool::Airlines => "Get airline information",
        }
    }

    /// `(name, description)` of each parameter, in display order.
    pub fn parameters(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Tool::LiveFlights => &[
                ("from", "Departure airport IATA code (e.g., MAA, DEL)"),
                ("to", "Arrival airport IATA code"),
                ("date", "Date in YYYY-MM-DD format (optional)"),
            ],
            Tool::FlightStatus => &[
                ("flight_number", "Flight number (e.g., AI101, 6E2345)"),
                ("date", "Date in YYYY-MM-DD format (optional)"),
            ],
            Tool::SearchAirports => &[("query", "City name, airport name, or country")],
            Tool::Routes => &[
                ("from", "Origin airport/city"),
                ("to", "Destination airport/city"),
            ],
            Tool::Airlines => &[("code", "Airline IATA code (optional)")],
        }
    }

    fn descriptor(self) -> ToolDescriptor {
        ToolDescriptor {
            id: self.id(),
            description: self.description(),
            parameters: self
                .parameters()
                .iter()
                .map(|&(name, description)| {
                    (
                        name,
                        ParameterSpec {
                            kind: "string",
                            description,
                        },
                    )
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Manifest document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ParameterSpec {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub id: &'static str,
    pub description: &'static str,
    pub parameters: IndexMap<&'static str, ParameterSpec>,
}

/// Tool catalog served to agents at `/mcp/manifest`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolManifest {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub tools: Vec<ToolDescriptor>,
}

impl Default for ToolManifest {
    fn default() -> Self {
        Self {
            name: MANIFEST_NAME,
            description: MANIFEST_DESCRIPTION,
            version: MANIFEST_VERSION,
            tools: Tool::ALL.iter().map(|tool| tool.descriptor()).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatch table
// ---------------------------------------------------------------------------

/// Lookup from tool id to [`Tool`], built once at startup.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    by_id: HashMap<&'static str, Tool>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        let by_id = Tool::ALL.iter().map(|&tool| (tool.id(), tool)).collect();
        Self { by_id }
    }
}

impl ToolRegistry {
    pub fn resolve(&self, tool_id: &str) -> Option<Tool> {
        self.by_id.get(tool_id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
