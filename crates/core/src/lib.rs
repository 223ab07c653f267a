//! Domain layer of the flight-data proxy.
//!
//! Holds the canonical flight/airport/route/airline shapes, the provider
//! ports implemented by `flightmcp-providers`, the ordered fallback chain,
//! the static gazetteer, the agent tool catalog, and [`service::FlightService`]
//! which ties them together. Nothing in here speaks HTTP.

pub mod error;
pub mod fallback;
pub mod gazetteer;
pub mod model;
pub mod params;
pub mod provider;
pub mod response;
pub mod service;
pub mod tools;
