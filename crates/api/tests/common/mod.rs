#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use flightmcp_core::error::ProviderError;
use flightmcp_core::model::{
    Airline, Airport, FlightEndpoint, FlightRecord, FlightStatus, GateInfo, Route, RouteEndpoint,
};
use flightmcp_core::params::{FlightStatusQuery, LiveFlightsQuery, RouteQuery};
use flightmcp_core::provider::{FlightCatalog, FlightSchedule};
use flightmcp_core::service::FlightService;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use flightmcp_api::config::{ProviderConfig, ServerConfig};
use flightmcp_api::router::build_app_router;
use flightmcp_api::state::AppState;

/// Number of flights the healthy fake catalog returns for any route.
pub const FAKE_FLIGHT_COUNT: usize = 12;

/// Whether a fake provider answers or fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Up,
    Down,
}

/// Shared, ordered record of provider calls.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.0.lock().unwrap().push(call);
    }
}

fn outage() -> ProviderError {
    ProviderError::Status {
        status: 503,
        body: "service unavailable".into(),
    }
}

fn flight(n: usize, from: &str, to: &str) -> FlightRecord {
    FlightRecord {
        flight_number: Some(format!("AI{}", 100 + n)),
        airline: Some("Air India".into()),
        departure: FlightEndpoint {
            iata: Some(from.into()),
            ..Default::default()
        },
        arrival: FlightEndpoint {
            iata: Some(to.into()),
            ..Default::default()
        },
        status: Some("scheduled".into()),
        aircraft: None,
    }
}

// ---------------------------------------------------------------------------
// Fake providers
// ---------------------------------------------------------------------------

pub struct FakeCatalog {
    state: Upstream,
    log: CallLog,
}

#[async_trait]
impl FlightCatalog for FakeCatalog {
    async fn live_flights(
        &self,
        query: &LiveFlightsQuery,
    ) -> Result<Vec<FlightRecord>, ProviderError> {
        self.log.record(format!(
            "catalog.live_flights {} {} {:?}",
            query.from, query.to, query.date
        ));
        match self.state {
            Upstream::Up => Ok((0..FAKE_FLIGHT_COUNT)
                .map(|n| flight(n, &query.from, &query.to))
                .collect()),
            Upstream::Down => Err(outage()),
        }
    }

    async fn flight_by_number(&self, flight_number: &str) -> Result<FlightRecord, ProviderError> {
        self.log
            .record(format!("catalog.flight_by_number {flight_number}"));
        match self.state {
            Upstream::Up => Ok(FlightRecord {
                flight_number: Some(flight_number.to_string()),
                ..flight(1, "MAA", "DEL")
            }),
            Upstream::Down => Err(outage()),
        }
    }

    async fn search_airports(&self, query: &str) -> Result<Vec<Airport>, ProviderError> {
        self.log.record(format!("catalog.search_airports {query}"));
        match self.state {
            Upstream::Up => Ok(vec![Airport {
                name: Some("Chennai International Airport".into()),
                iata: Some("MAA".into()),
                icao: Some("VOMM".into()),
                city: Some("Chennai".into()),
                country: Some("India".into()),
                ..Default::default()
            }]),
            Upstream::Down => Err(outage()),
        }
    }

    async fn routes(&self, query: &RouteQuery) -> Result<Vec<Route>, ProviderError> {
        self.log
            .record(format!("catalog.routes {} {}", query.from, query.to));
        match self.state {
            Upstream::Up => Ok(vec![Route {
                airline: Some("IndiGo".into()),
                airline_iata: Some("6E".into()),
                flight_number: Some("2345".into()),
                departure: RouteEndpoint {
                    airport: None,
                    iata: Some(query.from.clone()),
                },
                arrival: RouteEndpoint {
                    airport: None,
                    iata: Some(query.to.clone()),
                },
            }]),
            Upstream::Down => Err(outage()),
        }
    }

    async fn airlines(&self, code: Option<&str>) -> Result<Vec<Airline>, ProviderError> {
        self.log.record(format!("catalog.airlines {code:?}"));
        match self.state {
            Upstream::Up => Ok(vec![Airline {
                name: Some("Air India".into()),
                iata: Some(code.unwrap_or("AI").to_string()),
                fleet_size: Some(127),
                ..Default::default()
            }]),
            Upstream::Down => Err(outage()),
        }
    }
}

pub struct FakeSchedule {
    state: Upstream,
    log: CallLog,
}

#[async_trait]
impl FlightSchedule for FakeSchedule {
    async fn flight_status(
        &self,
        query: &FlightStatusQuery,
    ) -> Result<FlightStatus, ProviderError> {
        self.log
            .record(format!("schedule.flight_status {}", query.flight_number));
        match self.state {
            Upstream::Up => Ok(FlightStatus {
                flight_number: query.flight_number.clone(),
                status: "On Time".into(),
                departure: FlightEndpoint {
                    iata: Some("MAA".into()),
                    delay: Some(0),
                    ..Default::default()
                },
                arrival: FlightEndpoint::default(),
                airline: Some("Air India".into()),
                aircraft: Some("A320".into()),
                gate_info: Some(GateInfo {
                    departure_gate: Some("B4".into()),
                    arrival_gate: None,
                }),
            }),
            Upstream::Down => Err(outage()),
        }
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
///
/// Provider URLs are never contacted; the fakes stand in for them.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        aviationstack: ProviderConfig {
            base_url: "http://aviationstack.invalid/v1".to_string(),
            api_key: "test-key".to_string(),
        },
        flightapi: ProviderConfig {
            base_url: "http://flightapi.invalid".to_string(),
            api_key: "test-key".to_string(),
        },
    }
}

/// Build the full application router over fake providers.
///
/// Uses [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses. Returns the log of provider calls.
pub fn build_test_app(catalog: Upstream, schedule: Upstream) -> (Router, CallLog) {
    let log = CallLog::default();
    let service = FlightService::new(
        Arc::new(FakeCatalog {
            state: catalog,
            log: log.clone(),
        }),
        Arc::new(FakeSchedule {
            state: schedule,
            log: log.clone(),
        }),
    );
    let state = AppState {
        service: Arc::new(service),
    };
    (build_app_router(state, &test_config()), log)
}

/// Router with both providers healthy.
pub fn healthy_app() -> Router {
    build_test_app(Upstream::Up, Upstream::Up).0
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    post_raw(app, uri, &body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
