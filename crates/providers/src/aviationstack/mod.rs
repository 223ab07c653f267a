//! AviationStack adapter.
//!
//! Wraps the AviationStack REST API (`/flights`, `/airports`, `/routes`,
//! `/airlines`). Every request carries the access key as the `access_key`
//! query parameter and answers with a `{"data": [...]}` envelope.

pub mod dto;

use async_trait::async_trait;
use flightmcp_core::error::ProviderError;
use flightmcp_core::model::{Airline, Airport, FlightRecord, Route};
use flightmcp_core::params::{LiveFlightsQuery, RouteQuery};
use flightmcp_core::provider::FlightCatalog;
use reqwest::Url;
use serde::de::DeserializeOwned;

use self::dto::{AirlineDto, AirportDto, Envelope, FlightDto, RouteDto};
use crate::http::{endpoint, fetch_json, parse_base_url};

/// Page size for airport search.
pub const AIRPORT_SEARCH_LIMIT: &str = "20";

/// Page size for the unfiltered airline listing.
pub const AIRLINE_LIST_LIMIT: &str = "50";

/// HTTP client for the AviationStack API.
pub struct AviationStackClient {
    client: reqwest::Client,
    base_url: Url,
    access_key: String,
}

impl AviationStackClient {
    /// Create a client for `base_url`, e.g. `http://api.aviationstack.com/v1`.
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        access_key: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
            access_key: access_key.into(),
        })
    }

    /// `GET {base}/{resource}?access_key=..&{params}`, returning the `data`
    /// array mapped to canonical records.
    async fn list<D, T>(&self, resource: &str, params: &[(&str, &str)]) -> Result<Vec<T>, ProviderError>
    where
        D: DeserializeOwned,
        T: From<D>,
    {
        let url = endpoint(&self.base_url, &[resource])?;
        let request = self
            .client
            .get(url)
            .query(&[("access_key", self.access_key.as_str())])
            .query(params);

        let envelope: Envelope<D> = fetch_json(request).await?;
        if let Some(error) = envelope.error {
            return Err(ProviderError::Api(error.describe()));
        }

        let records = envelope.data.unwrap_or_default();
        tracing::debug!(resource, count = records.len(), "AviationStack response");
        Ok(records.into_iter().map(T::from).collect())
    }
}

#[async_trait]
impl FlightCatalog for AviationStackClient {
    async fn live_flights(
        &self,
        query: &LiveFlightsQuery,
    ) -> Result<Vec<FlightRecord>, ProviderError> {
        let mut params = vec![("dep_iata", query.from.as_str()), ("arr_iata", query.to.as_str())];
        if let Some(date) = &query.date {
            params.push(("flight_date", date.as_str()));
        }
        self.list::<FlightDto, _>("flights", &params).await
    }

    async fn flight_by_number(&self, flight_number: &str) -> Result<FlightRecord, ProviderError> {
        let params = [("flight_iata", flight_number), ("limit", "1")];
        self.list::<FlightDto, FlightRecord>("flights", &params)
            .await?
            .into_iter()
            .next()
            .ok_or(ProviderError::NoData)
    }

    async fn search_airports(&self, query: &str) -> Result<Vec<Airport>, ProviderError> {
        let params = [("search", query), ("limit", AIRPORT_SEARCH_LIMIT)];
        self.list::<AirportDto, _>("airports", &params).await
    }

    async fn routes(&self, query: &RouteQuery) -> Result<Vec<Route>, ProviderError> {
        let params = [("dep_iata", query.from.as_str()), ("arr_iata", query.to.as_str())];
        self.list::<RouteDto, _>("routes", &params).await
    }

    async fn airlines(&self, code: Option<&str>) -> Result<Vec<Airline>, ProviderError> {
        let params = match code {
            Some(code) => [("airline_iata", code)],
            None => [("limit", AIRLINE_LIST_LIMIT)],
        };
        self.list::<AirlineDto, _>("airlines", &params).await
    }
}
