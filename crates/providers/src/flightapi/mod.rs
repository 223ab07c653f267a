//! FlightAPI.io adapter.
//!
//! Only the schedule-by-flight-number endpoint is used:
//! `GET {base}/compschedule/{flight_number}?key=..&date=..`.

pub mod dto;

use async_trait::async_trait;
use flightmcp_core::error::ProviderError;
use flightmcp_core::model::FlightStatus;
use flightmcp_core::params::FlightStatusQuery;
use flightmcp_core::provider::FlightSchedule;
use reqwest::Url;

use self::dto::ScheduleDto;
use crate::http::{endpoint, fetch_json, parse_base_url};

/// HTTP client for the FlightAPI.io API.
pub struct FlightApiClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl FlightApiClient {
    /// Create a client for `base_url`, e.g. `https://api.flightapi.io`.
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        api_key: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl FlightSchedule for FlightApiClient {
    async fn flight_status(
        &self,
        query: &FlightStatusQuery,
    ) -> Result<FlightStatus, ProviderError> {
        let url = endpoint(&self.base_url, &["compschedule", &query.flight_number])?;
        let mut request = self
            .client
            .get(url)
            .query(&[("key", self.api_key.as_str())]);
        if let Some(date) = &query.date {
            request = request.query(&[("date", date.as_str())]);
        }

        let schedule: ScheduleDto = fetch_json(request).await?;
        tracing::debug!(flight_number = %query.flight_number, "FlightAPI.io response");
        Ok(schedule.into_status(&query.flight_number))
    }
}
