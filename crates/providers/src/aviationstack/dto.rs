//! AviationStack response payloads and their mapping to canonical shapes.
//!
//! Every field is optional; a record missing everything still maps to a
//! canonical record full of `None`s.

use flightmcp_core::model::{
    Airline, Airport, Coordinates, FlightEndpoint, FlightRecord, Route, RouteEndpoint,
};
use serde::Deserialize;

use crate::lenient;

/// `{"data": [...]}` on success, `{"error": {...}}` on failure.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub data: Option<Vec<T>>,
    #[serde(default)]
    pub error: Option<ApiErrorDto>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDto {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorDto {
    pub fn describe(&self) -> String {
        match (&self.code, &self.message) {
            (Some(code), Some(message)) => format!("{code}: {message}"),
            (None, Some(message)) => message.clone(),
            (Some(code), None) => code.clone(),
            (None, None) => "unspecified provider error".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Flights
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct FlightDto {
    #[serde(default)]
    pub flight: Option<FlightIdDto>,
    #[serde(default)]
    pub airline: Option<NamedDto>,
    #[serde(default)]
    pub departure: Option<EndpointDto>,
    #[serde(default)]
    pub arrival: Option<EndpointDto>,
    #[serde(default)]
    pub flight_status: Option<String>,
    #[serde(default)]
    pub aircraft: Option<AircraftDto>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FlightIdDto {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub iata: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub number: Option<String>,
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

#[derive(Debug, Default, Deserialize)]
pub struct EndpointDto {
    #[serde(default)]
    pub airport: Option<String>,
    #[serde(default)]
    pub iata: Option<String>,
    #[serde(default)]
    pub scheduled: Option<String>,
    #[serde(default)]
    pub estimated: Option<String>,
    #[serde(default)]
    pub actual: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub terminal: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub gate: Option<String>,
}

impl From<EndpointDto> for FlightEndpoint {
    fn from(dto: EndpointDto) -> Self {
        Self {
            airport: dto.airport,
            iata: dto.iata,
            scheduled: dto.scheduled,
            estimated: dto.estimated,
            actual: dto.actual,
            terminal: dto.terminal,
            gate: dto.gate,
            delay: None,
        }
    }
}

impl From<FlightDto> for FlightRecord {
    fn from(dto: FlightDto) -> Self {
        let (iata, number) = dto
            .flight
            .map(|f| (f.iata, f.number))
            .unwrap_or_default();
        Self {
            flight_number: iata.or(number),
            airline: dto.airline.and_then(|a| a.name),
            departure: dto.departure.map(Into::into).unwrap_or_default(),
            arrival: dto.arrival.map(Into::into).unwrap_or_default(),
            status: dto.flight_status,
            aircraft: dto.aircraft.and_then(|a| a.model),
        }
    }
}

// ---------------------------------------------------------------------------
// Airports, routes, airlines
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct AirportDto {
    #[serde(default)]
    pub airport_name: Option<String>,
    #[serde(default)]
    pub iata_code: Option<String>,
    #[serde(default)]
    pub icao_code: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub longitude: Option<f64>,
}

impl From<AirportDto> for Airport {
    fn from(dto: AirportDto) -> Self {
        Self {
            name: dto.airport_name,
            iata: dto.iata_code,
            icao: dto.icao_code,
            city: dto.city,
            country: dto.country_name,
            timezone: dto.timezone,
            coordinates: Some(Coordinates {
                latitude: dto.latitude,
                longitude: dto.longitude,
            }),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RouteDto {
    #[serde(default)]
    pub airline_name: Option<String>,
    #[serde(default)]
    pub airline_iata: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub flight_number: Option<String>,
    #[serde(default)]
    pub departure_airport: Option<String>,
    #[serde(default)]
    pub departure_iata: Option<String>,
    #[serde(default)]
    pub arrival_airport: Option<String>,
    #[serde(default)]
    pub arrival_iata: Option<String>,
}

impl From<RouteDto> for Route {
    fn from(dto: RouteDto) -> Self {
        Self {
            airline: dto.airline_name,
            airline_iata: dto.airline_iata,
            flight_number: dto.flight_number,
            departure: RouteEndpoint {
                airport: dto.departure_airport,
                iata: dto.departure_iata,
            },
            arrival: RouteEndpoint {
                airport: dto.arrival_airport,
                iata: dto.arrival_iata,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AirlineDto {
    #[serde(default)]
    pub airline_name: Option<String>,
    #[serde(default)]
    pub iata_code: Option<String>,
    #[serde(default)]
    pub icao_code: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub fleet_size: Option<u32>,
    #[serde(default)]
    pub callsign: Option<String>,
}

impl From<AirlineDto> for Airline {
    fn from(dto: AirlineDto) -> Self {
        Self {
            name: dto.airline_name,
            iata: dto.iata_code,
            icao: dto.icao_code,
            country: dto.country_name,
            fleet_size: dto.fleet_size,
            callsign: dto.callsign,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_with_every_field_absent_normalizes_to_nulls() {
        let dto: FlightDto = serde_json::from_str("{}").unwrap();
        let record = FlightRecord::from(dto);

        assert_eq!(record, FlightRecord::default());
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["flight_number"].is_null());
        assert!(json["departure"]["scheduled"].is_null());
        assert!(json["aircraft"].is_null());
    }

    #[test]
    fn flight_with_null_objects_normalizes_to_nulls() {
        let dto: FlightDto = serde_json::from_str(
            r#"{"flight": null, "airline": null, "departure": null, "arrival": {"gate": null}}"#,
        )
        .unwrap();
        assert_eq!(FlightRecord::from(dto), FlightRecord::default());
    }

    #[test]
    fn flight_number_prefers_iata_code() {
        let dto: FlightDto = serde_json::from_str(
            r#"{
                "flight": {"number": "101", "iata": "AI101"},
                "airline": {"name": "Air India", "iata": "AI"},
                "departure": {"airport": "Chennai", "iata": "MAA", "terminal": "4", "gate": 7,
                              "scheduled": "2025-10-14T06:00:00+00:00"},
                "arrival": {"airport": "Delhi", "iata": "DEL"},
                "flight_status": "scheduled",
                "aircraft": {"registration": "VT-ANA"},
                "live": null
            }"#,
        )
        .unwrap();
        let record = FlightRecord::from(dto);

        assert_eq!(record.flight_number.as_deref(), Some("AI101"));
        assert_eq!(record.airline.as_deref(), Some("Air India"));
        assert_eq!(record.departure.gate.as_deref(), Some("7"));
        assert_eq!(record.departure.terminal.as_deref(), Some("4"));
        assert_eq!(record.arrival.iata.as_deref(), Some("DEL"));
        assert_eq!(record.status.as_deref(), Some("scheduled"));
        assert!(record.aircraft.is_none());
    }

    #[test]
    fn flight_number_falls_back_to_numeric_code() {
        let dto: FlightDto =
            serde_json::from_str(r#"{"flight": {"number": 2345, "iata": ""}}"#).unwrap();
        assert_eq!(FlightRecord::from(dto).flight_number.as_deref(), Some("2345"));
    }

    #[test]
    fn airport_coordinates_parse_from_strings() {
        let dto: AirportDto = serde_json::from_str(
            r#"{"airport_name": "Chhatrapati Shivaji", "iata_code": "BOM", "icao_code": "VABB",
                "country_name": "India", "timezone": "Asia/Kolkata",
                "latitude": "19.088686", "longitude": "72.867919"}"#,
        )
        .unwrap();
        let airport = Airport::from(dto);

        assert_eq!(airport.iata.as_deref(), Some("BOM"));
        assert_eq!(airport.country.as_deref(), Some("India"));
        let coords = airport.coordinates.unwrap();
        assert_eq!(coords.latitude, Some(19.088686));
        assert_eq!(coords.longitude, Some(72.867919));
    }

    #[test]
    fn airline_fleet_size_parses_from_string() {
        let dto: AirlineDto = serde_json::from_str(
            r#"{"airline_name": "Air India", "iata_code": "AI", "fleet_size": "127",
                "callsign": "AIRINDIA"}"#,
        )
        .unwrap();
        let airline = Airline::from(dto);
        assert_eq!(airline.fleet_size, Some(127));
        assert_eq!(airline.callsign.as_deref(), Some("AIRINDIA"));
        assert!(airline.icao.is_none());
    }

    #[test]
    fn route_is_flattened_into_endpoints() {
        let dto: RouteDto = serde_json::from_str(
            r#"{"airline_name": "IndiGo", "airline_iata": "6E", "flight_number": 2345,
                "departure_iata": "MAA", "arrival_iata": "DEL"}"#,
        )
        .unwrap();
        let route = Route::from(dto);
        assert_eq!(route.flight_number.as_deref(), Some("2345"));
        assert_eq!(route.departure.iata.as_deref(), Some("MAA"));
        assert!(route.arrival.airport.is_none());
    }

    /// A record type with no `Default`, like any decoded payload may be.
    #[derive(Debug, Deserialize)]
    struct Bare {
        id: u32,
    }

    fn decode_envelope<D: serde::de::DeserializeOwned>(json: &str) -> Envelope<D> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn envelope_decodes_records_without_default() {
        let envelope: Envelope<Bare> = decode_envelope(r#"{"data": [{"id": 7}, {"id": 9}]}"#);
        let ids: Vec<u32> = envelope.data.unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![7, 9]);

        let envelope: Envelope<Bare> = decode_envelope("{}");
        assert!(envelope.data.is_none());
    }

    #[test]
    fn envelope_tolerates_missing_data() {
        let envelope: Envelope<FlightDto> = serde_json::from_str("{}").unwrap();
        assert!(envelope.data.is_none());
        assert!(envelope.error.is_none());

        let envelope: Envelope<FlightDto> = serde_json::from_str(
            r#"{"error": {"code": "invalid_access_key", "message": "You have not supplied a valid API Access Key."}}"#,
        )
        .unwrap();
        assert_eq!(
            envelope.error.unwrap().describe(),
            "invalid_access_key: You have not supplied a valid API Access Key."
        );
    }
}
