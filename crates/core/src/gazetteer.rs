//! Static city → airport table used when live airport search is down.

use crate::model::Airport;

/// `(city key, name, IATA, ICAO, city, country)`
const ENTRIES: &[(&str, &str, &str, &str, &str, &str)] = &[
    (
        "mumbai",
        "Chhatrapati Shivaji Maharaj International Airport",
        "BOM",
        "VABB",
        "Mumbai",
        "India",
    ),
    (
        "delhi",
        "Indira Gandhi International Airport",
        "DEL",
        "VIDP",
        "New Delhi",
        "India",
    ),
    (
        "bangalore",
        "Kempegowda International Airport",
        "BLR",
        "VOBL",
        "Bangalore",
        "India",
    ),
    (
        "chennai",
        "Chennai International Airport",
        "MAA",
        "VOMM",
        "Chennai",
        "India",
    ),
    (
        "hyderabad",
        "Rajiv Gandhi International Airport",
        "HYD",
        "VOHS",
        "Hyderabad",
        "India",
    ),
    (
        "riyadh",
        "King Khalid International Airport",
        "RUH",
        "OERK",
        "Riyadh",
        "Saudi Arabia",
    ),
    (
        "jeddah",
        "King Abdulaziz International Airport",
        "JED",
        "OEJN",
        "Jeddah",
        "Saudi Arabia",
    ),
    (
        "dammam",
        "King Fahd International Airport",
        "DMM",
        "OEDF",
        "Dammam",
        "Saudi Arabia",
    ),
];

/// Read-only lookup of well-known airports keyed by lowercase city name.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    entries: Vec<(&'static str, Airport)>,
}

impl Default for Gazetteer {
    fn default() -> Self {
        let entries = ENTRIES
            .iter()
            .map(|&(key, name, iata, icao, city, country)| {
                let airport = Airport {
                    name: Some(name.to_string()),
                    iata: Some(iata.to_string()),
                    icao: Some(icao.to_string()),
                    city: Some(city.to_string()),
                    country: Some(country.to_string()),
                    timezone: None,
                    coordinates: None,
                };
                (key, airport)
            })
            .collect();
        Self { entries }
    }
}

impl Gazetteer {
    /// Airports whose city key contains the query or is contained in it,
    /// compared case-insensitively, in table order.
    pub fn search(&self, query: &str) -> Vec<Airport> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(|(key, _)| query.contains(key) || key.contains(query.as_str()))
            .map(|(_, airport)| airport.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
