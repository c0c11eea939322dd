use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schedule::{ClockTime, FlightDuration};

/// A single flight offer shown in the results list.
///
/// Flights are never modified after generation; ranking produces new
/// sequences of clones instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: Uuid,
    pub airline: String,
    pub airline_code: String,
    pub logo: String,
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub departure_time: ClockTime,
    pub arrival_date: NaiveDate,
    pub arrival_time: ClockTime,
    pub duration: FlightDuration,
    pub price: u32,
    pub currency: String,
    pub stops: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_locations: Option<Vec<String>>,
}

impl Flight {
    pub fn is_direct(&self) -> bool {
        self.stops == 0
    }

    /// Intermediate airports in travel order, empty for direct flights.
    pub fn stop_codes(&self) -> &[String] {
        self.stop_locations.as_deref().unwrap_or(&[])
    }

    pub fn arrives_next_day(&self) -> bool {
        self.arrival_date > self.departure_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Flight {
        Flight {
            id: Uuid::new_v4(),
            airline: "IndiGo".to_string(),
            airline_code: "6E".to_string(),
            logo: "https://example.com/6e.png".to_string(),
            origin: "DEL".to_string(),
            destination: "BOM".to_string(),
            departure_date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            departure_time: "23:15".parse().unwrap(),
            arrival_date: NaiveDate::from_ymd_opt(2024, 12, 2).unwrap(),
            arrival_time: "01:30".parse().unwrap(),
            duration: "2h 15m".parse().unwrap(),
            price: 5200,
            currency: "INR".to_string(),
            stops: 0,
            stop_locations: None,
        }
    }

    #[test]
    fn test_flight_wire_format() {
        let flight = sample();
        let value = serde_json::to_value(&flight).unwrap();
        assert_eq!(value["airlineCode"], "6E");
        assert_eq!(value["departureDate"], "2024-12-01");
        assert_eq!(value["arrivalTime"], "01:30");
        assert_eq!(value["duration"], "2h 15m");
        assert!(value.get("stopLocations").is_none());

        let back: Flight = serde_json::from_value(value).unwrap();
        assert_eq!(back, flight);
    }

    #[test]
    fn test_stop_helpers() {
        let mut flight = sample();
        assert!(flight.is_direct());
        assert!(flight.stop_codes().is_empty());
        assert!(flight.arrives_next_day());

        flight.stops = 1;
        flight.stop_locations = Some(vec!["HYD".to_string()]);
        assert!(!flight.is_direct());
        assert_eq!(flight.stop_codes(), ["HYD".to_string()]);
    }
}
