use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CoreError, CoreResult};

pub const MIN_PASSENGERS: u32 = 1;
pub const MAX_PASSENGERS: u32 = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TripType {
    OneWay,
    #[default]
    RoundTrip,
}

/// A validated search, as consumed by the flight generator and stored in history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<NaiveDate>,
    pub passengers: u32,
    pub trip_type: TripType,
}

impl SearchParams {
    /// Same search moved to another departure day.
    pub fn with_departure_date(&self, departure_date: NaiveDate) -> Self {
        Self {
            departure_date,
            ..self.clone()
        }
    }
}

/// Raw search form input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub departure_date: Option<NaiveDate>,
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    #[serde(default = "default_passengers")]
    pub passengers: u32,
    #[serde(default)]
    pub trip_type: TripType,
}

fn default_passengers() -> u32 {
    MIN_PASSENGERS
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            departure_date: None,
            return_date: None,
            passengers: default_passengers(),
            trip_type: TripType::default(),
        }
    }
}

impl SearchRequest {
    /// Checks the form and turns it into search parameters.
    ///
    /// Airport fields may carry the display form `"DEL - Indira Gandhi ..."`;
    /// only the code before `" - "` is kept.
    pub fn validate(&self) -> CoreResult<SearchParams> {
        let origin = airport_code(&self.origin);
        let destination = airport_code(&self.destination);

        if origin.is_empty() || destination.is_empty() {
            return Err(CoreError::ValidationError(
                "Please specify both origin and destination airports".to_string(),
            ));
        }
        if origin == destination {
            return Err(CoreError::ValidationError(
                "Origin and destination cannot be the same".to_string(),
            ));
        }
        let departure_date = self.departure_date.ok_or_else(|| {
            CoreError::ValidationError("Please select a departure date".to_string())
        })?;
        check_departure_date(departure_date)?;
        let return_date = match self.trip_type {
            TripType::RoundTrip => Some(self.return_date.ok_or_else(|| {
                CoreError::ValidationError("Please select a return date".to_string())
            })?),
            TripType::OneWay => None,
        };
        if !(MIN_PASSENGERS..=MAX_PASSENGERS).contains(&self.passengers) {
            return Err(CoreError::ValidationError(format!(
                "Passenger count must be between {} and {}",
                MIN_PASSENGERS, MAX_PASSENGERS
            )));
        }

        Ok(SearchParams {
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_date,
            return_date,
            passengers: self.passengers,
            trip_type: self.trip_type,
        })
    }
}

/// Rejects departure days with no following calendar day, since an overnight
/// flight could not be given an arrival date.
pub fn check_departure_date(date: NaiveDate) -> CoreResult<()> {
    match date.succ_opt() {
        Some(_) => Ok(()),
        None => Err(CoreError::ValidationError(format!(
            "Departure date {} is out of range",
            date
        ))),
    }
}

fn airport_code(input: &str) -> &str {
    let input = input.trim();
    input.split(" - ").next().unwrap_or(input).trim()
}

/// A past search kept so the user can repeat it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryEntry {
    pub id: Uuid,
    pub search_params: SearchParams,
    /// Creation time, milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl SearchHistoryEntry {
    pub fn new(search_params: SearchParams) -> Self {
        Self {
            id: Uuid::new_v4(),
            search_params,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SearchRequest {
        SearchRequest {
            origin: "DEL - Indira Gandhi International Airport".to_string(),
            destination: "BOM".to_string(),
            departure_date: NaiveDate::from_ymd_opt(2024, 12, 1),
            return_date: NaiveDate::from_ymd_opt(2024, 12, 8),
            passengers: 2,
            trip_type: TripType::RoundTrip,
        }
    }

    fn message(err: CoreError) -> String {
        let CoreError::ValidationError(msg) = err;
        msg
    }

    #[test]
    fn test_valid_round_trip() {
        let params = form().validate().unwrap();
        assert_eq!(params.origin, "DEL");
        assert_eq!(params.destination, "BOM");
        assert_eq!(params.return_date, NaiveDate::from_ymd_opt(2024, 12, 8));
        assert_eq!(params.passengers, 2);
    }

    #[test]
    fn test_one_way_drops_return_date() {
        let mut req = form();
        req.trip_type = TripType::OneWay;
        let params = req.validate().unwrap();
        assert_eq!(params.return_date, None);

        req.return_date = None;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_validation_failures() {
        let mut req = form();
        req.destination = String::new();
        assert!(message(req.validate().unwrap_err()).contains("both origin and destination"));

        let mut req = form();
        req.destination = "DEL - Delhi".to_string();
        assert!(message(req.validate().unwrap_err()).contains("cannot be the same"));

        let mut req = form();
        req.departure_date = None;
        assert!(message(req.validate().unwrap_err()).contains("departure date"));

        let mut req = form();
        req.return_date = None;
        assert!(message(req.validate().unwrap_err()).contains("return date"));

        let mut req = form();
        req.departure_date = Some(NaiveDate::MAX);
        assert!(message(req.validate().unwrap_err()).contains("out of range"));

        for passengers in [0, 7] {
            let mut req = form();
            req.passengers = passengers;
            assert!(message(req.validate().unwrap_err()).contains("Passenger count"));
        }
    }

    #[test]
    fn test_departure_date_upper_bound() {
        let last_usable = NaiveDate::MAX.pred_opt().unwrap();
        assert!(check_departure_date(last_usable).is_ok());
        assert!(check_departure_date(NaiveDate::MAX).is_err());
    }

    #[test]
    fn test_history_entry_round_trip() {
        let entry = SearchHistoryEntry::new(form().validate().unwrap());
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"searchParams\""));
        assert!(json.contains("\"tripType\":\"roundTrip\""));

        let back: SearchHistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_request_defaults() {
        let req: SearchRequest = serde_json::from_str(r#"{"origin":"DEL"}"#).unwrap();
        assert_eq!(req.passengers, 1);
        assert_eq!(req.trip_type, TripType::RoundTrip);
        assert!(req.departure_date.is_none());
    }
}
