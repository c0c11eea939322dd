use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::airlines::{Airline, AIRLINES};
use crate::airports::is_domestic_airport;

const DOMESTIC_STOPS: &[&str] = &["DEL", "BOM", "BLR", "HYD", "MAA", "CCU"];
const INTERNATIONAL_STOPS: &[&str] = &["DXB", "DOH", "SIN", "BKK", "AUH", "MCT"];

/// Domestic/international classification of an origin-destination pair.
///
/// Gates which airlines, durations, prices and layover airports are eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteClass {
    Domestic,
    International,
}

impl RouteClass {
    pub fn classify(origin: &str, destination: &str) -> Self {
        if is_domestic_airport(origin) && is_domestic_airport(destination) {
            RouteClass::Domestic
        } else {
            RouteClass::International
        }
    }

    pub fn airlines(&self) -> Vec<&'static Airline> {
        match self {
            RouteClass::Domestic => AIRLINES.iter().filter(|a| a.is_domestic()).collect(),
            RouteClass::International => AIRLINES.iter().collect(),
        }
    }

    /// Candidate layover airports, before excluding the route's own endpoints.
    pub fn stop_pool(&self) -> &'static [&'static str] {
        match self {
            RouteClass::Domestic => DOMESTIC_STOPS,
            RouteClass::International => INTERNATIONAL_STOPS,
        }
    }

    pub fn max_stops(&self) -> u32 {
        match self {
            RouteClass::Domestic => 1,
            RouteClass::International => 2,
        }
    }

    pub fn duration_hours(&self) -> RangeInclusive<u32> {
        match self {
            RouteClass::Domestic => 1..=4,
            RouteClass::International => 4..=15,
        }
    }
}
