use serde::{Deserialize, Serialize};
use skycompare_core::Flight;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Stop counts offered by the stop filter ("Direct", "1 Stop", "2+ Stops").
pub const STOP_OPTIONS: [u32; 3] = [0, 1, 2];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Price,
    Duration,
    DepartureTime,
    ArrivalTime,
}

impl SortKey {
    /// Numeric value compared for this key: price units or minutes.
    fn value(&self, flight: &Flight) -> u32 {
        match self {
            SortKey::Price => flight.price,
            SortKey::Duration => flight.duration.total_minutes(),
            SortKey::DepartureTime => flight.departure_time.minutes_since_midnight(),
            SortKey::ArrivalTime => flight.arrival_time.minutes_since_midnight(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Selecting the active key flips direction; a new key starts ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Asc;
        }
    }

    fn compare(&self, a: &Flight, b: &Flight) -> Ordering {
        let ordering = self.key.value(a).cmp(&self.key.value(b));
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Allowed stop counts
    pub stops: BTreeSet<u32>,
    /// Allowed airline names; empty allows every airline
    pub airlines: BTreeSet<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            stops: STOP_OPTIONS.into_iter().collect(),
            airlines: BTreeSet::new(),
        }
    }
}

impl FilterState {
    pub fn matches(&self, flight: &Flight) -> bool {
        self.stops.contains(&flight.stops)
            && (self.airlines.is_empty() || self.airlines.contains(&flight.airline))
    }

    pub fn toggle_stop(&mut self, stops: u32) {
        if !self.stops.remove(&stops) {
            self.stops.insert(stops);
        }
    }

    pub fn toggle_airline(&mut self, airline: &str) {
        if !self.airlines.remove(airline) {
            self.airlines.insert(airline.to_string());
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of filter groups narrowing the results (0 to 2).
    pub fn active_count(&self) -> usize {
        let stops_narrowed = STOP_OPTIONS.iter().any(|s| !self.stops.contains(s));
        usize::from(stops_narrowed) + usize::from(!self.airlines.is_empty())
    }
}

/// Sorting and filtering applied to a result list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRanker {
    pub sort: SortState,
    pub filters: FilterState,
}

impl ResultRanker {
    pub fn new(sort: SortState, filters: FilterState) -> Self {
        Self { sort, filters }
    }

    /// Returns the filtered flights in display order. The input is left untouched.
    pub fn rank(&self, flights: &[Flight]) -> Vec<Flight> {
        let mut ranked: Vec<Flight> = flights
            .iter()
            .filter(|f| self.filters.matches(f))
            .cloned()
            .collect();
        ranked.sort_by(|a, b| self.sort.compare(a, b));
        ranked
    }
}

/// Distinct airline names in first-seen order, for the airline filter.
pub fn airlines_in(flights: &[Flight]) -> Vec<String> {
    let mut seen = Vec::new();
    for flight in flights {
        if !seen.contains(&flight.airline) {
            seen.push(flight.airline.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn flight(airline: &str, price: u32, stops: u32, dep: &str, arr: &str, dur: &str) -> Flight {
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        Flight {
            id: Uuid::new_v4(),
            airline: airline.to_string(),
            airline_code: "XX".to_string(),
            logo: String::new(),
            origin: "DEL".to_string(),
            destination: "DXB".to_string(),
            departure_date: date,
            departure_time: dep.parse().unwrap(),
            arrival_date: date,
            arrival_time: arr.parse().unwrap(),
            duration: dur.parse().unwrap(),
            price,
            currency: "INR".to_string(),
            stops,
            stop_locations: (stops > 0)
                .then(|| ["MCT", "AUH"][..stops as usize].iter().map(|s| s.to_string()).collect()),
        }
    }

    fn sample() -> Vec<Flight> {
        vec![
            flight("IndiGo", 300, 0, "09:00", "13:15", "4h 15m"),
            flight("Emirates", 100, 1, "06:30", "16:00", "9h 30m"),
            flight("IndiGo", 500, 2, "22:45", "10:45", "12h 0m"),
        ]
    }

    fn prices(flights: &[Flight]) -> Vec<u32> {
        flights.iter().map(|f| f.price).collect()
    }

    #[test]
    fn test_price_sort_and_toggle() {
        let flights = sample();
        let mut ranker = ResultRanker::default();
        assert_eq!(prices(&ranker.rank(&flights)), vec![100, 300, 500]);

        ranker.sort.toggle(SortKey::Price);
        assert_eq!(ranker.sort.direction, SortDirection::Desc);
        assert_eq!(prices(&ranker.rank(&flights)), vec![500, 300, 100]);

        // Input order is preserved
        assert_eq!(prices(&flights), vec![300, 100, 500]);
    }

    #[test]
    fn test_new_key_resets_direction() {
        let mut sort = SortState::new(SortKey::Price, SortDirection::Desc);
        sort.toggle(SortKey::Duration);
        assert_eq!(sort, SortState::new(SortKey::Duration, SortDirection::Asc));
        sort.toggle(SortKey::Duration);
        sort.toggle(SortKey::Duration);
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_time_and_duration_keys() {
        let flights = sample();
        let rank = |key| {
            let ranker = ResultRanker::new(SortState::new(key, SortDirection::Asc), FilterState::default());
            prices(&ranker.rank(&flights))
        };

        assert_eq!(rank(SortKey::Duration), vec![300, 100, 500]);
        assert_eq!(rank(SortKey::DepartureTime), vec![100, 300, 500]);
        assert_eq!(rank(SortKey::ArrivalTime), vec![500, 300, 100]);
    }

    #[test]
    fn test_filters() {
        let flights = sample();
        let mut ranker = ResultRanker::default();

        ranker.filters.stops = BTreeSet::from([0]);
        let direct = ranker.rank(&flights);
        assert_eq!(direct.len(), 1);
        assert!(direct.iter().all(|f| f.stops == 0));

        ranker.filters.clear();
        ranker.filters.toggle_airline("IndiGo");
        let indigo = ranker.rank(&flights);
        assert_eq!(prices(&indigo), vec![300, 500]);
        assert!(indigo.iter().all(|f| f.airline == "IndiGo"));

        ranker.filters.toggle_stop(2);
        assert_eq!(prices(&ranker.rank(&flights)), vec![300]);
    }

    #[test]
    fn test_empty_stop_filter_hides_everything() {
        let mut filters = FilterState::default();
        for s in STOP_OPTIONS {
            filters.toggle_stop(s);
        }
        let ranker = ResultRanker::new(SortState::default(), filters);
        assert!(ranker.rank(&sample()).is_empty());
    }

    #[test]
    fn test_active_filter_count() {
        let mut filters = FilterState::default();
        assert_eq!(filters.active_count(), 0);

        filters.toggle_stop(1);
        assert_eq!(filters.active_count(), 1);

        filters.toggle_airline("Emirates");
        assert_eq!(filters.active_count(), 2);

        filters.toggle_airline("Emirates");
        filters.toggle_stop(1);
        assert_eq!(filters, FilterState::default());
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let mut flights = sample();
        flights.push(flight("Vistara", 300, 1, "11:00", "15:00", "4h 0m"));

        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let ranker = ResultRanker::new(SortState::new(SortKey::Price, direction), FilterState::default());
            let once = ranker.rank(&flights);
            let twice = ranker.rank(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_airlines_in_first_seen_order() {
        assert_eq!(airlines_in(&sample()), vec!["IndiGo".to_string(), "Emirates".to_string()]);
        assert!(airlines_in(&[]).is_empty());
    }

    #[test]
    fn test_sort_key_wire_names() {
        let key: SortKey = serde_json::from_str("\"departureTime\"").unwrap();
        assert_eq!(key, SortKey::DepartureTime);
        let dir: SortDirection = serde_json::from_str("\"desc\"").unwrap();
        assert_eq!(dir, SortDirection::Desc);
    }
}
