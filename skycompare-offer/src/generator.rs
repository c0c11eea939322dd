use chrono::{Days, NaiveDate};
use rand::Rng;
use skycompare_catalog::{Airline, PricingEngine, RouteClass};
use skycompare_core::{ClockTime, Flight, FlightDuration};
use tracing::debug;

pub const DEFAULT_FLIGHT_COUNT: usize = 15;

const QUARTER_HOURS: [u32; 4] = [0, 15, 30, 45];

/// Generates synthetic flight offers for a route and day
pub struct FlightGenerator {
    pricing_engine: PricingEngine,
}

impl FlightGenerator {
    pub fn new(pricing_engine: PricingEngine) -> Self {
        Self { pricing_engine }
    }

    /// Generate `count` flights, cheapest first
    pub fn generate(
        &self,
        origin: &str,
        destination: &str,
        departure_date: NaiveDate,
        count: usize,
    ) -> Vec<Flight> {
        self.generate_with_rng(&mut rand::thread_rng(), origin, destination, departure_date, count)
    }

    /// Same as [`generate`](Self::generate) with a caller supplied random source.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        origin: &str,
        destination: &str,
        departure_date: NaiveDate,
        count: usize,
    ) -> Vec<Flight> {
        let route = RouteClass::classify(origin, destination);
        let airlines = route.airlines();
        debug!(
            "Generating {} {:?} flights {} -> {} on {}",
            count, route, origin, destination, departure_date
        );

        let mut flights: Vec<Flight> = (0..count)
            .map(|_| {
                self.create_flight(rng, route, &airlines, origin, destination, departure_date)
            })
            .collect();

        flights.sort_by_key(|f| f.price);
        flights
    }

    fn create_flight<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        route: RouteClass,
        airlines: &[&'static Airline],
        origin: &str,
        destination: &str,
        departure_date: NaiveDate,
    ) -> Flight {
        let airline = airlines[rng.gen_range(0..airlines.len())];

        let requested_stops = rng.gen_range(0..=route.max_stops());
        let stop_locations = pick_stop_locations(rng, route, origin, destination, requested_stops);
        let stops = stop_locations.len() as u32;

        let duration = FlightDuration::from_minutes(
            rng.gen_range(route.duration_hours()) * 60 + quarter_hour(rng),
        );
        let departure_time =
            ClockTime::from_minutes_since_midnight(rng.gen_range(0..24) * 60 + quarter_hour(rng));
        let (arrival_time, days) = departure_time.add_duration(duration);
        // Saturates on the last representable day
        let arrival_date = departure_date
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(departure_date);

        let base_price = rng.gen_range(self.pricing_engine.base_range(route));
        let price = self.pricing_engine.final_price(base_price, stops);

        Flight {
            id: uuid::Builder::from_random_bytes(rng.gen()).into_uuid(),
            airline: airline.name.to_string(),
            airline_code: airline.code.to_string(),
            logo: airline.logo.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_date,
            departure_time,
            arrival_date,
            arrival_time,
            duration,
            price,
            currency: self.pricing_engine.currency().to_string(),
            stops,
            stop_locations: (stops > 0).then_some(stop_locations),
        }
    }
}

impl Default for FlightGenerator {
    fn default() -> Self {
        Self::new(PricingEngine::default())
    }
}

fn quarter_hour<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    QUARTER_HOURS[rng.gen_range(0..QUARTER_HOURS.len())]
}

/// Draws up to `count` distinct layover airports from the route's pool.
///
/// The route's own endpoints are never eligible. When the pool runs dry the
/// result is shorter than `count`, and the flight gets fewer stops.
fn pick_stop_locations<R: Rng + ?Sized>(
    rng: &mut R,
    route: RouteClass,
    origin: &str,
    destination: &str,
    count: u32,
) -> Vec<String> {
    let mut candidates: Vec<&str> = route
        .stop_pool()
        .iter()
        .copied()
        .filter(|code| *code != origin && *code != destination)
        .collect();

    let mut chosen = Vec::with_capacity(count as usize);
    while chosen.len() < count as usize && !candidates.is_empty() {
        let idx = rng.gen_range(0..candidates.len());
        chosen.push(candidates.swap_remove(idx).to_string());
    }
    chosen
}
