pub mod generator;
pub mod ranker;
pub mod timeline;

pub use generator::{FlightGenerator, DEFAULT_FLIGHT_COUNT};
pub use ranker::{airlines_in, FilterState, ResultRanker, SortDirection, SortKey, SortState};
pub use timeline::{price_timeline, PricePoint, PriceTier, PriceTimeline};
