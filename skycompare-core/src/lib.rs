pub mod flight;
pub mod repository;
pub mod schedule;
pub mod search;

pub use flight::Flight;
pub use repository::SearchHistoryRepository;
pub use schedule::{ClockTime, FlightDuration, ParseError};
pub use search::{
    check_departure_date, SearchHistoryEntry, SearchParams, SearchRequest, TripType,
};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
