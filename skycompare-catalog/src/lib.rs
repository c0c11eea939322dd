pub mod airlines;
pub mod airports;
pub mod pricing;
pub mod route;

pub use airlines::{airline_by_code, Airline, AIRLINES};
pub use airports::{airport_by_code, search_airports, Airport, AIRPORTS};
pub use pricing::{PricingConfig, PricingEngine};
pub use route::RouteClass;
