use std::sync::Arc;
use std::time::Duration;
use skycompare_catalog::{PricingConfig, PricingEngine};
use skycompare_core::SearchHistoryRepository;
use skycompare_offer::FlightGenerator;
use skycompare_store::app_config::SearchConfig;

use crate::session::SearchSession;

#[derive(Clone)]
pub struct AppState {
    pub history: Arc<dyn SearchHistoryRepository>,
    pub session: Arc<SearchSession>,
}

impl AppState {
    pub fn new(search: &SearchConfig, history: Arc<dyn SearchHistoryRepository>) -> Self {
        let pricing = PricingEngine::new(PricingConfig {
            currency: search.currency.clone(),
            ..PricingConfig::default()
        });
        let session = SearchSession::new(
            FlightGenerator::new(pricing),
            search.flight_count,
            Duration::from_millis(search.latency_ms),
        );
        Self {
            history,
            session: Arc::new(session),
        }
    }
}
