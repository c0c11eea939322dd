use chrono::NaiveDate;
use serde::Serialize;
use skycompare_core::{Flight, SearchParams};
use skycompare_offer::{price_timeline, FlightGenerator, PriceTimeline};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Identifies one search request. Only the newest ticket may deliver results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchTicket {
    pub generation: u64,
}

/// What the results view currently shows.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub generation: u64,
    pub params: Option<SearchParams>,
    pub flights: Vec<Flight>,
    pub loading: bool,
    /// Drawn on first request and kept until the next search begins
    #[serde(skip)]
    pub timeline: Option<PriceTimeline>,
}

pub struct SearchSession {
    generator: FlightGenerator,
    flight_count: usize,
    latency: Duration,
    state: RwLock<SessionSnapshot>,
}

impl SearchSession {
    pub fn new(generator: FlightGenerator, flight_count: usize, latency: Duration) -> Self {
        Self {
            generator,
            flight_count,
            latency,
            state: RwLock::new(SessionSnapshot::default()),
        }
    }

    /// Makes `params` the current search and issues its ticket.
    ///
    /// Any ticket handed out before this one becomes stale.
    pub async fn begin(&self, params: SearchParams) -> SearchTicket {
        let mut state = self.state.write().await;
        state.generation += 1;
        state.params = Some(params);
        state.loading = true;
        state.timeline = None;
        SearchTicket {
            generation: state.generation,
        }
    }

    /// Applies results for `ticket`, unless a newer search has started since.
    pub async fn deliver(&self, ticket: SearchTicket, flights: Vec<Flight>) -> bool {
        let mut state = self.state.write().await;
        if ticket.generation != state.generation {
            debug!(
                "Dropping stale results for search #{} (current #{})",
                ticket.generation, state.generation
            );
            return false;
        }
        state.flights = flights;
        state.loading = false;
        true
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.state.read().await.clone()
    }

    pub async fn current_params(&self) -> Option<SearchParams> {
        self.state.read().await.params.clone()
    }

    /// Price timeline around the current departure date, `None` before any search.
    ///
    /// Prices are random but stable for the lifetime of one search.
    pub async fn timeline(&self, today: NaiveDate) -> Option<PriceTimeline> {
        let mut state = self.state.write().await;
        let departure_date = state.params.as_ref()?.departure_date;
        let timeline = state
            .timeline
            .get_or_insert_with(|| price_timeline(&mut rand::thread_rng(), departure_date, today));
        Some(timeline.clone())
    }

    /// Starts a search: results are generated after the simulated latency and
    /// delivered in the background.
    pub async fn search(self: &Arc<Self>, params: SearchParams) -> (SearchTicket, JoinHandle<bool>) {
        let ticket = self.begin(params.clone()).await;
        info!(
            "Search #{} dispatched: {} -> {} on {}",
            ticket.generation, params.origin, params.destination, params.departure_date
        );

        let session = Arc::clone(self);
        let handle = tokio::spawn(async move {
            if !session.latency.is_zero() {
                tokio::time::sleep(session.latency).await;
            }
            let flights = session.generator.generate(
                &params.origin,
                &params.destination,
                params.departure_date,
                session.flight_count,
            );
            session.deliver(ticket, flights).await
        });

        (ticket, handle)
    }
}
