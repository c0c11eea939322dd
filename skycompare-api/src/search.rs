use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use skycompare_catalog::{airport_by_code, Airport};
use skycompare_core::{check_departure_date, Flight, SearchParams, SearchRequest};
use skycompare_offer::{
    airlines_in, FilterState, PriceTimeline, ResultRanker, SortDirection, SortKey, SortState,
};
use std::collections::BTreeSet;
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAccepted {
    pub generation: u64,
    pub params: SearchParams,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResultsQuery {
    pub sort: Option<SortKey>,
    pub direction: Option<SortDirection>,
    /// Comma-separated stop counts, e.g. `0,1`
    pub stops: Option<String>,
    /// Comma-separated airline names
    pub airlines: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsResponse {
    pub generation: u64,
    pub loading: bool,
    pub params: Option<SearchParams>,
    pub sort: SortState,
    pub total: usize,
    pub available_airlines: Vec<String>,
    pub active_filters: usize,
    pub flights: Vec<Flight>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopDetail {
    pub code: String,
    pub airport: Option<&'static Airport>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightDetailResponse {
    pub flight: Flight,
    pub origin_airport: Option<&'static Airport>,
    pub destination_airport: Option<&'static Airport>,
    pub stops: Vec<StopDetail>,
    pub direct: bool,
    pub arrives_next_day: bool,
}

#[derive(Debug, Deserialize)]
pub struct SelectDateRequest {
    pub date: NaiveDate,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights/search", post(search_flights))
        .route("/v1/flights/results", get(get_results))
        .route("/v1/flights/timeline", get(get_timeline))
        .route("/v1/flights/timeline/select", post(select_date))
        .route("/v1/flights/{id}", get(get_flight))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/flights/search
/// Validate the form, remember it, and start generating results
pub async fn search_flights(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<(StatusCode, Json<SearchAccepted>), AppError> {
    let params = req
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    state
        .history
        .append(params.clone())
        .await
        .map_err(AppError::internal)?;

    start_search(&state, params).await
}

pub(crate) async fn start_search(
    state: &AppState,
    params: SearchParams,
) -> Result<(StatusCode, Json<SearchAccepted>), AppError> {
    let (ticket, _) = state.session.search(params.clone()).await;
    Ok((
        StatusCode::ACCEPTED,
        Json(SearchAccepted {
            generation: ticket.generation,
            params,
        }),
    ))
}

/// GET /v1/flights/results
/// Current results, filtered and sorted
pub async fn get_results(
    State(state): State<AppState>,
    Query(query): Query<ResultsQuery>,
) -> Result<Json<ResultsResponse>, AppError> {
    let ranker = ranker_from_query(&query)?;
    let snapshot = state.session.snapshot().await;

    Ok(Json(ResultsResponse {
        generation: snapshot.generation,
        loading: snapshot.loading,
        total: snapshot.flights.len(),
        available_airlines: airlines_in(&snapshot.flights),
        active_filters: ranker.filters.active_count(),
        sort: ranker.sort,
        flights: ranker.rank(&snapshot.flights),
        params: snapshot.params,
    }))
}

fn ranker_from_query(query: &ResultsQuery) -> Result<ResultRanker, AppError> {
    let sort = SortState::new(
        query.sort.unwrap_or_default(),
        query.direction.unwrap_or_default(),
    );

    let mut filters = FilterState::default();
    if let Some(stops) = &query.stops {
        filters.stops = split_list(stops)
            .map(|s| {
                s.parse::<u32>()
                    .map_err(|_| AppError::ValidationError(format!("Invalid stop count: {}", s)))
            })
            .collect::<Result<BTreeSet<_>, _>>()?;
    }
    if let Some(airlines) = &query.airlines {
        filters.airlines = split_list(airlines).map(str::to_string).collect();
    }

    Ok(ResultRanker::new(sort, filters))
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// GET /v1/flights/{id}
pub async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FlightDetailResponse>, AppError> {
    let snapshot = state.session.snapshot().await;
    let flight = snapshot
        .flights
        .into_iter()
        .find(|f| f.id == id)
        .ok_or_else(|| AppError::NotFoundError(format!("Flight {} not found", id)))?;

    let stops = flight
        .stop_codes()
        .iter()
        .map(|code| StopDetail {
            code: code.clone(),
            airport: airport_by_code(code),
        })
        .collect();

    Ok(Json(FlightDetailResponse {
        origin_airport: airport_by_code(&flight.origin),
        destination_airport: airport_by_code(&flight.destination),
        stops,
        direct: flight.is_direct(),
        arrives_next_day: flight.arrives_next_day(),
        flight,
    }))
}

/// GET /v1/flights/timeline
/// Mock fares around the current departure date
pub async fn get_timeline(State(state): State<AppState>) -> Result<Json<PriceTimeline>, AppError> {
    let timeline = state
        .session
        .timeline(Local::now().date_naive())
        .await
        .ok_or_else(no_search_yet)?;
    Ok(Json(timeline))
}

/// POST /v1/flights/timeline/select
/// Re-run the current search on another day
pub async fn select_date(
    State(state): State<AppState>,
    Json(req): Json<SelectDateRequest>,
) -> Result<(StatusCode, Json<SearchAccepted>), AppError> {
    check_departure_date(req.date).map_err(|e| AppError::ValidationError(e.to_string()))?;
    let params = current_params(&state).await?.with_departure_date(req.date);
    info!("Departure date changed to {}", req.date);
    start_search(&state, params).await
}

async fn current_params(state: &AppState) -> Result<SearchParams, AppError> {
    state
        .session
        .current_params()
        .await
        .ok_or_else(no_search_yet)
}

fn no_search_yet() -> AppError {
    AppError::NotFoundError("No search has been made yet".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranker_from_query() {
        let query = ResultsQuery {
            sort: Some(SortKey::Duration),
            direction: Some(SortDirection::Desc),
            stops: Some("0, 2".to_string()),
            airlines: Some("IndiGo,Air India,".to_string()),
        };
        let ranker = ranker_from_query(&query).unwrap();
        assert_eq!(ranker.sort, SortState::new(SortKey::Duration, SortDirection::Desc));
        assert_eq!(ranker.filters.stops, BTreeSet::from([0, 2]));
        assert_eq!(ranker.filters.airlines.len(), 2);
        assert!(ranker.filters.airlines.contains("Air India"));
    }

    #[test]
    fn test_default_query_allows_everything() {
        let ranker = ranker_from_query(&ResultsQuery::default()).unwrap();
        assert_eq!(ranker, ResultRanker::default());
    }

    #[test]
    fn test_bad_stop_count() {
        let query = ResultsQuery {
            stops: Some("one".to_string()),
            ..ResultsQuery::default()
        };
        assert!(matches!(ranker_from_query(&query), Err(AppError::ValidationError(_))));
    }
}
