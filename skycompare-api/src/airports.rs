use axum::{extract::Query, routing::get, Json, Router};
use serde::Deserialize;
use skycompare_catalog::{search_airports, Airport};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AirportQuery {
    #[serde(default)]
    pub q: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/airports", get(list_airports))
}

/// GET /v1/airports?q=
/// Airport suggestions for the search form
pub async fn list_airports(Query(query): Query<AirportQuery>) -> Json<Vec<&'static Airport>> {
    Json(search_airports(&query.q))
}
