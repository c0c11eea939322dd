use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use skycompare_core::SearchHistoryEntry;
use uuid::Uuid;

use crate::error::AppError;
use crate::search::{start_search, SearchAccepted};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/history", get(list_history).delete(clear_history))
        .route("/v1/history/{id}", delete(remove_entry))
        .route("/v1/history/{id}/repeat", post(repeat_search))
}

/// GET /v1/history
pub async fn list_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<SearchHistoryEntry>>, AppError> {
    let entries = state.history.list().await.map_err(AppError::internal)?;
    Ok(Json(entries))
}

/// DELETE /v1/history
pub async fn clear_history(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.history.clear().await.map_err(AppError::internal)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /v1/history/{id}
pub async fn remove_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.history.remove(id).await.map_err(AppError::internal)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFoundError(format!("History entry {} not found", id)))
    }
}

/// POST /v1/history/{id}/repeat
/// Run a past search again without recording it a second time
pub async fn repeat_search(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<SearchAccepted>), AppError> {
    let entry = state
        .history
        .list()
        .await
        .map_err(AppError::internal)?
        .into_iter()
        .find(|e| e.id == id)
        .ok_or_else(|| AppError::NotFoundError(format!("History entry {} not found", id)))?;

    start_search(&state, entry.search_params).await
}
