use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::data::models::{AddWordRequest, Entry, ListParams};
use crate::handlers::AppState;
use crate::handlers::error_responses::ApiError;

pub async fn list_entries(
    Query(params): Query<ListParams>,
    State(state): State<AppState>,
) -> Json<Vec<Entry>> {
    let limit = params.limit.unwrap_or(state.list_limit);
    Json(state.dictionary.list_all(params.order, limit).await)
}

pub async fn get_entry(
    Path(entry_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Entry>, ApiError> {
    state
        .dictionary
        .get(entry_id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound(entry_id))
}

pub async fn add_entry(
    State(state): State<AppState>,
    Json(payload): Json<AddWordRequest>,
) -> Result<(StatusCode, Json<Entry>), ApiError> {
    let payload = payload.trimmed();
    payload.validate()?;

    let entry = state
        .dictionary
        .add_word(&payload.word, &payload.definition)
        .await
        .ok_or(ApiError::SaveFailed)?;

    Ok((StatusCode::CREATED, Json(entry)))
}
