use axum::{
    Json,
    extract::{Path, State},
};

use crate::data::models::{Entry, FavoriteResponse, SetFavoriteRequest, ToggleFavoriteRequest};
use crate::handlers::AppState;

pub async fn list_favorites(State(state): State<AppState>) -> Json<Vec<Entry>> {
    Json(state.dictionary.list_favorites().await)
}

pub async fn set_favorite(
    Path(entry_id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<SetFavoriteRequest>,
) -> Json<FavoriteResponse> {
    let updated = state.dictionary.set_favorite(entry_id, payload.value).await;

    Json(FavoriteResponse {
        id: entry_id,
        is_favorite: updated.then_some(payload.value),
        updated: Some(updated),
    })
}

pub async fn toggle_favorite(
    Path(entry_id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<ToggleFavoriteRequest>,
) -> Json<FavoriteResponse> {
    let is_favorite = state
        .dictionary
        .toggle_favorite(entry_id, payload.current)
        .await;

    Json(FavoriteResponse {
        id: entry_id,
        is_favorite: Some(is_favorite),
        updated: None,
    })
}
