use axum::{
    Json,
    extract::{Query, State},
};

use crate::data::models::{SearchParams, SearchResult};
use crate::handlers::AppState;

pub async fn search_api(
    Query(params): Query<SearchParams>,
    State(state): State<AppState>,
) -> Json<SearchResult> {
    let limit = params.limit.unwrap_or(state.search_limit);
    let results = state.dictionary.search_ranked(&params.q, limit).await;

    Json(SearchResult {
        query: params.q,
        results,
    })
}
