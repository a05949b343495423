pub mod entries;
pub mod error_responses;
pub mod search;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post, put},
};

use crate::config::AppConfig;
use crate::data::models::StatusResponse;
use crate::features::dictionary::Dictionary;

/// Shared handler state: the store client plus default result limits.
#[derive(Clone)]
pub struct AppState {
    pub dictionary: Dictionary,
    pub search_limit: i64,
    pub list_limit: i64,
}

impl AppState {
    pub fn new(dictionary: Dictionary, config: &AppConfig) -> Self {
        Self {
            dictionary,
            search_limit: config.search_limit,
            list_limit: config.list_limit,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let entries_router = Router::new()
        .route("/", get(entries::list_entries).post(entries::add_entry))
        .route("/{id}", get(entries::get_entry))
        .route("/{id}/favorite", put(entries::set_favorite))
        .route("/{id}/favorite/toggle", post(entries::toggle_favorite));

    let api_router = Router::new()
        .nest("/entries", entries_router)
        .route("/search", get(search::search_api))
        .route("/favorites", get(entries::list_favorites))
        .route("/status", get(status));

    Router::new().nest("/api", api_router).with_state(state)
}

async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        entries: state.dictionary.count().await,
        version: state.dictionary.version(),
        importing: state.dictionary.is_importing(),
    })
}
