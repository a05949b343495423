use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{SearchHit, SortOrder};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: String,
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub order: SortOrder,
    pub limit: Option<i64>,
}

/// Request payload for adding a user word
#[derive(Debug, Deserialize, Validate)]
pub struct AddWordRequest {
    #[validate(length(min = 1, message = "Word must not be empty"))]
    pub word: String,
    #[validate(length(min = 1, message = "Definition must not be empty"))]
    pub definition: String,
}

impl AddWordRequest {
    pub fn trimmed(self) -> Self {
        Self {
            word: self.word.trim().to_string(),
            definition: self.definition.trim().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SetFavoriteRequest {
    pub value: bool,
}

#[derive(Debug, Deserialize)]
pub struct ToggleFavoriteRequest {
    pub current: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteResponse {
    pub id: i64,
    /// Absent when nothing was updated, the id does not name a stored entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub entries: i64,
    pub version: u64,
    pub importing: bool,
}
