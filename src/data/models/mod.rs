pub mod api_models;
pub mod entry_models;
pub mod error_models;
pub mod seed_models;

pub use api_models::{
    AddWordRequest, FavoriteResponse, ListParams, SearchParams, SearchResult,
    SetFavoriteRequest, StatusResponse, ToggleFavoriteRequest,
};
pub use entry_models::{Entry, NewEntry, SearchHit, SortOrder};
pub use error_models::{ImportError, StoreError};
pub use seed_models::{ImportReport, SeedEntry, SeedFile};
