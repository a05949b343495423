pub mod config;
pub mod data;
pub mod db;
pub mod features;
pub mod handlers;
pub mod parser;
pub mod schema;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use data::models::{Entry, ImportReport, SearchHit, SortOrder, StoreError};
pub use features::dictionary::Dictionary;
pub use features::import::SeedImporter;
pub use features::search::SearchDebouncer;

pub type DbPool = diesel::r2d2::Pool<diesel::r2d2::ConnectionManager<diesel::SqliteConnection>>;
